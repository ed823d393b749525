//! Pricing Section Component
//!
//! Plan cards with a monthly/yearly toggle and the shared feature matrix.

use leptos::prelude::*;

use fileforge_core::data::{self, PricingTable};
use fileforge_core::{BillingCycle, PricingPlan, Route, Tier};

use crate::components::SiteLink;
use crate::store::{store_set_billing, use_site_store, SiteStateStoreFields};

#[component]
pub fn PricingSection() -> impl IntoView {
    let store = use_site_store();
    let table = data::pricing();

    let toggle_class = move |cycle: BillingCycle, edge: &'static str| {
        move || {
            if store.billing_cycle().get() == cycle {
                format!("px-4 py-2 {edge} bg-gray-800 text-white")
            } else {
                format!("px-4 py-2 {edge} bg-gray-200 text-gray-700")
            }
        }
    };

    view! {
        <section class="w-full py-20 bg-gradient-to-b from-gray-50 to-white">
            <div class="container mx-auto px-6 lg:px-12">
                <div class="max-w-4xl mx-auto text-center mb-12">
                    <h2 class="text-4xl font-bold mb-4 text-gray-900">"Choose the Perfect Plan"</h2>
                    <p class="text-lg mb-8 text-gray-600">
                        "Select the plan that best fits your needs. Upgrade or downgrade anytime."
                    </p>

                    <div class="flex items-center justify-center mb-8">
                        <button
                            type="button"
                            class=toggle_class(BillingCycle::Monthly, "rounded-l-lg")
                            on:click=move |_| store_set_billing(&store, BillingCycle::Monthly)
                        >
                            "Monthly"
                        </button>
                        <button
                            type="button"
                            class=toggle_class(BillingCycle::Yearly, "rounded-r-lg")
                            on:click=move |_| store_set_billing(&store, BillingCycle::Yearly)
                        >
                            "Yearly "
                            {table.best_yearly_savings().map(|p| view! {
                                <span class="text-xs font-medium">{format!("Save {p}%")}</span>
                            })}
                        </button>
                    </div>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                    {table.plans.iter().map(|plan| view! { <PlanCard plan=plan table=table /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn PlanCard(plan: &'static PricingPlan, table: &'static PricingTable) -> impl IntoView {
    let store = use_site_store();
    let tier = plan.tier;

    let (header_class, cta_class) = match tier {
        Tier::PremiumAi => (
            "p-2 bg-gradient-to-r from-purple-600 to-indigo-600 text-white",
            "inline-block w-full py-3 rounded-lg font-semibold bg-gradient-to-r from-purple-600 to-indigo-600 text-white hover:opacity-90",
        ),
        Tier::Standard => (
            "p-2 bg-gradient-to-r from-blue-500 to-cyan-500 text-white",
            "inline-block w-full py-3 rounded-lg font-semibold bg-gradient-to-r from-blue-500 to-cyan-500 text-white hover:opacity-90",
        ),
        Tier::Free => (
            "p-2 bg-gray-100 text-gray-800",
            "inline-block w-full py-3 rounded-lg font-semibold bg-gray-100 text-gray-800 hover:bg-gray-200",
        ),
    };

    let card_class = if plan.popular {
        "relative rounded-xl shadow-lg border bg-white border-gray-200 overflow-hidden md:scale-105 z-10"
    } else {
        "relative rounded-xl shadow-lg border bg-white border-gray-200 overflow-hidden"
    };

    let features = table
        .features
        .iter()
        .map(|feature| {
            let included = feature.is_included(tier);
            let emphasised = feature.highlight && included;
            let row_class = match (included, emphasised) {
                (false, _) => "flex items-center gap-3 opacity-50",
                (true, true) => "flex items-center gap-3 font-medium text-purple-700",
                (true, false) => "flex items-center gap-3",
            };
            let mark_class = if feature.highlight { "text-purple-500" } else { "text-green-500" };
            view! {
                <li class=row_class>
                    {if included {
                        view! { <span class=mark_class>"✓"</span> }.into_any()
                    } else {
                        view! { <span class="text-gray-300">"✗"</span> }.into_any()
                    }}
                    <span>{feature.text_for(tier)}</span>
                    {emphasised.then(|| view! { <span class="text-yellow-500">"⚡"</span> })}
                </li>
            }
        })
        .collect_view();

    view! {
        <div class=card_class>
            {plan.popular.then(|| view! {
                <div class="absolute top-0 right-0 bg-gradient-to-r from-purple-600 to-indigo-600 text-white text-xs font-bold px-4 py-1 rounded-bl-lg">
                    "👑 MOST POPULAR"
                </div>
            })}

            <div class=header_class>
                <h3 class="text-xl font-bold text-center py-3">{tier.label()}</h3>
            </div>

            <div class="p-6">
                <p class="text-gray-600 text-center mb-6 h-12">{plan.description.as_str()}</p>

                <div class="text-center mb-6">
                    <span class="text-4xl font-bold text-gray-900">
                        {move || plan.price_label(store.billing_cycle().get())}
                    </span>
                    {move || {
                        let percent = plan.yearly_savings_percent();
                        (store.billing_cycle().get() == BillingCycle::Yearly && percent > 0).then(|| view! {
                            <p class="text-sm text-green-600 mt-1">{format!("{percent}% less than paying monthly")}</p>
                        })
                    }}
                </div>

                <ul class="space-y-3 mb-8">{features}</ul>

                <div class="text-center">
                    <SiteLink route=Route::from_path(&plan.cta_link) class=cta_class>
                        {plan.cta_text.as_str()}
                    </SiteLink>
                </div>
            </div>
        </div>
    }
}
