//! Power Tools Component
//!
//! Catalog of conversion tools, filtered by the hero search query.

use leptos::prelude::*;

use fileforge_core::{data, filter_catalog, Route, ToolCategory, ToolItem};

use crate::components::SiteLink;
use crate::context::use_site_services;
use crate::store::{use_site_store, SiteStateStoreFields};

/// Anchor the hero search scrolls to
pub const POWER_TOOLS_ID: &str = "power-tools-section";

/// Card colours, cycled by category position
const CATEGORY_STYLES: &[&str] = &[
    "bg-blue-50 border-blue-200",
    "bg-purple-50 border-purple-200",
    "bg-teal-50 border-teal-200",
    "bg-amber-50 border-amber-200",
];

#[component]
pub fn PowerTools() -> impl IntoView {
    let store = use_site_store();
    let results = Memo::new(move |_| filter_catalog(data::catalog(), &store.search_query().get()));

    view! {
        <section id=POWER_TOOLS_ID class="bg-gradient-to-b from-white to-gray-50 py-16">
            <div class="container mx-auto px-6 lg:px-12">
                <div class="text-center mb-12">
                    <h2 class="text-3xl font-bold text-gray-800 mb-4">"Power Tools"</h2>
                    <p class="text-gray-600 max-w-2xl mx-auto">
                        "Convert your PDF documents to and from various formats with our powerful conversion tools."
                    </p>
                    {move || results.get().query.map(|query| view! {
                        <div class="mt-4 p-3 bg-orange-50 border border-orange-200 rounded-lg inline-block">
                            <p class="text-orange-700">
                                "Showing results for: "
                                <span class="font-semibold">"\"" {query} "\""</span>
                            </p>
                        </div>
                    })}
                </div>

                {move || {
                    let results = results.get();
                    if results.is_exhausted() {
                        view! {
                            <div class="text-center py-16">
                                <p class="text-gray-500 text-lg">"No conversion tools found matching your search."</p>
                                <p class="text-gray-400 mt-2">"Try a different search term or browse all categories."</p>
                            </div>
                        }.into_any()
                    } else {
                        view! {
                            <div class="flex justify-center">
                                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8 max-w-5xl">
                                    {results.categories.into_iter().enumerate().map(|(index, category)| {
                                        view! { <CategoryCard index=index category=category /> }
                                    }).collect_view()}
                                </div>
                            </div>
                        }.into_any()
                    }
                }}
            </div>
        </section>
    }
}

#[component]
fn CategoryCard(index: usize, category: ToolCategory) -> impl IntoView {
    let style = CATEGORY_STYLES[index % CATEGORY_STYLES.len()];

    view! {
        <div class=format!("border rounded-xl p-6 shadow-md hover:shadow-lg w-full max-w-md mx-auto {style}")>
            <h3 class="text-lg font-semibold mb-4">{format!("{}. {}", index + 1, category.title)}</h3>
            <ul class="space-y-3">
                {category.items.into_iter().map(|item| view! { <ToolRow item=item /> }).collect_view()}
            </ul>
        </div>
    }
}

#[component]
fn ToolRow(item: ToolItem) -> impl IntoView {
    let services = use_site_services();
    let locked = !services.entitlements.can_use_tool(&item);
    let detail = match &item.description {
        Some(description) => format!("{} – {}", item.extension, description),
        None => item.extension.clone(),
    };

    view! {
        <li class="group">
            <SiteLink
                route=Route::Convert(item.target_path.clone())
                class="flex items-start hover:bg-white p-2 rounded-lg"
            >
                <div>
                    <div class="flex items-center gap-2">
                        <span class="font-medium text-gray-800">{item.title.clone()}</span>
                        {locked.then(|| view! {
                            <span class="text-xs px-2 py-0.5 rounded-full bg-purple-100 text-purple-700">"👑 Premium"</span>
                        })}
                        <span class="text-orange-500 opacity-0 group-hover:opacity-100">"→"</span>
                    </div>
                    <span class="text-sm text-gray-500 block">{detail}</span>
                </div>
            </SiteLink>
        </li>
    }
}
