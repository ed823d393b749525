//! Premium AI Page
//!
//! Showcase of the AI and premium tools. Tools above the visitor's plan are
//! shown locked with an upgrade prompt.

use leptos::prelude::*;

use fileforge_core::{data, Route, ShowcaseCategory, ShowcaseTool, Tier};

use crate::components::SiteLink;
use crate::context::use_site_services;

const BENEFITS: &[(&str, &str, &str)] = &[
    (
        "⚡",
        "Advanced AI Features",
        "Access our most powerful AI tools for document analysis, summarization, and content generation.",
    ),
    (
        "🔒",
        "Enhanced Security",
        "Premium-grade encryption and security features to keep your sensitive documents protected.",
    ),
    (
        "⭐",
        "Priority Support",
        "Get dedicated support and faster response times for all your PDF processing needs.",
    ),
];

const SECTION_STYLES: &[&str] = &[
    "from-purple-50 to-indigo-50",
    "from-teal-50 to-emerald-50",
    "from-amber-50 to-orange-50",
    "from-blue-50 to-cyan-50",
];

#[component]
pub fn PremiumAiPage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gradient-to-b from-gray-50 to-white">
            <div class="bg-gradient-to-r from-purple-600 to-indigo-600 text-white">
                <div class="container mx-auto px-6 lg:px-12 py-20 text-center">
                    <h1 class="text-4xl md:text-5xl font-bold mb-6">"👑 Premium AI Features"</h1>
                    <p class="text-xl max-w-2xl mx-auto text-purple-100 mb-8">
                        "Unlock the full potential of your PDF documents with our advanced AI-powered tools and premium features."
                    </p>
                    <SiteLink
                        route=Route::SignIn
                        class="inline-block bg-gradient-to-r from-yellow-400 to-amber-500 text-gray-900 font-semibold px-8 py-3 rounded-lg hover:opacity-90"
                    >
                        "⚡ Upgrade to Premium"
                    </SiteLink>
                </div>
            </div>

            <div class="container mx-auto px-6 lg:px-12 py-16">
                <div class="mb-16 text-center">
                    <h2 class="text-3xl font-bold text-gray-800 mb-8">"Premium Benefits"</h2>
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                        {BENEFITS.iter().map(|&(icon, title, text)| view! {
                            <div class="bg-white p-6 rounded-xl shadow-sm">
                                <div class="bg-purple-100 w-16 h-16 rounded-full flex items-center justify-center mx-auto mb-4 text-3xl">
                                    {icon}
                                </div>
                                <h3 class="text-xl font-semibold mb-2">{title}</h3>
                                <p class="text-gray-600">{text}</p>
                            </div>
                        }).collect_view()}
                    </div>
                </div>

                <div class="space-y-16">
                    {data::showcase().iter().enumerate().map(|(index, category)| view! {
                        <ShowcaseSection category=category style=SECTION_STYLES[index % SECTION_STYLES.len()] />
                    }).collect_view()}
                </div>

                <div class="mt-20 bg-gradient-to-r from-purple-600 to-indigo-600 rounded-2xl p-10 text-center text-white">
                    <h2 class="text-3xl font-bold mb-4">"Ready to Upgrade?"</h2>
                    <p class="text-lg text-purple-100 max-w-2xl mx-auto mb-8">
                        "Get access to all premium features and take your PDF workflow to the next level."
                    </p>
                    <div class="flex flex-col md:flex-row gap-4 justify-center">
                        <SiteLink route=Route::Home class="bg-white text-purple-700 font-semibold px-8 py-3 rounded-lg hover:bg-gray-100">
                            "View Pricing Plans"
                        </SiteLink>
                        <SiteLink
                            route=Route::SignIn
                            class="bg-gradient-to-r from-yellow-400 to-amber-500 text-gray-900 font-semibold px-8 py-3 rounded-lg hover:opacity-90"
                        >
                            "⚡ Upgrade Now"
                        </SiteLink>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ShowcaseSection(category: &'static ShowcaseCategory, style: &'static str) -> impl IntoView {
    view! {
        <div>
            <div class="mb-8">
                <h2 class="text-2xl font-bold text-gray-800">{category.title.as_str()}</h2>
                <p class="text-gray-600 max-w-3xl">{category.description.as_str()}</p>
            </div>
            <div class=format!("bg-gradient-to-br {style} p-8 rounded-2xl")>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {category.tools.iter().map(|tool| view! { <ShowcaseCard tool=tool /> }).collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
fn ShowcaseCard(tool: &'static ShowcaseTool) -> impl IntoView {
    let services = use_site_services();
    let premium = tool.required_tier > Tier::Free;
    let locked = !services.entitlements.can_use_showcase(tool);

    view! {
        <div class="bg-white rounded-xl p-6 shadow-sm hover:shadow-md flex flex-col relative overflow-hidden">
            {premium.then(|| view! {
                <div class="absolute top-0 right-0 bg-gradient-to-r from-yellow-400 to-amber-500 text-xs font-bold px-3 py-1 rounded-bl-lg text-gray-900">
                    "👑 PREMIUM"
                </div>
            })}
            <h4 class="font-semibold text-gray-800">{tool.title.as_str()}</h4>
            <p class="text-sm text-gray-500 mt-1">{tool.description.as_str()}</p>
            <div class="mt-auto pt-4">
                {if locked {
                    view! {
                        <SiteLink route=Route::SignIn class="text-sm font-medium text-gray-500 hover:text-purple-600">
                            {format!("🔒 Requires {}", tool.required_tier.label())}
                        </SiteLink>
                    }.into_any()
                } else {
                    view! {
                        <span class="text-sm font-medium text-purple-600">"Try it now →"</span>
                    }.into_any()
                }}
            </div>
        </div>
    }
}
