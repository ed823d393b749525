//! Navbar Component
//!
//! Logo, section tabs, the Premium AI tab and the sign-in button, with a
//! collapsible menu on small screens.

use leptos::prelude::*;

use fileforge_core::Route;

use crate::store::{
    store_navigate, store_select_tab, store_toggle_mobile_menu, use_site_store, NavTab,
    SiteStateStoreFields,
};
use crate::components::SiteLink;

/// Section tabs (tab, label, icon); they all lead to the home page
const NAV_ITEMS: &[(NavTab, &str, &str)] = &[
    (NavTab::Home, "HOME", "🏠"),
    (NavTab::Compress, "COMPRESS", "🗜"),
    (NavTab::Convert, "CONVERT", "🔄"),
    (NavTab::Edit, "EDIT", "✏️"),
    (NavTab::Sign, "SIGN", "✍️"),
    (NavTab::OtherTools, "OTHER TOOLS", "🛠"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    let store = use_site_store();

    let select = move |tab: NavTab| {
        let route = if tab == NavTab::Premium {
            Route::PremiumAi
        } else {
            Route::Home
        };
        store_navigate(&store, route);
        store_select_tab(&store, tab);
    };

    let tab_buttons = move |vertical: bool| {
        NAV_ITEMS
            .iter()
            .map(|&(tab, label, icon)| {
                let class = move || {
                    let base = if vertical {
                        "flex items-center gap-3 w-full px-4 py-3 rounded-md text-left"
                    } else {
                        "flex items-center gap-1 px-3 py-2 rounded-md text-sm font-medium whitespace-nowrap"
                    };
                    if store.active_tab().get() == tab {
                        format!("{base} bg-gradient-to-r from-orange-500 to-amber-500 text-white")
                    } else {
                        format!("{base} text-gray-700 hover:text-gray-900 hover:bg-gray-100")
                    }
                };
                view! {
                    <button type="button" class=class on:click=move |_| select(tab)>
                        <span>{icon}</span>
                        <span>{label}</span>
                    </button>
                }
            })
            .collect_view()
    };

    let premium_class = move || {
        if store.active_tab().get() == NavTab::Premium {
            "flex items-center gap-1 px-4 py-2 rounded-md text-sm font-medium ml-1 border bg-gradient-to-r from-purple-600 to-indigo-600 text-white border-transparent"
        } else {
            "flex items-center gap-1 px-4 py-2 rounded-md text-sm font-medium ml-1 border border-purple-200 text-purple-700 hover:bg-purple-50"
        }
    };

    view! {
        <nav class="relative z-20 border-b backdrop-blur-md bg-white/80 border-gray-200">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    <SiteLink route=Route::Home class="flex items-center gap-2">
                        <span class="text-2xl">"📄"</span>
                        <span class="text-xl font-bold bg-gradient-to-r from-orange-500 to-amber-500 text-transparent bg-clip-text">
                            "FileForge"
                        </span>
                    </SiteLink>

                    // Desktop
                    <div class="hidden md:flex items-center gap-2 lg:gap-4">
                        {tab_buttons(false)}
                        <button type="button" class=premium_class on:click=move |_| select(NavTab::Premium)>
                            <span>"👑"</span>
                            <span>"PREMIUM AI"</span>
                            <span class="text-xs">"✨"</span>
                        </button>
                    </div>

                    <SiteLink
                        route=Route::SignIn
                        class="hidden md:flex bg-gradient-to-r from-orange-500 to-amber-500 text-white px-4 py-2 rounded-lg font-semibold hover:opacity-90 items-center gap-2 ml-2"
                    >
                        "Sign In"
                    </SiteLink>

                    <button
                        type="button"
                        class="md:hidden p-2 rounded-md text-gray-700 hover:bg-gray-100"
                        aria-label="Toggle menu"
                        on:click=move |_| store_toggle_mobile_menu(&store)
                    >
                        {move || if store.mobile_menu_open().get() { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>

            // Mobile
            <Show when=move || store.mobile_menu_open().get()>
                <div class="md:hidden border-t border-gray-200 bg-white px-4 py-3 space-y-1">
                    {tab_buttons(true)}
                    <button
                        type="button"
                        class="flex items-center gap-3 w-full px-4 py-3 rounded-md text-left text-purple-700 hover:bg-purple-50"
                        on:click=move |_| select(NavTab::Premium)
                    >
                        <span>"👑"</span>
                        <span class="font-medium">"PREMIUM AI"</span>
                    </button>
                    <SiteLink
                        route=Route::SignIn
                        class="block w-full mt-2 text-center bg-gradient-to-r from-orange-500 to-amber-500 text-white px-4 py-3 rounded-lg font-semibold"
                    >
                        "Sign In"
                    </SiteLink>
                </div>
            </Show>
        </nav>
    }
}
