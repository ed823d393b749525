//! Hero Section Component
//!
//! Headline and the catalog search box. Typing filters the power tools
//! below; submitting scrolls to them.

use leptos::prelude::*;

use crate::components::POWER_TOOLS_ID;
use crate::dom;
use crate::store::{store_set_query, use_site_store, SiteStateStoreFields};

#[component]
pub fn HeroSection() -> impl IntoView {
    let store = use_site_store();
    let (focused, set_focused) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        dom::scroll_into_view(POWER_TOOLS_ID);
    };

    let input_class = move || {
        if focused.get() {
            "w-full px-5 py-4 pl-12 pr-16 border-2 rounded-xl shadow-md focus:outline-none border-orange-500"
        } else {
            "w-full px-5 py-4 pl-12 pr-16 border-2 rounded-xl shadow-md focus:outline-none border-gray-300"
        }
    };

    view! {
        <section class="relative overflow-hidden">
            <div class="absolute inset-0 bg-gradient-to-br from-orange-500/10 via-amber-500/5 to-transparent" />

            <div class="relative container mx-auto px-6 lg:px-12 py-24 flex flex-col items-center text-center">
                <span class="inline-block px-4 py-1.5 rounded-full text-sm font-medium mb-4 bg-gray-900/5 text-gray-700">
                    "Powered by Advanced AI Technology"
                </span>

                <h1 class="text-4xl md:text-6xl font-extrabold leading-tight mb-6 bg-gradient-to-r from-orange-600 to-amber-600 text-transparent bg-clip-text">
                    "Transform Your Files with AI Magic"
                </h1>

                <p class="text-lg md:text-xl max-w-2xl mx-auto mb-8 text-gray-600">
                    "Experience the future of file conversion with our AI-powered tools. "
                    "Convert, enhance, and transform your files with precision and intelligence."
                </p>

                <div class="w-full max-w-2xl mx-auto mb-10">
                    <form class="relative" on:submit=on_submit>
                        <input
                            type="text"
                            class=input_class
                            placeholder="Search for conversion tools (e.g., 'PDF to Word', 'JPEG')..."
                            prop:value=move || store.search_query().get()
                            on:input=move |ev| store_set_query(&store, event_target_value(&ev))
                            on:focus=move |_| set_focused.set(true)
                            on:blur=move |_| set_focused.set(false)
                        />
                        <span class="absolute left-4 top-4 text-gray-400">"🔍"</span>
                        <button
                            type="submit"
                            class="absolute right-3 top-3 bg-gradient-to-r from-orange-500 to-amber-500 text-white px-3 py-2 rounded-lg hover:opacity-90"
                        >
                            "Search"
                        </button>
                    </form>

                    <Show when=move || !store.search_query().get().is_empty()>
                        <div class="mt-2 text-sm text-gray-600 flex items-center justify-center">
                            <span>"Scroll down to see results"</span>
                            <span class="ml-1 animate-bounce">"↓"</span>
                        </div>
                    </Show>
                </div>

                <div class="flex gap-4">
                    <button
                        type="button"
                        class="bg-gradient-to-r from-orange-500 to-amber-500 text-white px-6 md:px-8 py-3 rounded-lg font-semibold hover:opacity-90"
                        on:click=move |_| dom::scroll_into_view(POWER_TOOLS_ID)
                    >
                        "Get Started Free"
                    </button>
                    <button
                        type="button"
                        class="px-6 md:px-8 py-3 rounded-lg font-semibold border flex items-center gap-2 border-gray-300 text-gray-700 hover:bg-gray-50"
                    >
                        "▶ Watch Demo"
                    </button>
                </div>
            </div>
        </section>
    }
}
