//! Premium Promo Component

use leptos::prelude::*;

use fileforge_core::Route;

use crate::components::SiteLink;

#[component]
pub fn PremiumPromo() -> impl IntoView {
    view! {
        <section class="py-16 bg-gradient-to-r from-purple-600 to-indigo-600 text-white">
            <div class="container mx-auto px-6 lg:px-12 flex flex-col md:flex-row items-center justify-between gap-8">
                <div class="max-w-2xl">
                    <span class="inline-block px-3 py-1 rounded-full text-xs font-semibold bg-white/20 mb-4">
                        "👑 PREMIUM AI"
                    </span>
                    <h2 class="text-3xl font-bold mb-4">"Unlock AI-powered document tools"</h2>
                    <p class="text-white/80">
                        "Chat with your PDFs, summarise long reports, translate documents and convert to "
                        "premium formats like EPUB and LaTeX."
                    </p>
                </div>
                <SiteLink
                    route=Route::PremiumAi
                    class="bg-white text-purple-700 px-8 py-3 rounded-lg font-semibold hover:bg-purple-50 whitespace-nowrap"
                >
                    "Explore Premium AI"
                </SiteLink>
            </div>
        </section>
    }
}
