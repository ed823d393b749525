//! FileForge App
//!
//! Top-level composition: navbar, the page for the current route, footer.

use leptos::ev;
use leptos::prelude::*;
use reactive_stores::Store;

use fileforge_core::{data, Route};

use crate::components::{
    ConvertPage, Footer, HeroSection, Navbar, PowerTools, PremiumAiPage, PremiumPromo,
    PricingSection, ResumeBuilder, SignInPage, SiteLink,
};
use crate::context::SiteServices;
use crate::dom;
use crate::store::{store_sync_route, SiteState, SiteStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let initial = Route::from_path(&dom::current_path());
    log::info!("[App] Starting on {}", initial.path());

    let store = Store::new(SiteState::new(initial));
    provide_context(store);
    provide_context(SiteServices::from_build_env());

    // Back/forward buttons
    let _ = window_event_listener(ev::popstate, move |_| {
        store_sync_route(&store, Route::from_path(&dom::current_path()));
    });

    view! {
        <div class="flex flex-col min-h-screen">
            <Navbar />

            <main class="flex-1">
                {move || match store.route().get() {
                    Route::Home => view! { <HomePage /> }.into_any(),
                    Route::PremiumAi => view! { <PremiumAiPage /> }.into_any(),
                    Route::SignIn => view! { <SignInPage /> }.into_any(),
                    Route::Convert(path) => match data::find_tool(&path) {
                        Some(tool) => view! { <ConvertPage tool=tool.clone() /> }.into_any(),
                        None => view! { <NotFound path=path /> }.into_any(),
                    },
                    Route::NotFound(path) => view! { <NotFound path=path /> }.into_any(),
                }}
            </main>

            <Footer />
        </div>
    }
}

/// Home page sections
#[component]
fn HomePage() -> impl IntoView {
    view! {
        <HeroSection />
        <PowerTools />
        <PremiumPromo />
        <ResumeBuilder />
        <PricingSection />
    }
}

#[component]
fn NotFound(path: String) -> impl IntoView {
    log::warn!("[App] No page for {}", path);
    view! {
        <section class="container mx-auto px-6 py-24 text-center">
            <h1 class="text-3xl font-bold text-gray-800 mb-4">"Page not found"</h1>
            <p class="text-gray-600 mb-8">"Nothing lives at " <code>{path}</code> "."</p>
            <SiteLink route=Route::Home class="text-orange-600 underline">
                "Back to all tools"
            </SiteLink>
        </section>
    }
}
