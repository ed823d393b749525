//! Dismissible Notice

use leptos::prelude::*;

/// Error banner with a close button
#[component]
pub fn Notice(
    message: String,
    #[prop(into)] on_dismiss: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="flex items-start justify-between gap-4 mt-4 p-3 rounded-md bg-red-50 border border-red-200 text-red-700" role="alert">
            <span class="text-sm">{message}</span>
            <button
                type="button"
                class="text-red-400 hover:text-red-600"
                aria-label="Dismiss"
                on:click=move |_| on_dismiss.run(())
            >
                "×"
            </button>
        </div>
    }
}
