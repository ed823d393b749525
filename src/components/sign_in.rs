//! Sign In Page
//!
//! Sign-in / sign-up form. There is no account backend; submitting only
//! logs the attempt.

use leptos::prelude::*;

#[component]
pub fn SignInPage() -> impl IntoView {
    let (is_sign_up, set_is_sign_up) = signal(false);
    let (show_password, set_show_password) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let mode = if is_sign_up.get_untracked() { "sign up" } else { "sign in" };
        log::info!("[SignIn] Ignoring {} submit, accounts are not available", mode);
    };

    let input_class = "w-full px-4 py-3 border rounded-lg border-gray-300 focus:outline-none focus:border-orange-500";

    view! {
        <section class="min-h-[80vh] flex items-center justify-center px-4 py-16 bg-gradient-to-b from-gray-50 to-white">
            <div class="w-full max-w-md bg-white rounded-2xl shadow-lg p-8">
                <h1 class="text-3xl font-bold text-gray-900 text-center mb-2">
                    {move || if is_sign_up.get() { "Create an account" } else { "Welcome back" }}
                </h1>
                <p class="text-gray-600 text-center mb-8">
                    {move || if is_sign_up.get() {
                        "Sign up to start converting your files"
                    } else {
                        "Sign in to access your files and tools"
                    }}
                </p>

                <form class="space-y-5" on:submit=on_submit>
                    <Show when=move || is_sign_up.get()>
                        <div>
                            <label class="block text-sm font-medium text-gray-700 mb-1">"Full name"</label>
                            <input type="text" class=input_class placeholder="John Doe" />
                        </div>
                    </Show>

                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-1">"Email address"</label>
                        <input type="email" class=input_class placeholder="you@example.com" />
                    </div>

                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-1">"Password"</label>
                        <div class="relative">
                            <input
                                type=move || if show_password.get() { "text" } else { "password" }
                                class=input_class
                                placeholder="••••••••"
                            />
                            <button
                                type="button"
                                class="absolute right-3 top-3 text-gray-500 text-sm"
                                on:click=move |_| set_show_password.update(|v| *v = !*v)
                            >
                                {move || if show_password.get() { "Hide" } else { "Show" }}
                            </button>
                        </div>
                    </div>

                    <Show when=move || !is_sign_up.get()>
                        <div class="flex items-center justify-between text-sm">
                            <label class="flex items-center gap-2 text-gray-600">
                                <input type="checkbox" />
                                "Remember me"
                            </label>
                            <a href="#" class="text-orange-600 hover:underline">"Forgot password?"</a>
                        </div>
                    </Show>

                    <button
                        type="submit"
                        class="w-full bg-gradient-to-r from-orange-500 to-amber-500 text-white py-3 rounded-lg font-semibold hover:opacity-90"
                    >
                        {move || if is_sign_up.get() { "Create Account" } else { "Sign In" }}
                    </button>
                </form>

                <p class="mt-8 text-center text-sm text-gray-600">
                    {move || if is_sign_up.get() { "Already have an account? " } else { "Don't have an account? " }}
                    <button
                        type="button"
                        class="text-orange-600 font-medium hover:underline"
                        on:click=move |_| set_is_sign_up.update(|v| *v = !*v)
                    >
                        {move || if is_sign_up.get() { "Sign in" } else { "Sign up" }}
                    </button>
                </p>
            </div>
        </section>
    }
}
