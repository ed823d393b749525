//! Resume Builder Component
//!
//! Marketing block for the AI resume builder.

use leptos::prelude::*;

const FEATURES: &[&str] = &[
    "Smart Content Analysis",
    "ATS-Friendly Templates",
    "Keyword Optimization",
    "Real-time Suggestions",
    "Multiple Format Export",
    "Industry-Specific Tips",
];

#[component]
pub fn ResumeBuilder() -> impl IntoView {
    view! {
        <section class="relative py-20 bg-gray-100">
            <div class="container mx-auto px-4">
                <div class="max-w-6xl mx-auto rounded-2xl p-8 md:p-12 border bg-white border-gray-200">
                    <div class="grid md:grid-cols-2 gap-12 items-center">
                        <div>
                            <div class="inline-flex items-center gap-2 px-4 py-2 rounded-full mb-6 bg-orange-500/10">
                                <span>"🧠"</span>
                                <span class="font-medium text-orange-600">"AI-Powered Resume Builder"</span>
                            </div>
                            <h2 class="text-4xl font-bold mb-6 text-gray-900">"Create Professional Resumes with AI"</h2>
                            <p class="text-lg mb-8 text-gray-600">
                                "Let our AI analyze your experience and automatically generate a professional resume. "
                                "Get personalized suggestions and formatting that stands out to employers."
                            </p>
                            <button
                                type="button"
                                class="bg-gradient-to-r from-orange-500 to-amber-500 text-white px-8 py-3 rounded-lg font-semibold hover:opacity-90"
                            >
                                "Build Your Resume"
                            </button>
                        </div>

                        <div class="grid grid-cols-2 gap-4 p-6 rounded-xl bg-gray-50">
                            {FEATURES.iter().map(|feature| view! {
                                <div class="flex items-center gap-3 p-4 rounded-lg bg-white shadow-md">
                                    <div class="w-2 h-2 rounded-full bg-orange-500" />
                                    <span class="text-sm font-medium text-gray-700">{*feature}</span>
                                </div>
                            }).collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
