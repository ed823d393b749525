//! Convert Page Component
//!
//! One page per catalog tool. The visitor supplies a PDF (file or URL),
//! runs the simulated conversion and downloads the placeholder result.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use fileforge_core::{
    ConversionError, ConversionRequest, ConversionSession, ConversionStatus, Route, ToolItem,
    UploadedFile,
};

use crate::components::{FileDropzone, Notice, SiteLink};
use crate::context::use_site_services;
use crate::download::ObjectUrl;

#[component]
pub fn ConvertPage(tool: ToolItem) -> impl IntoView {
    let services = use_site_services();

    if !services.entitlements.can_use_tool(&tool) {
        log::info!("[Convert] {} needs the {} plan", tool.title, tool.required_tier.label());
        return view! { <LockedTool tool=tool /> }.into_any();
    }

    let max_bytes = services.entitlements.max_upload_bytes();
    let converter = services.converter.clone();
    let api_key_missing = services.api_key_missing();

    let request = RwSignal::new(ConversionRequest::new(tool.title.clone()));
    let session = RwSignal::new(ConversionSession::new());
    let download: StoredValue<Option<ObjectUrl>> = StoredValue::new(None);

    let selected = Signal::derive(move || request.with(|r| r.file().cloned()));
    let url_value = move || request.with(|r| r.url().unwrap_or_default().to_string());

    let on_file = Callback::new(move |file: UploadedFile| {
        log::debug!("[Convert] Selected {} ({} bytes)", file.name, file.size);
        request.update(|r| r.set_file(file));
    });

    let on_convert = move |_| {
        let current = request.get_untracked();
        let mut prepared = None;
        session.update(|s| prepared = s.start(&converter, &current));
        let Some(prepared) = prepared else { return };

        let converter = converter.clone();
        spawn_local(async move {
            let outcome = converter
                .run(prepared, |delay| {
                    TimeoutFuture::new(u32::try_from(delay.as_millis()).unwrap_or(u32::MAX))
                })
                .await;
            let outcome = outcome.and_then(|artifact| match ObjectUrl::from_artifact(&artifact) {
                Ok(url) => {
                    let _ = download.try_set_value(Some(url));
                    Ok(artifact)
                }
                Err(e) => Err(ConversionError::Other(format!("Could not prepare download: {:?}", e))),
            });
            session.update(|s| s.finish(outcome));
        });
    };

    let on_reset = move |_| {
        if session.with_untracked(|s| s.is_busy()) {
            return;
        }
        session.update(|s| s.reset());
        request.update(|r| r.clear_source());
        // Dropping the handle revokes the blob URL
        let _ = download.try_set_value(None);
    };

    let dismiss = Callback::new(move |_| session.update(|s| s.reset()));

    let busy = move || session.with(|s| s.is_busy());
    let show_key_banner = move || {
        api_key_missing || session.with(|s| matches!(s.status(), ConversionStatus::ApiKeyMissing))
    };

    let title = tool.title.clone();
    let description = tool
        .description
        .clone()
        .unwrap_or_else(|| format!("Convert your PDF to {} in seconds.", tool.extension));

    view! {
        <section class="container mx-auto px-6 lg:px-12 py-16 max-w-3xl">
            <SiteLink route=Route::Home class="text-sm text-orange-600 hover:underline">
                "← All tools"
            </SiteLink>

            <h1 class="text-3xl md:text-4xl font-bold text-gray-800 mt-4 mb-2">{title}</h1>
            <p class="text-gray-600 mb-8">{description}</p>

            <Show when=show_key_banner>
                <div class="mb-6 p-4 rounded-lg border border-amber-300 bg-amber-50 text-amber-800">
                    <p class="font-semibold">"Conversion service unavailable"</p>
                    <p class="text-sm">"The conversion service is not configured for this site. Please try again later."</p>
                </div>
            </Show>

            {move || session.with(|s| s.error().map(|err| err.to_string())).map(|message| view! {
                <Notice message=message on_dismiss=dismiss />
            })}

            {move || {
                if let Some(artifact) = session.with(|s| s.artifact().cloned()) {
                    let link = download.with_value(|d| {
                        d.as_ref().map(|u| (u.href().to_string(), u.file_name().to_string()))
                    });
                    let (href, file_name) = link.unwrap_or_else(|| (String::new(), artifact.file_name.clone()));
                    view! {
                        <div class="p-6 rounded-xl border border-green-200 bg-green-50 text-center">
                            <p class="text-lg font-semibold text-green-800 mb-1">"Your file is ready"</p>
                            <p class="text-sm text-green-700 mb-4">{format!("Converted to {}", artifact.format)}</p>
                            <a
                                href=href
                                download=file_name.clone()
                                class="inline-block bg-gradient-to-r from-orange-500 to-amber-500 text-white px-6 py-3 rounded-lg font-semibold hover:opacity-90"
                            >
                                {format!("Download {}", file_name)}
                            </a>
                            <button
                                type="button"
                                class="block mx-auto mt-4 text-sm text-gray-600 hover:underline"
                                on:click=on_reset
                            >
                                "Convert another file"
                            </button>
                        </div>
                    }.into_any()
                } else {
                    view! {
                        <div class="space-y-6">
                            <FileDropzone on_file=on_file max_bytes=max_bytes selected=selected />

                            <div class="flex items-center gap-3 text-sm text-gray-400">
                                <div class="flex-1 border-t border-gray-200" />
                                "or"
                                <div class="flex-1 border-t border-gray-200" />
                            </div>

                            <input
                                type="url"
                                class="w-full px-4 py-3 border rounded-lg border-gray-300 focus:outline-none focus:border-orange-500"
                                placeholder="Paste a link to a PDF (https://example.com/file.pdf)"
                                prop:value=url_value
                                on:input=move |ev| request.update(|r| r.set_url(&event_target_value(&ev)))
                            />

                            <button
                                type="button"
                                class="w-full bg-gradient-to-r from-orange-500 to-amber-500 text-white px-6 py-3 rounded-lg font-semibold hover:opacity-90 disabled:opacity-50 disabled:cursor-not-allowed"
                                disabled=busy
                                on:click=on_convert.clone()
                            >
                                {move || if busy() { "Converting..." } else { "Convert" }}
                            </button>
                        </div>
                    }.into_any()
                }
            }}
        </section>
    }
    .into_any()
}

#[component]
fn LockedTool(tool: ToolItem) -> impl IntoView {
    view! {
        <section class="container mx-auto px-6 lg:px-12 py-24 max-w-2xl text-center">
            <span class="text-5xl">"🔒"</span>
            <h1 class="text-3xl font-bold text-gray-800 mt-4 mb-2">{tool.title.clone()}</h1>
            <p class="text-gray-600 mb-8">
                {format!("This tool is part of the {} plan.", tool.required_tier.label())}
            </p>
            <SiteLink
                route=Route::PremiumAi
                class="inline-block bg-gradient-to-r from-purple-600 to-indigo-600 text-white px-6 py-3 rounded-lg font-semibold hover:opacity-90"
            >
                "Upgrade to unlock"
            </SiteLink>
        </section>
    }
}
