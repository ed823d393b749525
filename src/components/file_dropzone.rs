//! File Dropzone Component
//!
//! Drag-and-drop target plus a hidden file picker for the PDF to convert.

use leptos::prelude::*;
use web_sys::{DragEvent, HtmlInputElement};

use fileforge_core::conversion::EXPECTED_EXTENSION;
use fileforge_core::UploadedFile;

use crate::dom;

/// Human readable byte count
pub fn format_size(size: u64) -> String {
    if size < 1024 {
        format!("{} B", size)
    } else if size < 1024 * 1024 {
        format!("{:.1} KB", size as f64 / 1024.0)
    } else {
        format!("{:.1} MB", size as f64 / (1024.0 * 1024.0))
    }
}

#[component]
pub fn FileDropzone(
    /// Called with the dropped or picked file
    on_file: Callback<UploadedFile>,
    /// Largest upload the visitor's plan accepts
    max_bytes: u64,
    /// Currently chosen file, if any
    #[prop(into)]
    selected: Signal<Option<UploadedFile>>,
) -> impl IntoView {
    let (is_over, set_is_over) = signal(false);

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_over.set(true);
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_over.set(false);
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_over.set(false);

        let file = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0));
        match file {
            Some(file) => on_file.run(dom::uploaded_file(&file)),
            None => log::debug!("[Dropzone] Drop carried no file"),
        }
    };

    let on_change = move |ev: leptos::ev::Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            on_file.run(dom::uploaded_file(&file));
        }
        // Allow picking the same file twice in a row
        input.set_value("");
    };

    view! {
        <label
            class=move || {
                let base = "flex flex-col items-center justify-center w-full h-48 border-2 border-dashed rounded-xl cursor-pointer";
                if is_over.get() {
                    format!("{base} border-orange-500 bg-orange-50")
                } else {
                    format!("{base} border-gray-300 bg-gray-50 hover:bg-gray-100")
                }
            }
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:drop=on_drop
        >
            {move || match selected.get() {
                Some(file) => view! {
                    <span class="text-3xl mb-2">"📄"</span>
                    <span class="font-medium text-gray-800">{file.name}</span>
                    <span class="text-sm text-gray-500">{format_size(file.size)}</span>
                }.into_any(),
                None => view! {
                    <span class="text-3xl mb-2">"⬆"</span>
                    <span class="font-medium text-gray-700">"Drop your PDF here or click to browse"</span>
                    <span class="text-sm text-gray-500">
                        {format!("Max file size: {}", format_size(max_bytes))}
                    </span>
                }.into_any(),
            }}
            <input type="file" class="hidden" accept=EXPECTED_EXTENSION on:change=on_change />
        </label>
    }
}
