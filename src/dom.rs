//! Browser Helpers
//!
//! Thin wrappers over window, history and scrolling.

use wasm_bindgen::JsValue;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use fileforge_core::UploadedFile;

/// Path of the current page, "/" if unavailable
pub fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

pub fn push_history(path: &str) {
    let Some(window) = web_sys::window() else { return };
    let result = window
        .history()
        .and_then(|h| h.push_state_with_url(&JsValue::NULL, "", Some(path)));
    if let Err(e) = result {
        log::warn!("[Nav] Failed to push {}: {:?}", path, e);
    }
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

/// Smooth-scroll to the element with `id`, if it exists
pub fn scroll_into_view(id: &str) {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id));
    if let Some(element) = element {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

pub fn uploaded_file(file: &web_sys::File) -> UploadedFile {
    UploadedFile {
        name: file.name(),
        size: file.size() as u64,
    }
}

/// Current calendar year from the browser clock
pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}
