//! In-app link that switches pages without reloading.

use leptos::prelude::*;

use fileforge_core::Route;

use crate::store::{store_navigate, use_site_store};

#[component]
pub fn SiteLink(
    route: Route,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    let store = use_site_store();
    let href = route.path();

    let on_click = move |ev: web_sys::MouseEvent| {
        // let modified clicks open a new tab as usual
        if ev.ctrl_key() || ev.meta_key() || ev.shift_key() {
            return;
        }
        ev.prevent_default();
        store_navigate(&store, route.clone());
    };

    view! {
        <a href=href class=class on:click=on_click>
            {children()}
        </a>
    }
}
