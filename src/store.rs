//! Site State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. All UI state the
//! pages share lives here and is changed only through the helpers below.

use leptos::prelude::*;
use reactive_stores::Store;

use fileforge_core::{BillingCycle, Route};

use crate::dom;

/// Navbar tab
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NavTab {
    #[default]
    Home,
    Compress,
    Convert,
    Edit,
    Sign,
    OtherTools,
    Premium,
}

impl NavTab {
    /// Tab to highlight when a page is opened directly
    pub fn for_route(route: &Route) -> Self {
        match route {
            Route::PremiumAi => NavTab::Premium,
            _ => NavTab::Home,
        }
    }
}

/// Shared site state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct SiteState {
    /// Page being shown
    pub route: Route,
    /// Hero search text, filters the power tools catalog
    pub search_query: String,
    pub active_tab: NavTab,
    pub mobile_menu_open: bool,
    pub billing_cycle: BillingCycle,
}

impl SiteState {
    pub fn new(route: Route) -> Self {
        Self {
            active_tab: NavTab::for_route(&route),
            route,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type SiteStore = Store<SiteState>;

/// Get the site store from context
pub fn use_site_store() -> SiteStore {
    expect_context::<SiteStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Show another page and record it in browser history
pub fn store_navigate(store: &SiteStore, route: Route) {
    if store.route().get_untracked() == route {
        *store.mobile_menu_open().write() = false;
        return;
    }
    dom::push_history(&route.path());
    *store.mobile_menu_open().write() = false;
    *store.active_tab().write() = NavTab::for_route(&route);
    *store.route().write() = route;
    dom::scroll_to_top();
}

/// Follow a back/forward navigation without touching history
pub fn store_sync_route(store: &SiteStore, route: Route) {
    *store.active_tab().write() = NavTab::for_route(&route);
    *store.route().write() = route;
}

pub fn store_select_tab(store: &SiteStore, tab: NavTab) {
    *store.active_tab().write() = tab;
    *store.mobile_menu_open().write() = false;
}

pub fn store_toggle_mobile_menu(store: &SiteStore) {
    store.mobile_menu_open().update(|open| *open = !*open);
}

pub fn store_set_query(store: &SiteStore, query: String) {
    *store.search_query().write() = query;
}

pub fn store_set_billing(store: &SiteStore, cycle: BillingCycle) {
    *store.billing_cycle().write() = cycle;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mobile_menu_toggles_and_closes_on_tab() {
        let owner = Owner::new();
        owner.with(|| {
            let store = Store::new(SiteState::new(Route::Home));
            assert!(!store.mobile_menu_open().get_untracked());

            store_toggle_mobile_menu(&store);
            assert!(store.mobile_menu_open().get_untracked());
            store_toggle_mobile_menu(&store);
            assert!(!store.mobile_menu_open().get_untracked());

            store_toggle_mobile_menu(&store);
            store_select_tab(&store, NavTab::Convert);
            assert!(!store.mobile_menu_open().get_untracked());
            assert_eq!(store.active_tab().get_untracked(), NavTab::Convert);
        });
    }

    #[test]
    fn test_initial_tab_follows_route() {
        assert_eq!(SiteState::new(Route::PremiumAi).active_tab, NavTab::Premium);
        assert_eq!(SiteState::new(Route::SignIn).active_tab, NavTab::Home);
    }
}
