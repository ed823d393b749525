//! Site Services
//!
//! Per-visit services provided via Leptos Context API: the conversion
//! backend and the visitor's entitlements, both resolved once at startup.

use leptos::prelude::*;

use fileforge_core::config::API_KEY_VAR;
use fileforge_core::{ApiConfig, Entitlements, MockConverter};

#[derive(Clone, Debug)]
pub struct SiteServices {
    pub entitlements: Entitlements,
    pub converter: MockConverter,
}

impl SiteServices {
    /// Anonymous visitors browse on the free tier.
    pub fn from_build_env() -> Self {
        let config = ApiConfig::from_build_env();
        if !config.has_api_key() {
            log::error!(
                "[Config] API key is missing. Set {} when building the site.",
                API_KEY_VAR
            );
        }
        let entitlements = Entitlements::default();
        Self {
            converter: MockConverter::new(config, entitlements),
            entitlements,
        }
    }

    pub fn api_key_missing(&self) -> bool {
        !self.converter.config().has_api_key()
    }
}

pub fn use_site_services() -> SiteServices {
    expect_context::<SiteServices>()
}
