//! FileForge Core
//!
//! Browser-free logic behind the FileForge site: the tool catalog and its
//! search filter, the footer column packer, pricing tiers and entitlements,
//! route parsing, and the simulated conversion service.

pub mod config;
pub mod conversion;
pub mod data;
pub mod entitlement;
pub mod error;
pub mod layout;
pub mod models;
pub mod pricing;
pub mod routes;
pub mod search;

pub use config::ApiConfig;
pub use conversion::{
    ConversionRequest, ConversionSession, ConversionSource, ConversionStatus, DownloadArtifact,
    MockConverter, TargetFormat, UploadedFile,
};
pub use entitlement::Entitlements;
pub use error::{ConversionError, DataError};
pub use layout::{pack_columns, Column, ColumnAssignment, Weighted};
pub use models::{FooterGroup, ShowcaseCategory, ShowcaseTool, ToolCategory, ToolItem};
pub use pricing::{BillingCycle, PricingFeature, PricingPlan, Tier};
pub use routes::Route;
pub use search::{filter_catalog, SearchResults};
