//! UI Components
//!
//! Page sections and reusable pieces of the site.

mod convert_page;
mod file_dropzone;
mod footer;
mod hero_section;
mod navbar;
mod notice;
mod power_tools;
mod premium_ai;
mod premium_promo;
mod pricing_section;
mod resume_builder;
mod sign_in;
mod site_link;

pub use convert_page::ConvertPage;
pub use file_dropzone::FileDropzone;
pub use footer::Footer;
pub use hero_section::HeroSection;
pub use navbar::Navbar;
pub use notice::Notice;
pub use power_tools::{PowerTools, POWER_TOOLS_ID};
pub use premium_ai::PremiumAiPage;
pub use premium_promo::PremiumPromo;
pub use pricing_section::PricingSection;
pub use resume_builder::ResumeBuilder;
pub use sign_in::SignInPage;
pub use site_link::SiteLink;
