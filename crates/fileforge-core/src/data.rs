//! Embedded Content Tables
//!
//! Catalog, footer sitemap, premium showcase and pricing data ship as JSON
//! inside the binary and are decoded once on first use.

use std::sync::OnceLock;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::DataError;
use crate::models::{FooterGroup, ShowcaseCategory, ToolCategory, ToolItem};
use crate::pricing::{PricingFeature, PricingPlan};

const CATALOG_JSON: &str = include_str!("../data/catalog.json");
const FOOTER_JSON: &str = include_str!("../data/footer.json");
const SHOWCASE_JSON: &str = include_str!("../data/showcase.json");
const PRICING_JSON: &str = include_str!("../data/pricing.json");

/// Number of footer sitemap columns
pub const FOOTER_COLUMNS: usize = 6;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PricingTable {
    pub plans: Vec<PricingPlan>,
    pub features: Vec<PricingFeature>,
}

impl PricingTable {
    /// Largest yearly saving any paid plan offers, for the billing toggle
    pub fn best_yearly_savings(&self) -> Option<u32> {
        self.plans
            .iter()
            .map(PricingPlan::yearly_savings_percent)
            .filter(|&p| p > 0)
            .max()
    }
}

fn parse<T: DeserializeOwned>(table: &'static str, json: &str) -> Result<T, DataError> {
    serde_json::from_str(json).map_err(|source| DataError::Parse { table, source })
}

/// Decode a table once; a broken table is logged and replaced by its default.
fn cached<T: DeserializeOwned + Default>(
    cell: &'static OnceLock<T>,
    table: &'static str,
    json: &'static str,
) -> &'static T {
    cell.get_or_init(|| {
        parse(table, json).unwrap_or_else(|err| {
            log::error!("[Data] {}", err);
            T::default()
        })
    })
}

pub fn catalog() -> &'static [ToolCategory] {
    static CELL: OnceLock<Vec<ToolCategory>> = OnceLock::new();
    cached(&CELL, "catalog", CATALOG_JSON).as_slice()
}

pub fn footer_groups() -> &'static [FooterGroup] {
    static CELL: OnceLock<Vec<FooterGroup>> = OnceLock::new();
    cached(&CELL, "footer", FOOTER_JSON).as_slice()
}

pub fn showcase() -> &'static [ShowcaseCategory] {
    static CELL: OnceLock<Vec<ShowcaseCategory>> = OnceLock::new();
    cached(&CELL, "showcase", SHOWCASE_JSON).as_slice()
}

pub fn pricing() -> &'static PricingTable {
    static CELL: OnceLock<PricingTable> = OnceLock::new();
    cached(&CELL, "pricing", PRICING_JSON)
}

/// Catalog entry a conversion page is keyed by
pub fn find_tool(target_path: &str) -> Option<&'static ToolItem> {
    catalog()
        .iter()
        .flat_map(|c| c.items.iter())
        .find(|item| item.target_path == target_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::pack_columns;
    use crate::pricing::Tier;
    use crate::routes::Route;
    use crate::search::filter_catalog;

    #[test]
    fn test_tables_parse() {
        parse::<Vec<ToolCategory>>("catalog", CATALOG_JSON).unwrap();
        parse::<Vec<FooterGroup>>("footer", FOOTER_JSON).unwrap();
        parse::<Vec<ShowcaseCategory>>("showcase", SHOWCASE_JSON).unwrap();
        parse::<PricingTable>("pricing", PRICING_JSON).unwrap();
    }

    #[test]
    fn test_bad_json_reports_table() {
        let err = parse::<Vec<FooterGroup>>("footer", "{").unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse footer table"));
    }

    #[test]
    fn test_catalog_shape() {
        let titles: Vec<&str> = catalog().iter().map(|c| c.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Document Formats",
                "Image Formats",
                "Web & Digital Formats",
                "Premium Formats"
            ]
        );
        for item in catalog().iter().flat_map(|c| c.items.iter()) {
            assert!(!item.title.is_empty());
            assert!(!item.extension.is_empty());
            assert!(matches!(Route::from_path(&item.target_path), Route::Convert(_)));
        }
    }

    #[test]
    fn test_premium_formats_require_premium_tier() {
        let premium = catalog()
            .iter()
            .find(|c| c.title == "Premium Formats")
            .unwrap();
        assert!(premium.items.iter().all(|i| i.required_tier == Tier::PremiumAi));
    }

    #[test]
    fn test_jpg_search_over_catalog() {
        let results = filter_catalog(catalog(), "jpg");
        assert_eq!(results.categories.len(), 1);
        assert_eq!(results.categories[0].items[0].title, "PDF to JPEG");
    }

    #[test]
    fn test_footer_packs_into_six_columns() {
        let packed = pack_columns(footer_groups(), FOOTER_COLUMNS);
        assert_eq!(packed.columns.len(), FOOTER_COLUMNS);
        let placed: usize = packed.columns.iter().map(|c| c.groups.len()).sum();
        assert_eq!(placed, footer_groups().len());
        assert_eq!(packed.max_total(), 7);
    }

    #[test]
    fn test_footer_column_layout() {
        let packed = pack_columns(footer_groups(), FOOTER_COLUMNS);
        let titles: Vec<Vec<&str>> = packed
            .columns
            .iter()
            .map(|c| c.groups.iter().map(|g| g.title.as_str()).collect())
            .collect();
        assert_eq!(
            titles,
            vec![
                vec!["View & Edit"],
                vec!["Convert to PDF"],
                vec!["Organize"],
                vec!["Convert from PDF", "Convert"],
                vec!["AI PDF", "Compress"],
                vec!["More", "Sign"],
            ]
        );
        assert_eq!(packed.totals(), vec![7, 5, 5, 5, 5, 4]);
    }

    #[test]
    fn test_find_tool() {
        assert_eq!(find_tool("/pdf_to_word").map(|t| t.title.as_str()), Some("PDF to Word"));
        assert!(find_tool("/pdf_to_nothing").is_none());
    }

    #[test]
    fn test_pricing_table() {
        let table = pricing();
        let tiers: Vec<Tier> = table.plans.iter().map(|p| p.tier).collect();
        assert_eq!(tiers, Tier::ALL.to_vec());
        assert!(table.plans.iter().filter(|p| p.popular).count() == 1);
        let ebook = table.features.iter().find(|f| f.id == "ebook").unwrap();
        assert!(ebook.highlight);
        assert!(!ebook.is_included(Tier::Standard));
        assert_eq!(table.best_yearly_savings(), Some(16));
    }

    #[test]
    fn test_free_only_table_has_no_savings() {
        let table = PricingTable::default();
        assert_eq!(table.best_yearly_savings(), None);
    }
}
