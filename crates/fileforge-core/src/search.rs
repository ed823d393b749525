//! Catalog Search
//!
//! Case-insensitive substring filter over the tool catalog.

use crate::models::{ToolCategory, ToolItem};

/// Result of filtering the catalog against a query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResults {
    /// Trimmed query, `None` when nothing was typed
    pub query: Option<String>,
    pub categories: Vec<ToolCategory>,
}

impl SearchResults {
    /// A query was given but nothing matched it
    pub fn is_exhausted(&self) -> bool {
        self.query.is_some() && self.categories.is_empty()
    }

    pub fn item_count(&self) -> usize {
        self.categories.iter().map(|c| c.items.len()).sum()
    }
}

/// Returns true if the lower-cased query occurs in the item's title,
/// extension, or description.
pub fn item_matches(item: &ToolItem, lower_query: &str) -> bool {
    item.title.to_lowercase().contains(lower_query)
        || item.extension.to_lowercase().contains(lower_query)
        || item
            .description
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains(lower_query))
}

/// Narrow the catalog to items matching `query`.
///
/// A blank query returns the catalog as is. Otherwise categories keep only
/// matching items, in catalog order, and categories left empty are dropped.
pub fn filter_catalog(catalog: &[ToolCategory], query: &str) -> SearchResults {
    if query.trim().is_empty() {
        return SearchResults {
            query: None,
            categories: catalog.to_vec(),
        };
    }

    let lower_query = query.to_lowercase();
    let categories: Vec<ToolCategory> = catalog
        .iter()
        .filter_map(|category| {
            let items: Vec<ToolItem> = category
                .items
                .iter()
                .filter(|item| item_matches(item, &lower_query))
                .cloned()
                .collect();
            (!items.is_empty()).then(|| ToolCategory {
                title: category.title.clone(),
                items,
            })
        })
        .collect();

    log::debug!(
        "[Search] '{}' matched {} categories",
        query.trim(),
        categories.len()
    );

    SearchResults {
        query: Some(query.trim().to_string()),
        categories,
    }
}
