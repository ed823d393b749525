//! Site Models
//!
//! Plain records for the static content tables.

use serde::{Deserialize, Serialize};

use crate::pricing::Tier;

/// One convertible format offering in the power-tools catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolItem {
    pub title: String,
    /// Comma-separated extensions as shown to the visitor, e.g. ".docx, .doc"
    pub extension: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Route the item links to
    pub target_path: String,
    /// Lowest pricing tier allowed to use this tool
    #[serde(default)]
    pub required_tier: Tier,
}

/// Named, ordered group of catalog items
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolCategory {
    pub title: String,
    pub items: Vec<ToolItem>,
}

/// Footer sitemap group (menu links only)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterGroup {
    pub title: String,
    pub links: Vec<String>,
}

/// Tool shown on the premium showcase page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowcaseTool {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub required_tier: Tier,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowcaseCategory {
    pub title: String,
    pub description: String,
    pub tools: Vec<ShowcaseTool>,
}

impl ToolCategory {
    pub fn new(title: impl Into<String>, items: Vec<ToolItem>) -> Self {
        Self {
            title: title.into(),
            items,
        }
    }
}

impl ToolItem {
    /// Item available on the free tier
    pub fn new(title: &str, extension: &str, target_path: &str) -> Self {
        Self {
            title: title.to_string(),
            extension: extension.to_string(),
            description: None,
            target_path: target_path.to_string(),
            required_tier: Tier::Free,
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }
}
