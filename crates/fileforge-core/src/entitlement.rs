//! Session Entitlements
//!
//! Resolved once per visit from the visitor's tier. Views ask this object
//! whether a tool is unlocked instead of checking premium flags themselves.

use crate::models::{ShowcaseTool, ToolItem};
use crate::pricing::Tier;

const MB: u64 = 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entitlements {
    tier: Tier,
}

impl Default for Entitlements {
    fn default() -> Self {
        Self::for_tier(Tier::Free)
    }
}

impl Entitlements {
    pub fn for_tier(tier: Tier) -> Self {
        Self { tier }
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }

    pub fn permits(&self, required: Tier) -> bool {
        self.tier >= required
    }

    pub fn can_use_tool(&self, item: &ToolItem) -> bool {
        self.permits(item.required_tier)
    }

    pub fn can_use_showcase(&self, tool: &ShowcaseTool) -> bool {
        self.permits(tool.required_tier)
    }

    /// Largest upload accepted for this tier, in bytes
    pub fn max_upload_bytes(&self) -> u64 {
        match self.tier {
            Tier::Free => 10 * MB,
            Tier::Standard => 50 * MB,
            Tier::PremiumAi => 200 * MB,
        }
    }
}
