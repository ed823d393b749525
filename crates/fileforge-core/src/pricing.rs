//! Pricing Tiers
//!
//! Plans, billing cycles and the shared feature matrix shown on the pricing
//! section.

use serde::{Deserialize, Serialize};

/// Subscription tier, ordered from least to most capable
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    #[default]
    Free,
    Standard,
    PremiumAi,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Free, Tier::Standard, Tier::PremiumAi];

    pub fn label(self) -> &'static str {
        match self {
            Tier::Free => "Free",
            Tier::Standard => "Standard",
            Tier::PremiumAi => "Premium AI",
        }
    }

    fn index(self) -> usize {
        match self {
            Tier::Free => 0,
            Tier::Standard => 1,
            Tier::PremiumAi => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BillingCycle {
    #[default]
    Monthly,
    Yearly,
}

impl BillingCycle {
    pub fn period(self) -> &'static str {
        match self {
            BillingCycle::Monthly => "month",
            BillingCycle::Yearly => "year",
        }
    }
}

/// One row of the feature matrix
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingFeature {
    pub id: String,
    pub text: String,
    /// Per-tier value text (Free, Standard, Premium AI)
    #[serde(default)]
    pub values: Option<[String; 3]>,
    #[serde(default)]
    pub highlight: bool,
    /// Lowest tier that includes the feature
    pub included_from: Tier,
}

impl PricingFeature {
    pub fn is_included(&self, tier: Tier) -> bool {
        tier >= self.included_from
    }

    /// Row text for a tier, e.g. "Max file size: 50MB"
    pub fn text_for(&self, tier: Tier) -> String {
        match &self.values {
            Some(values) => format!("{}: {}", self.text, values[tier.index()]),
            None => self.text.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingPlan {
    pub tier: Tier,
    pub description: String,
    pub monthly_price: f64,
    pub yearly_price: f64,
    pub cta_text: String,
    pub cta_link: String,
    #[serde(default)]
    pub popular: bool,
}

impl PricingPlan {
    pub fn price(&self, cycle: BillingCycle) -> f64 {
        match cycle {
            BillingCycle::Monthly => self.monthly_price,
            BillingCycle::Yearly => self.yearly_price,
        }
    }

    /// "$9.99 / month", or "$0" for free plans
    pub fn price_label(&self, cycle: BillingCycle) -> String {
        let price = self.price(cycle);
        if self.monthly_price > 0.0 {
            format!("${:.2} / {}", price, cycle.period())
        } else {
            format!("${}", price)
        }
    }

    /// Whole-percent saving of yearly billing over twelve monthly payments
    pub fn yearly_savings_percent(&self) -> u32 {
        if self.monthly_price <= 0.0 {
            return 0;
        }
        let full_year = self.monthly_price * 12.0;
        (((full_year - self.yearly_price) / full_year) * 100.0).floor() as u32
    }
}
