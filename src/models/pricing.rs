use serde::{Deserialize, Serialize};

use crate::models::de;
use crate::models::vehicle::PriceUnit;

/// The mutually exclusive rate structures an activity can be priced under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TierKind {
    Standard,
    Option,
    Package,
}

/// The caller's pricing choice for one activity: which tier, which named
/// rate within it, and whether the Seat-In-Coach override applies.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PricingSelection {
    pub kind: TierKind,
    #[serde(default)]
    pub selected_option_id: Option<String>,
    #[serde(default)]
    pub selected_package_id: Option<String>,
    #[serde(default)]
    pub sic_selected: bool,
}

impl PricingSelection {
    pub fn standard() -> Self {
        Self {
            kind: TierKind::Standard,
            selected_option_id: None,
            selected_package_id: None,
            sic_selected: false,
        }
    }

    pub fn option(id: &str) -> Self {
        Self {
            kind: TierKind::Option,
            selected_option_id: Some(id.to_string()),
            selected_package_id: None,
            sic_selected: false,
        }
    }

    pub fn package(id: &str) -> Self {
        Self {
            kind: TierKind::Package,
            selected_option_id: None,
            selected_package_id: Some(id.to_string()),
            sic_selected: false,
        }
    }

    pub fn with_sic(mut self) -> Self {
        self.sic_selected = true;
        self
    }
}

/// An optional transfer surcharge layered onto an activity's base price.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TransferAddOn {
    pub included: bool,
    #[serde(default)]
    pub unit: PriceUnit,
    #[serde(deserialize_with = "de::lenient_price", default)]
    pub unit_price: Option<f32>,
}

impl TransferAddOn {
    pub fn not_included() -> Self {
        Self {
            included: false,
            unit: PriceUnit::default(),
            unit_price: None,
        }
    }
}

/// Injected display currency. The engine's arithmetic never reads it; it
/// exists so callers can format the numbers the engine returns.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Currency {
    pub code: String,
    pub symbol: String,
}

impl Currency {
    pub fn format_amount(&self, amount: f32) -> String {
        format!("{}{:.2}", self.symbol, amount)
    }
}
