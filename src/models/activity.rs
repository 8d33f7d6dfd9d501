use serde::{Deserialize, Serialize};

use crate::models::de;
use crate::models::vehicle::PriceUnit;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct StandardRate {
    #[serde(default)]
    pub label: String,
    #[serde(deserialize_with = "de::lenient_price", default)]
    pub adult_price: Option<f32>,
    #[serde(deserialize_with = "de::lenient_price", default)]
    pub child_price: Option<f32>,
    #[serde(default = "default_true")]
    pub enabled: bool,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct RateOption {
    pub id: String,
    #[serde(default)]
    pub label: String,
    #[serde(deserialize_with = "de::lenient_price", default)]
    pub adult_price: Option<f32>,
    #[serde(deserialize_with = "de::lenient_price", default)]
    pub child_price: Option<f32>,
}

// Bundled rate; resolution applies a fixed-total -> per-person ->
// adult/child precedence over whichever fields are populated.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct PackageOption {
    pub id: String,
    #[serde(default)]
    pub label: String,
    #[serde(deserialize_with = "de::lenient_price", default)]
    pub total_price: Option<f32>,
    #[serde(deserialize_with = "de::lenient_price", default)]
    pub price_per_person: Option<f32>,
    #[serde(deserialize_with = "de::lenient_price", default)]
    pub adult_price: Option<f32>,
    #[serde(deserialize_with = "de::lenient_price", default)]
    pub child_price: Option<f32>,
}

/// Seat-In-Coach rates. When selected they supersede every other tier.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct SicRate {
    #[serde(deserialize_with = "de::lenient_price", default)]
    pub adult: Option<f32>,
    #[serde(deserialize_with = "de::lenient_price", default)]
    pub child: Option<f32>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct TransferOption {
    pub id: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub unit: PriceUnit,
    #[serde(deserialize_with = "de::lenient_price", default)]
    pub unit_price: Option<f32>,
}

/// A sightseeing/activity record as supplied by the data-loading layer.
/// Every rate structure is optional; the engine prices the record no matter
/// how little of it is populated.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Activity {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub standard_rates: Vec<StandardRate>,
    #[serde(deserialize_with = "de::lenient_price", default)]
    pub flat_price: Option<f32>,
    #[serde(default)]
    pub rate_options: Vec<RateOption>,
    #[serde(default)]
    pub package_options: Vec<PackageOption>,
    #[serde(default)]
    pub sic_rate: Option<SicRate>,
    #[serde(default)]
    pub transfer_options: Vec<TransferOption>,
}

fn default_true() -> bool {
    true
}
