use serde::{Deserialize, Serialize};

use crate::models::de;
use crate::models::pax::PaxCount;
use crate::numeric::safe_price;

/// Whether a price applies once per vehicle unit or once per passenger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceUnit {
    PerPerson,
    #[default]
    PerVehicle,
}

/// One vehicle type offered by the transport catalog.
///
/// `capacity` may arrive as a plain number or a free-form range string
/// ("1-10"); intake resolves it to the range's upper bound. A zero capacity
/// marks an unusable entry and is skipped by the search.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct VehicleCatalogEntry {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub label: String,
    #[serde(deserialize_with = "de::capacity_upper_bound", default)]
    pub capacity: u32,
    #[serde(deserialize_with = "de::lenient_price", default)]
    pub unit_price: Option<f32>,
    #[serde(default)]
    pub price_unit: PriceUnit,
    #[serde(default)]
    pub category: Option<String>,
}

/// A quantity of one vehicle type within a combination.
#[derive(Debug, Clone, Serialize)]
pub struct CombinationLine {
    pub vehicle: VehicleCatalogEntry,
    pub quantity: u32,
}

/// A multiset of vehicle types whose aggregate seating is evaluated against
/// a passenger count. The derived sums are only ever computed here, so
/// `total_capacity`/`total_cost`/`vehicle_count` always agree with `lines`.
#[derive(Debug, Clone, Serialize)]
pub struct VehicleCombination {
    pub lines: Vec<CombinationLine>,
    pub total_capacity: u32,
    pub total_cost: f32,
    pub vehicle_count: u32,
}

impl VehicleCombination {
    pub fn from_lines(lines: Vec<CombinationLine>) -> Self {
        let total_capacity = lines
            .iter()
            .map(|line| line.vehicle.capacity * line.quantity)
            .sum();
        // Cost is per vehicle unit here; per-person normalization is the
        // display-facing `quoted_total`, never this field.
        let total_cost = lines
            .iter()
            .map(|line| safe_price(line.vehicle.unit_price, 0.0) * line.quantity as f32)
            .sum();
        let vehicle_count = lines.iter().map(|line| line.quantity).sum();
        Self {
            lines,
            total_capacity,
            total_cost,
            vehicle_count,
        }
    }

    /// UI-facing total for a party: per-person entries bill per passenger
    /// carried instead of per unit.
    pub fn quoted_total(&self, pax: &PaxCount) -> f32 {
        self.lines
            .iter()
            .map(|line| {
                let unit_price = safe_price(line.vehicle.unit_price, 0.0);
                match line.vehicle.price_unit {
                    PriceUnit::PerVehicle => unit_price * line.quantity as f32,
                    PriceUnit::PerPerson => unit_price * pax.total() as f32,
                }
            })
            .sum()
    }
}
