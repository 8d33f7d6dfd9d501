//! Vehicle combination search and ranking.
//!
//! Enumerates multi-vehicle combinations that seat a required passenger
//! count, bounded by practical limits so the search stays small over
//! realistic catalogs (an operator books at most a handful of vehicles per
//! group). Ordering is the ranker's job, not the generator's.

use std::cmp::Ordering;

use crate::models::pax::PaxCount;
use crate::models::vehicle::{CombinationLine, VehicleCatalogEntry, VehicleCombination};

const MAX_UNITS_PER_TYPE: u32 = 3;
const MAX_TOTAL_VEHICLES: u32 = 4;
const MAX_SUGGESTIONS: usize = 3;

/// Practical limits on the enumeration.
#[derive(Debug, Clone)]
pub struct SearchBounds {
    pub max_units_per_type: u32,
    pub max_total_vehicles: u32,
    pub max_suggestions: usize,
}

impl Default for SearchBounds {
    fn default() -> Self {
        Self {
            max_units_per_type: MAX_UNITS_PER_TYPE,
            max_total_vehicles: MAX_TOTAL_VEHICLES,
            max_suggestions: MAX_SUGGESTIONS,
        }
    }
}

impl SearchBounds {
    /// Create bounds from environment variables or use defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            max_units_per_type: std::env::var("FLEET_MAX_UNITS_PER_TYPE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_units_per_type),
            max_total_vehicles: std::env::var("FLEET_MAX_TOTAL_VEHICLES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_total_vehicles),
            max_suggestions: std::env::var("FLEET_MAX_SUGGESTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_suggestions),
        }
    }
}

pub struct CombinationSearch {
    bounds: SearchBounds,
}

impl Default for CombinationSearch {
    fn default() -> Self {
        Self::new()
    }
}

impl CombinationSearch {
    pub fn new() -> Self {
        Self {
            bounds: SearchBounds::from_env(),
        }
    }

    pub fn with_bounds(bounds: SearchBounds) -> Self {
        Self { bounds }
    }

    /// Enumerate combinations whose total capacity covers `required_capacity`.
    ///
    /// An empty catalog yields an empty list, as does a required capacity of
    /// zero (nobody to transport). Output order is unspecified; use
    /// `CombinationRanker`.
    pub fn generate(
        &self,
        catalog: &[VehicleCatalogEntry],
        required_capacity: u32,
    ) -> Vec<VehicleCombination> {
        if catalog.is_empty() || required_capacity == 0 {
            return Vec::new();
        }
        let mut types: Vec<&VehicleCatalogEntry> =
            catalog.iter().filter(|v| v.capacity > 0).collect();
        // Largest first; stable sort keeps catalog order between equals.
        types.sort_by(|a, b| b.capacity.cmp(&a.capacity));

        let mut results = Vec::new();
        let mut picked = Vec::new();
        self.search(
            &types,
            0,
            i64::from(required_capacity),
            &mut picked,
            &mut results,
        );
        // Emission implies sufficiency; the filter guards the invariant.
        results.retain(|c| c.total_capacity >= required_capacity);
        log::debug!(
            "Generated {} combinations for capacity {} over {} vehicle types",
            results.len(),
            required_capacity,
            types.len()
        );
        results
    }

    /// Generate, rank, and keep the configured number of suggestions.
    pub fn suggest(&self, catalog: &[VehicleCatalogEntry], pax: &PaxCount) -> Vec<VehicleCombination> {
        CombinationRanker::top(self.generate(catalog, pax.total()), self.bounds.max_suggestions)
    }

    fn search(
        &self,
        types: &[&VehicleCatalogEntry],
        start: usize,
        remaining: i64,
        picked: &mut Vec<CombinationLine>,
        out: &mut Vec<VehicleCombination>,
    ) {
        if remaining <= 0 {
            out.push(VehicleCombination::from_lines(picked.clone()));
            return;
        }
        let used: u32 = picked.iter().map(|line| line.quantity).sum();
        if used >= self.bounds.max_total_vehicles {
            return;
        }
        // Types are consumed left to right: each recursion starts past the
        // current type, so no combination is produced twice.
        for index in start..types.len() {
            let vehicle = types[index];
            let capacity = i64::from(vehicle.capacity);
            let needed = ((remaining + capacity - 1) / capacity) as u32;
            let max_quantity = needed
                .min(self.bounds.max_units_per_type)
                .min(self.bounds.max_total_vehicles - used);
            for quantity in 1..=max_quantity {
                picked.push(CombinationLine {
                    vehicle: vehicle.clone(),
                    quantity,
                });
                self.search(
                    types,
                    index + 1,
                    remaining - capacity * i64::from(quantity),
                    picked,
                    out,
                );
                picked.pop();
            }
        }
    }
}

/// Orders combinations by operator preference: fewest vehicles first, price
/// breaking ties.
pub struct CombinationRanker;

impl CombinationRanker {
    pub fn rank(mut combinations: Vec<VehicleCombination>) -> Vec<VehicleCombination> {
        combinations.sort_by(|a, b| {
            a.vehicle_count.cmp(&b.vehicle_count).then_with(|| {
                a.total_cost
                    .partial_cmp(&b.total_cost)
                    .unwrap_or(Ordering::Equal)
            })
        });
        combinations
    }

    pub fn top(combinations: Vec<VehicleCombination>, n: usize) -> Vec<VehicleCombination> {
        let mut ranked = Self::rank(combinations);
        ranked.truncate(n);
        ranked
    }
}
