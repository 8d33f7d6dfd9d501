//! Strategic vehicle allocation scenarios.
//!
//! Builds up to four named scenarios over a vehicle catalog so an operator
//! can compare strategies side by side rather than scroll raw combinations.
//! Scenarios that cannot seat the party are dropped, not zero-scored.

use std::cmp::Ordering;

use crate::models::pax::PaxCount;
use crate::models::scenario::{Scenario, ScenarioStrategy};
use crate::models::vehicle::{CombinationLine, VehicleCatalogEntry, VehicleCombination};
use crate::numeric::safe_price;

const BALANCED_MIN_CAPACITY: u32 = 4;
const BALANCED_MAX_CAPACITY: u32 = 8;
const PREMIUM_CATEGORIES: [&str; 2] = ["premium", "luxury"];

pub struct ScenarioPlanner;

impl ScenarioPlanner {
    /// Build the named scenarios for a party over a vehicle catalog.
    ///
    /// Premium is omitted when the catalog has no premium entries; Balanced
    /// degrades to the cost-effective pick when no mid-size vehicle exists.
    /// Every returned scenario seats the whole party.
    pub fn build_scenarios(catalog: &[VehicleCatalogEntry], pax: &PaxCount) -> Vec<Scenario> {
        let total_pax = pax.total();
        if total_pax == 0 {
            return Vec::new();
        }
        let usable: Vec<&VehicleCatalogEntry> =
            catalog.iter().filter(|v| v.capacity > 0).collect();
        if usable.is_empty() {
            return Vec::new();
        }

        let mut scenarios = Vec::new();
        let candidates = [
            (ScenarioStrategy::CostEffective, Self::cost_effective(&usable, total_pax)),
            (ScenarioStrategy::BestUtilization, Self::best_utilization(&usable, total_pax)),
            (ScenarioStrategy::Balanced, Self::balanced(&usable, total_pax)),
            (ScenarioStrategy::Premium, Self::premium(&usable, total_pax)),
        ];
        for (strategy, combination) in candidates {
            if let Some(combination) = combination {
                scenarios.push(Scenario::new(strategy, combination, total_pax));
            }
        }

        scenarios.retain(|s| s.combination.total_capacity >= total_pax);
        log::debug!(
            "Built {} scenarios for {} pax over {} vehicle types",
            scenarios.len(),
            total_pax,
            usable.len()
        );
        scenarios
    }

    /// The scenario callers badge as recommended: highest seat utilization,
    /// earliest strategy winning ties.
    pub fn recommend(scenarios: &[Scenario]) -> Option<&Scenario> {
        let mut best: Option<&Scenario> = None;
        for scenario in scenarios {
            if best.map_or(true, |b| scenario.utilization > b.utilization) {
                best = Some(scenario);
            }
        }
        best
    }

    /// Greedy fill by cost per seat, cheapest seats first.
    fn cost_effective(types: &[&VehicleCatalogEntry], pax: u32) -> Option<VehicleCombination> {
        let mut by_seat_cost = types.to_vec();
        by_seat_cost.sort_by(|a, b| {
            cost_per_seat(a)
                .partial_cmp(&cost_per_seat(b))
                .unwrap_or(Ordering::Equal)
        });

        let mut lines = Vec::new();
        let mut remaining = i64::from(pax);
        for vehicle in by_seat_cost {
            if remaining <= 0 {
                break;
            }
            let capacity = i64::from(vehicle.capacity);
            let quantity = ((remaining + capacity - 1) / capacity) as u32;
            remaining -= capacity * i64::from(quantity);
            lines.push(CombinationLine {
                vehicle: vehicle.clone(),
                quantity,
            });
        }
        if lines.is_empty() {
            return None;
        }
        Some(VehicleCombination::from_lines(lines))
    }

    /// Single vehicle type whose rounded-up quantity wastes the fewest seats.
    fn best_utilization(types: &[&VehicleCatalogEntry], pax: u32) -> Option<VehicleCombination> {
        let mut best: Option<(f32, VehicleCombination)> = None;
        for vehicle in types {
            let combination = Self::fleet_of(vehicle, pax);
            let utilization = pax as f32 / combination.total_capacity as f32;
            if best.as_ref().map_or(true, |(u, _)| utilization > *u) {
                best = Some((utilization, combination));
            }
        }
        best.map(|(_, combination)| combination)
    }

    /// Mid-size vehicles only, best cost per seat; degrades to the
    /// cost-effective pick when the catalog has no mid-size entry.
    fn balanced(types: &[&VehicleCatalogEntry], pax: u32) -> Option<VehicleCombination> {
        let mid_size: Vec<&VehicleCatalogEntry> = types
            .iter()
            .copied()
            .filter(|v| (BALANCED_MIN_CAPACITY..=BALANCED_MAX_CAPACITY).contains(&v.capacity))
            .collect();
        if mid_size.is_empty() {
            return Self::cost_effective(types, pax);
        }
        let mut best: Option<(f32, &VehicleCatalogEntry)> = None;
        for vehicle in mid_size {
            let seat_cost = cost_per_seat(vehicle);
            if best.map_or(true, |(c, _)| seat_cost < c) {
                best = Some((seat_cost, vehicle));
            }
        }
        best.map(|(_, vehicle)| Self::fleet_of(vehicle, pax))
    }

    /// Highest-capacity premium-flagged vehicle, or nothing at all.
    fn premium(types: &[&VehicleCatalogEntry], pax: u32) -> Option<VehicleCombination> {
        let mut best: Option<&VehicleCatalogEntry> = None;
        for vehicle in types.iter().copied().filter(|v| is_premium(v)) {
            if best.map_or(true, |b| vehicle.capacity > b.capacity) {
                best = Some(vehicle);
            }
        }
        best.map(|vehicle| Self::fleet_of(vehicle, pax))
    }

    /// Enough units of one type to seat the party.
    fn fleet_of(vehicle: &VehicleCatalogEntry, pax: u32) -> VehicleCombination {
        let quantity = pax.div_ceil(vehicle.capacity).max(1);
        VehicleCombination::from_lines(vec![CombinationLine {
            vehicle: vehicle.clone(),
            quantity,
        }])
    }
}

fn cost_per_seat(vehicle: &VehicleCatalogEntry) -> f32 {
    safe_price(vehicle.unit_price, 0.0) / vehicle.capacity as f32
}

fn is_premium(vehicle: &VehicleCatalogEntry) -> bool {
    vehicle.category.as_deref().is_some_and(|category| {
        let category = category.to_lowercase();
        PREMIUM_CATEGORIES.iter().any(|flag| category.contains(flag))
    })
}
