use serde::Serialize;

use crate::models::vehicle::VehicleCombination;

/// The named allocation strategies offered for strategic comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScenarioStrategy {
    CostEffective,
    BestUtilization,
    Balanced,
    Premium,
}

impl ScenarioStrategy {
    pub fn label(&self) -> &'static str {
        match self {
            ScenarioStrategy::CostEffective => "Cost-effective",
            ScenarioStrategy::BestUtilization => "Best utilization",
            ScenarioStrategy::Balanced => "Balanced",
            ScenarioStrategy::Premium => "Premium",
        }
    }
}

/// One strategy's vehicle combination plus its comparison metrics.
#[derive(Debug, Clone, Serialize)]
pub struct Scenario {
    pub strategy: ScenarioStrategy,
    pub combination: VehicleCombination,
    /// Seat utilization in percent. Uncapped here so comparisons see the
    /// real ratio; display capping is `display_utilization`.
    pub utilization: f32,
    /// Passengers moved per 1000 currency units.
    pub efficiency: f32,
    /// Proxy score decreasing with fleet size.
    pub environmental_score: f32,
}

impl Scenario {
    pub fn new(strategy: ScenarioStrategy, combination: VehicleCombination, pax: u32) -> Self {
        let utilization = if combination.total_capacity > 0 {
            pax as f32 / combination.total_capacity as f32 * 100.0
        } else {
            0.0
        };
        let efficiency = if combination.total_cost > 0.0 {
            pax as f32 / combination.total_cost * 1000.0
        } else {
            0.0
        };
        let environmental_score = (100.0 - 10.0 * combination.vehicle_count as f32).max(0.0);
        Self {
            strategy,
            combination,
            utilization,
            efficiency,
            environmental_score,
        }
    }

    /// Utilization capped at 100 for rendering.
    pub fn display_utilization(&self) -> f32 {
        self.utilization.min(100.0)
    }
}
