mod common;

use common::{mixed_catalog, small_catalog, vehicle};
use tour_pricing_engine::models::pax::PaxCount;
use tour_pricing_engine::models::vehicle::VehicleCombination;
use tour_pricing_engine::services::vehicle_combination_service::{
    CombinationRanker, CombinationSearch, SearchBounds,
};

fn search() -> CombinationSearch {
    CombinationSearch::with_bounds(SearchBounds::default())
}

#[test]
fn generated_combinations_always_cover_the_requirement() {
    let catalog = mixed_catalog();
    for required in 1..=20 {
        for combination in search().generate(&catalog, required) {
            assert!(
                combination.total_capacity >= required,
                "combination of {} seats offered for {} pax",
                combination.total_capacity,
                required
            );
        }
    }
}

#[test]
fn worked_example_ten_pax_over_van_and_bus() {
    common::init_logging();
    let combinations = search().generate(&small_catalog(), 10);

    let by_signature = |c: &VehicleCombination| {
        let mut lines: Vec<(String, u32)> = c
            .lines
            .iter()
            .map(|line| (line.vehicle.id.clone(), line.quantity))
            .collect();
        lines.sort();
        lines
    };
    let signatures: Vec<_> = combinations.iter().map(by_signature).collect();

    // 1 bus + 1 van: 12 seats for 140.
    assert!(signatures.contains(&vec![("bus".to_string(), 1), ("van".to_string(), 1)]));
    // 3 vans: 12 seats for 150.
    assert!(signatures.contains(&vec![("van".to_string(), 3)]));

    // Ranking puts the two-vehicle mix ahead of the van triple.
    let ranked = CombinationRanker::rank(combinations);
    assert_eq!(ranked[0].vehicle_count, 2);
    assert_eq!(ranked[0].total_cost, 140.0);
    let van_triple = ranked
        .iter()
        .position(|c| by_signature(c) == vec![("van".to_string(), 3)])
        .unwrap();
    let mix = ranked
        .iter()
        .position(|c| by_signature(c) == vec![("bus".to_string(), 1), ("van".to_string(), 1)])
        .unwrap();
    assert!(mix < van_triple);
}

#[test]
fn derived_fields_agree_with_lines() {
    for combination in search().generate(&mixed_catalog(), 12) {
        let capacity: u32 = combination
            .lines
            .iter()
            .map(|line| line.vehicle.capacity * line.quantity)
            .sum();
        let count: u32 = combination.lines.iter().map(|line| line.quantity).sum();
        assert_eq!(combination.total_capacity, capacity);
        assert_eq!(combination.vehicle_count, count);
    }
}

#[test]
fn ranking_is_idempotent_and_count_ordered() {
    let ranked = CombinationRanker::rank(search().generate(&mixed_catalog(), 9));
    let reranked = CombinationRanker::rank(ranked.clone());

    let order = |cs: &[VehicleCombination]| -> Vec<(u32, String)> {
        cs.iter()
            .map(|c| {
                let mut ids: Vec<String> = c
                    .lines
                    .iter()
                    .map(|l| format!("{}x{}", l.quantity, l.vehicle.id))
                    .collect();
                ids.sort();
                (c.vehicle_count, ids.join("+"))
            })
            .collect()
    };
    assert_eq!(order(&ranked), order(&reranked));

    for pair in ranked.windows(2) {
        assert!(pair[0].vehicle_count <= pair[1].vehicle_count);
    }
}

#[test]
fn infeasible_requirements_yield_empty_not_error() {
    // 3 units x 4 vehicles of the largest type caps out below 60.
    assert!(search().generate(&mixed_catalog(), 60).is_empty());
    assert!(search().generate(&[], 4).is_empty());
}

#[test]
fn suggestions_take_top_three_by_default() {
    let suggestions = search().suggest(&mixed_catalog(), &PaxCount::new(8, 1));
    assert!(suggestions.len() <= 3);
    assert!(!suggestions.is_empty());
    for pair in suggestions.windows(2) {
        assert!(pair[0].vehicle_count <= pair[1].vehicle_count);
    }
}

#[test]
fn custom_bounds_narrow_the_search() {
    let tight = CombinationSearch::with_bounds(SearchBounds {
        max_units_per_type: 1,
        max_total_vehicles: 2,
        max_suggestions: 3,
    });
    for combination in tight.generate(&mixed_catalog(), 10) {
        assert!(combination.vehicle_count <= 2);
        for line in &combination.lines {
            assert_eq!(line.quantity, 1);
        }
    }
}

#[test]
fn range_string_capacities_feed_the_search() {
    let catalog: Vec<_> = vec![
        serde_json::from_str(r#"{"id": "van", "label": "Van", "capacity": "1-6", "unit_price": 70}"#)
            .unwrap(),
        vehicle("car", 3, 35.0),
    ];
    let combinations = search().generate(&catalog, 6);
    assert!(combinations
        .iter()
        .any(|c| c.lines.iter().any(|l| l.vehicle.id == "van" && l.vehicle.capacity == 6)));
}
