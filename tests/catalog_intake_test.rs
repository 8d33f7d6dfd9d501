//! Intake tests: inventory records arrive from live form state and must
//! coerce rather than fail.

use tour_pricing_engine::models::activity::Activity;
use tour_pricing_engine::models::pax::PaxCount;
use tour_pricing_engine::models::vehicle::{PriceUnit, VehicleCatalogEntry};

#[test]
fn capacity_accepts_numbers_and_range_strings() {
    let cases = [
        (r#"{"id": "a", "capacity": 7}"#, 7),
        (r#"{"id": "b", "capacity": 7.5}"#, 8),
        (r#"{"id": "c", "capacity": "1-10"}"#, 10),
        (r#"{"id": "d", "capacity": "4 - 8"}"#, 8),
        (r#"{"id": "e", "capacity": "12"}"#, 12),
        (r#"{"id": "f", "capacity": "seats unknown"}"#, 0),
        (r#"{"id": "g"}"#, 0),
    ];
    for (json, expected) in cases {
        let entry: VehicleCatalogEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.capacity, expected, "for {json}");
    }
}

#[test]
fn prices_accept_numbers_strings_and_junk() {
    let entry: VehicleCatalogEntry =
        serde_json::from_str(r#"{"id": "a", "capacity": 4, "unit_price": "85.5"}"#).unwrap();
    assert_eq!(entry.unit_price, Some(85.5));

    let entry: VehicleCatalogEntry =
        serde_json::from_str(r#"{"id": "a", "capacity": 4, "unit_price": "n/a"}"#).unwrap();
    assert_eq!(entry.unit_price, None);

    let entry: VehicleCatalogEntry =
        serde_json::from_str(r#"{"id": "a", "capacity": 4, "unit_price": null}"#).unwrap();
    assert_eq!(entry.unit_price, None);
}

#[test]
fn price_unit_defaults_to_per_vehicle() {
    let entry: VehicleCatalogEntry =
        serde_json::from_str(r#"{"id": "a", "capacity": 4}"#).unwrap();
    assert_eq!(entry.price_unit, PriceUnit::PerVehicle);

    let entry: VehicleCatalogEntry =
        serde_json::from_str(r#"{"id": "a", "capacity": 4, "price_unit": "per_person"}"#).unwrap();
    assert_eq!(entry.price_unit, PriceUnit::PerPerson);
}

#[test]
fn pax_counts_coerce_floats_and_negatives() {
    let pax: PaxCount = serde_json::from_str(r#"{"adults": 2.2, "children": -1}"#).unwrap();
    assert_eq!(pax.adults, 3);
    assert_eq!(pax.children, 0);
}

#[test]
fn partially_populated_activity_parses() {
    let activity: Activity = serde_json::from_str(
        r#"{
            "id": "act-1",
            "title": "Harbour cruise",
            "standard_rates": [
                {"adult_price": 55, "child_price": "38.5"},
                {"label": "winter", "adult_price": null, "enabled": false}
            ],
            "sic_rate": {"adult": "29", "child": null}
        }"#,
    )
    .unwrap();

    assert_eq!(activity.standard_rates.len(), 2);
    assert_eq!(activity.standard_rates[0].adult_price, Some(55.0));
    assert_eq!(activity.standard_rates[0].child_price, Some(38.5));
    assert!(activity.standard_rates[0].enabled);
    assert!(!activity.standard_rates[1].enabled);
    assert_eq!(activity.sic_rate.as_ref().unwrap().adult, Some(29.0));
    assert_eq!(activity.sic_rate.as_ref().unwrap().child, None);
    assert!(activity.rate_options.is_empty());
    assert!(activity.package_options.is_empty());
}
