#![allow(dead_code)]

use tour_pricing_engine::models::activity::{
    Activity, PackageOption, RateOption, SicRate, StandardRate, TransferOption,
};
use tour_pricing_engine::models::vehicle::{PriceUnit, VehicleCatalogEntry};

/// Opt into engine log output for a test run (`RUST_LOG=debug cargo test`).
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn bare_activity() -> Activity {
    Activity {
        id: "act-empty".to_string(),
        title: "Unpriced excursion".to_string(),
        ..Default::default()
    }
}

pub fn standard_rate_activity(adult: f32, child: Option<f32>) -> Activity {
    Activity {
        id: "act-standard".to_string(),
        title: "City walking tour".to_string(),
        standard_rates: vec![StandardRate {
            label: "High season".to_string(),
            adult_price: Some(adult),
            child_price: child,
            enabled: true,
        }],
        ..Default::default()
    }
}

pub fn full_activity() -> Activity {
    Activity {
        id: "act-full".to_string(),
        title: "Island day trip".to_string(),
        standard_rates: vec![StandardRate {
            label: "Standard".to_string(),
            adult_price: Some(40.0),
            child_price: None,
            enabled: true,
        }],
        rate_options: vec![RateOption {
            id: "opt-private".to_string(),
            label: "Private guide".to_string(),
            adult_price: Some(75.0),
            child_price: Some(40.0),
        }],
        package_options: vec![PackageOption {
            id: "pkg-family".to_string(),
            label: "Family bundle".to_string(),
            total_price: Some(220.0),
            price_per_person: None,
            adult_price: None,
            child_price: None,
        }],
        sic_rate: Some(SicRate {
            adult: Some(30.0),
            child: Some(18.0),
        }),
        transfer_options: vec![TransferOption {
            id: "tr-hotel".to_string(),
            label: "Hotel pickup".to_string(),
            unit: PriceUnit::PerVehicle,
            unit_price: Some(30.0),
        }],
        ..Default::default()
    }
}

pub fn vehicle(id: &str, capacity: u32, price: f32) -> VehicleCatalogEntry {
    VehicleCatalogEntry {
        id: id.to_string(),
        label: id.to_string(),
        capacity,
        unit_price: Some(price),
        price_unit: PriceUnit::PerVehicle,
        category: None,
    }
}

pub fn premium_vehicle(id: &str, capacity: u32, price: f32) -> VehicleCatalogEntry {
    VehicleCatalogEntry {
        category: Some("luxury".to_string()),
        ..vehicle(id, capacity, price)
    }
}

/// The worked-example catalog: a 4-seat van and an 8-seat minibus.
pub fn small_catalog() -> Vec<VehicleCatalogEntry> {
    vec![vehicle("van", 4, 50.0), vehicle("bus", 8, 90.0)]
}

pub fn mixed_catalog() -> Vec<VehicleCatalogEntry> {
    vec![
        vehicle("car", 3, 35.0),
        vehicle("van", 6, 70.0),
        vehicle("minibus", 8, 95.0),
        premium_vehicle("sprinter", 10, 180.0),
    ]
}
