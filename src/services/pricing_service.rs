//! Activity price resolution.
//!
//! Resolves one monetary amount for an activity given a pricing selection and
//! passenger split. The precedence rules (SIC > package > option > standard >
//! default) are a first-class ordered chain of strategies rather than nested
//! branching; the terminal strategy always yields, so resolution is a total
//! function even over an activity with no rate data at all.

use crate::models::activity::{Activity, PackageOption};
use crate::models::pax::PaxCount;
use crate::models::pricing::{PricingSelection, TierKind, TransferAddOn};
use crate::numeric::{clamp_non_negative, safe_price, usable_price};
use crate::services::transfer_service::TransferService;

const DEFAULT_FLAT_RATE: f32 = 50.0; // per person, when no rate data exists at all
const CHILD_RATE_FACTOR: f32 = 0.7; // child rate when no explicit child price is set
const PACKAGE_FALLBACK_PRICE: f32 = 100.0;
const TRANSFER_FALLBACK_UNIT_PRICE: f32 = 25.0;

/// Fallback constants for the resolution chain.
#[derive(Debug, Clone)]
pub struct PricingConfig {
    pub default_flat_rate: f32,
    pub child_rate_factor: f32,
    pub package_fallback_price: f32,
    pub transfer_fallback_unit_price: f32,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            default_flat_rate: DEFAULT_FLAT_RATE,
            child_rate_factor: CHILD_RATE_FACTOR,
            package_fallback_price: PACKAGE_FALLBACK_PRICE,
            transfer_fallback_unit_price: TRANSFER_FALLBACK_UNIT_PRICE,
        }
    }
}

impl PricingConfig {
    /// Create config from environment variables or use defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            default_flat_rate: std::env::var("PRICING_DEFAULT_FLAT_RATE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.default_flat_rate),
            child_rate_factor: std::env::var("PRICING_CHILD_RATE_FACTOR")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.child_rate_factor),
            package_fallback_price: std::env::var("PRICING_PACKAGE_FALLBACK")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.package_fallback_price),
            transfer_fallback_unit_price: std::env::var("PRICING_TRANSFER_FALLBACK")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.transfer_fallback_unit_price),
        }
    }
}

type RateStrategy = fn(&Activity, &PricingSelection, &PaxCount, &PricingConfig) -> Option<f32>;

/// Resolution strategies in priority order. Each self-selects and returns
/// `None` when it does not apply; the last entry always yields.
const RESOLUTION_CHAIN: [(&str, RateStrategy); 5] = [
    ("sic", sic_override),
    ("package", package_rate),
    ("option", option_rate),
    ("standard", standard_rate),
    ("default", default_flat_rate),
];

pub struct PricingService;

impl PricingService {
    /// Resolve the price of an activity for the given selection and party.
    ///
    /// Total over all inputs: a missing selected id, a disabled rate card or
    /// malformed numbers fall through the chain until a strategy yields, and
    /// the result is always finite and non-negative.
    pub fn resolve(
        activity: &Activity,
        selection: &PricingSelection,
        pax: &PaxCount,
        config: &PricingConfig,
    ) -> f32 {
        for (name, strategy) in &RESOLUTION_CHAIN {
            if let Some(price) = strategy(activity, selection, pax, config) {
                log::debug!(
                    "Resolved activity '{}' at {:.2} via {} rates",
                    activity.id,
                    price,
                    name
                );
                return clamp_non_negative(price);
            }
        }
        // The chain ends in a strategy that always yields.
        clamp_non_negative(config.default_flat_rate * pax.total() as f32)
    }

    /// Base price plus transfer add-on, guarded once more on the way out.
    pub fn total_price(
        activity: &Activity,
        selection: &PricingSelection,
        transfer: Option<&TransferAddOn>,
        pax: &PaxCount,
        config: &PricingConfig,
    ) -> f32 {
        let base = Self::resolve(activity, selection, pax, config);
        let transfer_cost = transfer
            .map(|addon| TransferService::cost(addon, pax, config))
            .unwrap_or(0.0);
        clamp_non_negative(base + transfer_cost)
    }
}

/// Adult/child split with the default child discount when no explicit child
/// rate exists.
fn split_price(adult: f32, child: Option<f32>, pax: &PaxCount, config: &PricingConfig) -> f32 {
    let child_rate = safe_price(child, adult * config.child_rate_factor);
    adult * pax.adults as f32 + child_rate * pax.children as f32
}

fn sic_override(
    activity: &Activity,
    selection: &PricingSelection,
    pax: &PaxCount,
    config: &PricingConfig,
) -> Option<f32> {
    if !selection.sic_selected {
        return None;
    }
    let sic = activity.sic_rate.as_ref()?;
    // A SIC rate without a usable adult price cannot win the precedence.
    let adult = usable_price(sic.adult)?;
    Some(split_price(adult, sic.child, pax, config))
}

fn package_rate(
    activity: &Activity,
    selection: &PricingSelection,
    pax: &PaxCount,
    config: &PricingConfig,
) -> Option<f32> {
    if selection.kind != TierKind::Package {
        return None;
    }
    let id = selection.selected_package_id.as_deref()?;
    let package = activity.package_options.iter().find(|p| p.id == id)?;
    Some(resolve_package(package, pax, config))
}

/// First-match precedence inside a package: fixed total, per-person rate,
/// adult/child split, then the fixed package fallback.
fn resolve_package(package: &PackageOption, pax: &PaxCount, config: &PricingConfig) -> f32 {
    if let Some(total) = usable_price(package.total_price) {
        return total;
    }
    if let Some(per_person) = usable_price(package.price_per_person) {
        return per_person * pax.total() as f32;
    }
    if let Some(adult) = usable_price(package.adult_price) {
        return split_price(adult, package.child_price, pax, config);
    }
    config.package_fallback_price
}

fn option_rate(
    activity: &Activity,
    selection: &PricingSelection,
    pax: &PaxCount,
    config: &PricingConfig,
) -> Option<f32> {
    if selection.kind != TierKind::Option {
        return None;
    }
    let id = selection.selected_option_id.as_deref()?;
    let option = activity.rate_options.iter().find(|o| o.id == id)?;
    let adult = safe_price(option.adult_price, config.default_flat_rate);
    Some(split_price(adult, option.child_price, pax, config))
}

fn standard_rate(
    activity: &Activity,
    selection: &PricingSelection,
    pax: &PaxCount,
    config: &PricingConfig,
) -> Option<f32> {
    if selection.kind != TierKind::Standard {
        return None;
    }
    let enabled_rate = activity
        .standard_rates
        .iter()
        .filter(|rate| rate.enabled)
        .find_map(|rate| usable_price(rate.adult_price).map(|adult| (rate, adult)));
    if let Some((rate, adult)) = enabled_rate {
        return Some(split_price(adult, rate.child_price, pax, config));
    }
    usable_price(activity.flat_price).map(|flat| flat * pax.total() as f32)
}

fn default_flat_rate(
    _activity: &Activity,
    _selection: &PricingSelection,
    pax: &PaxCount,
    config: &PricingConfig,
) -> Option<f32> {
    Some(config.default_flat_rate * pax.total() as f32)
}
