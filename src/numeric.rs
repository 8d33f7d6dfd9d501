//! Guarded numeric coercion.
//!
//! Inventory records reach the engine from live form state and are routinely
//! incomplete. Every monetary field the services read goes through one of
//! these guards, so the fallback policy is defined in exactly one place.

/// Returns the value when it is a usable price (finite and non-negative),
/// otherwise the supplied fallback.
pub fn safe_price(value: Option<f32>, fallback: f32) -> f32 {
    match value {
        Some(v) if v.is_finite() && v >= 0.0 => v,
        _ => fallback,
    }
}

/// Filters an optional price down to `Some` only when it is usable.
///
/// Used by resolution strategies that must *fall through* on unusable data
/// rather than substitute a fallback.
pub fn usable_price(value: Option<f32>) -> Option<f32> {
    value.filter(|v| v.is_finite() && *v >= 0.0)
}

/// Final-total guard: NaN, infinities and negative totals collapse to zero.
pub fn clamp_non_negative(value: f32) -> f32 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}
