//! Lenient deserializers for numeric fields arriving from live form state.
//!
//! Inventory records come out of half-filled wizard forms: prices show up as
//! numbers, numeric strings, nulls or junk, and capacities as free-form range
//! strings ("1-10"). Intake coerces instead of erroring so a single bad field
//! never rejects a whole record.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Optional price intake: numbers pass through, numeric strings parse,
/// anything else (including NaN/infinite encodings) becomes `None`.
pub(crate) fn lenient_price<'de, D>(deserializer: D) -> Result<Option<f32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Value> = Option::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_f64().map(|f| f as f32).filter(|f| f.is_finite()),
        Some(Value::String(s)) => s.trim().parse::<f32>().ok().filter(|f| f.is_finite()),
        _ => None,
    })
}

/// Counts intake: floats round up, negatives clamp to zero, junk becomes zero.
pub(crate) fn rounded_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => {
            if let Some(f) = n.as_f64() {
                f.max(0.0).ceil() as u32
            } else if let Some(i) = n.as_u64() {
                i.min(u64::from(u32::MAX)) as u32
            } else {
                0
            }
        }
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map(|f| f.max(0.0).ceil() as u32)
            .unwrap_or(0),
        _ => 0,
    })
}

/// Capacity intake: plain numbers pass through; range strings ("1-10",
/// "4 - 8", "up to 12") resolve to the upper bound; junk becomes zero.
pub(crate) fn capacity_upper_bound<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n.as_f64().map(|f| f.max(0.0).ceil() as u32).unwrap_or(0),
        Value::String(s) => capacity_from_str(&s),
        _ => 0,
    })
}

fn capacity_from_str(s: &str) -> u32 {
    if let Ok(v) = s.trim().parse::<u32>() {
        return v;
    }
    if let Ok(f) = s.trim().parse::<f64>() {
        return f.max(0.0).ceil() as u32;
    }
    // Free-form range string: the upper bound is the largest number mentioned
    let re = regex::Regex::new(r"\d+").unwrap();
    re.find_iter(s)
        .filter_map(|m| m.as_str().parse::<u32>().ok())
        .max()
        .unwrap_or(0)
}
