use serde::{Deserialize, Serialize};

use crate::models::de;

/// Passenger split for a booking. Totals of zero are a legal degenerate
/// input everywhere in the engine, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct PaxCount {
    #[serde(deserialize_with = "de::rounded_u32", default)]
    pub adults: u32,
    #[serde(deserialize_with = "de::rounded_u32", default)]
    pub children: u32,
}

impl PaxCount {
    pub fn new(adults: u32, children: u32) -> Self {
        Self { adults, children }
    }

    pub fn adults_only(adults: u32) -> Self {
        Self {
            adults,
            children: 0,
        }
    }

    /// Boundary constructor for raw caller input: negative counts clamp to
    /// zero instead of being rejected.
    pub fn clamped(adults: i64, children: i64) -> Self {
        Self {
            adults: adults.max(0).min(i64::from(u32::MAX)) as u32,
            children: children.max(0).min(i64::from(u32::MAX)) as u32,
        }
    }

    pub fn total(&self) -> u32 {
        self.adults + self.children
    }
}
