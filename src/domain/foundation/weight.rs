//! Weight value object for entries (1 to 10 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Importance of a single pro or con, always within `[1, 10]`.
///
/// Deserializing goes through [`Weight::clamped`], so serialized input
/// cannot smuggle in an out-of-range value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "u8")]
pub struct Weight(u8);

impl Weight {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    /// Weight used when the caller gives none or something unparseable.
    pub const DEFAULT: Weight = Weight(3);

    /// Creates a Weight, returning error if out of range.
    pub fn try_new(value: i64) -> Result<Self, ValidationError> {
        if (Self::MIN as i64..=Self::MAX as i64).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(ValidationError::out_of_range(
                "weight",
                Self::MIN as i64,
                Self::MAX as i64,
                value,
            ))
        }
    }

    /// Creates a Weight, clamping any integer into range.
    pub fn clamped(value: i64) -> Self {
        Self(value.clamp(Self::MIN as i64, Self::MAX as i64) as u8)
    }

    /// Parses free-form user input.
    ///
    /// Absent or unparseable input yields [`Weight::DEFAULT`]. Fractional
    /// numbers are truncated toward zero before clamping.
    pub fn parse_or_default(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
            return Self::DEFAULT;
        };
        if let Ok(n) = raw.parse::<i64>() {
            return Self::clamped(n);
        }
        match raw.parse::<f64>() {
            Ok(f) if f.is_finite() => Self::clamped(f.trunc() as i64),
            _ => Self::DEFAULT,
        }
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Default for Weight {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<i64> for Weight {
    fn from(value: i64) -> Self {
        Self::clamped(value)
    }
}

impl From<Weight> for u8 {
    fn from(weight: Weight) -> Self {
        weight.0
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
