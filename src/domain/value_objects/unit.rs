//! Length unit value object
//!
//! Input dimensions arrive in millimeters or feet; everything downstream
//! works in millimeters.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AdvisorError;

/// Millimeters in one foot (exact, international foot)
pub const MM_PER_FOOT: f64 = 304.8;

/// Unit a wardrobe's dimensions are expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    /// Millimeters (internal unit)
    #[default]
    Mm,
    /// Feet
    Ft,
}

impl LengthUnit {
    /// Conversion factor from this unit to millimeters
    pub fn mm_factor(&self) -> f64 {
        match self {
            LengthUnit::Mm => 1.0,
            LengthUnit::Ft => MM_PER_FOOT,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LengthUnit::Mm => "mm",
            LengthUnit::Ft => "ft",
        }
    }
}

/// Convert `value` expressed in `unit` to millimeters.
///
/// `mm` is the identity; no input is rejected.
pub fn to_millimeters(value: f64, unit: LengthUnit) -> f64 {
    match unit {
        LengthUnit::Mm => value,
        LengthUnit::Ft => value * MM_PER_FOOT,
    }
}

impl std::fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LengthUnit {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mm" | "millimeter" | "millimeters" => Ok(LengthUnit::Mm),
            "ft" | "foot" | "feet" => Ok(LengthUnit::Ft),
            _ => Err(AdvisorError::UnknownUnit(s.to_string())),
        }
    }
}
