//! Wardrobe type value object - selects which layout rules apply
//!
//! - `Openable`: hinged shutters, one per module
//! - `Sliding`: two or three sliding shutters on a track
//! - `WalkIn`: no shutters at all

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AdvisorError;

/// Kind of wardrobe being configured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum WardrobeType {
    /// Hinged doors
    #[default]
    #[serde(alias = "openable")]
    Openable,
    /// Sliding doors on a track
    #[serde(alias = "sliding")]
    Sliding,
    /// Walk-in, doorless
    #[serde(rename = "WALKIN", alias = "WALK-IN", alias = "walkin", alias = "walk-in")]
    WalkIn,
}

impl WardrobeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WardrobeType::Openable => "OPENABLE",
            WardrobeType::Sliding => "SLIDING",
            WardrobeType::WalkIn => "WALKIN",
        }
    }

    /// Returns true if shutters on this type hang on hinges
    pub fn is_hinged(&self) -> bool {
        matches!(self, WardrobeType::Openable)
    }
}

/// Map a free-text label (as typed on a quote line) to a wardrobe type.
///
/// Never fails: anything that is not recognizably sliding or walk-in is
/// treated as openable.
pub fn map_to_smart_default_type(label: &str) -> WardrobeType {
    match label.trim().to_ascii_lowercase().as_str() {
        "sliding" => WardrobeType::Sliding,
        "walkin" | "walk-in" => WardrobeType::WalkIn,
        _ => WardrobeType::Openable,
    }
}

impl std::fmt::Display for WardrobeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strict parse for validated boundaries (CLI flags, config files).
impl FromStr for WardrobeType {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "openable" => Ok(WardrobeType::Openable),
            "sliding" => Ok(WardrobeType::Sliding),
            "walkin" | "walk-in" => Ok(WardrobeType::WalkIn),
            _ => Err(AdvisorError::UnknownWardrobeType(s.to_string())),
        }
    }
}
