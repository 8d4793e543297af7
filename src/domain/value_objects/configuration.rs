//! Configuration input and result value objects
//!
//! `ConfigurationInput` is what a caller asks about; `ConfigurationResult` is
//! the recommended parts/hardware bill. Both are built fresh per call and
//! never mutated afterwards.

use serde::{Deserialize, Serialize};

use super::note::Note;
use super::unit::{to_millimeters, LengthUnit};
use super::wardrobe_type::WardrobeType;
use crate::error::{AdvisorError, AdvisorResult};

/// Physical description of a wardrobe, in `unit`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfigurationInput {
    pub unit: LengthUnit,
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    #[serde(rename = "type")]
    pub wardrobe_type: WardrobeType,
}

/// Width, height and depth after normalization to millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Millimeters {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

impl ConfigurationInput {
    pub fn new(
        unit: LengthUnit,
        width: f64,
        height: f64,
        depth: f64,
        wardrobe_type: WardrobeType,
    ) -> Self {
        Self {
            unit,
            width,
            height,
            depth,
            wardrobe_type,
        }
    }

    /// Shorthand for an input already in millimeters
    pub fn mm(width: f64, height: f64, depth: f64, wardrobe_type: WardrobeType) -> Self {
        Self::new(LengthUnit::Mm, width, height, depth, wardrobe_type)
    }

    /// Reject dimensions that are zero, negative, NaN or infinite.
    ///
    /// The advisor itself is total over `f64`; this is the check callers run
    /// before trusting its output.
    pub fn validate(&self) -> AdvisorResult<()> {
        for (dimension, value) in [
            ("width", self.width),
            ("height", self.height),
            ("depth", self.depth),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(AdvisorError::InvalidDimension { dimension, value });
            }
        }
        Ok(())
    }

    pub fn to_millimeters(&self) -> Millimeters {
        Millimeters {
            width: to_millimeters(self.width, self.unit),
            height: to_millimeters(self.height, self.unit),
            depth: to_millimeters(self.depth, self.unit),
        }
    }
}

/// Recommended internal layout for one wardrobe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationResult {
    pub columns: u32,
    pub shutters: u32,
    pub hinges_per_shutter: u32,
    pub straightener_per_shutter: bool,
    pub drawers: u32,
    pub shelves: u32,
    pub rods: u32,
    pub foldable_shelf: bool,
    pub notes: Vec<Note>,
}

impl ConfigurationResult {
    /// Note texts in the order they were produced
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.notes.iter().map(|n| n.message.as_str())
    }

    pub fn has_warnings(&self) -> bool {
        self.notes.iter().any(Note::is_warning)
    }

    /// Total hinges across all shutters
    pub fn total_hinges(&self) -> u32 {
        self.shutters.saturating_mul(self.hinges_per_shutter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_accepts_positive_dimensions() {
        let input = ConfigurationInput::mm(1200.0, 2400.0, 600.0, WardrobeType::Openable);
        assert!(input.validate().is_ok());
    }

    #[test]
    fn validate_names_the_offending_dimension() {
        let input = ConfigurationInput::mm(1200.0, 0.0, 600.0, WardrobeType::Openable);
        match input.validate() {
            Err(AdvisorError::InvalidDimension { dimension, .. }) => {
                assert_eq!(dimension, "height")
            }
            other => panic!("expected InvalidDimension, got {other:?}"),
        }
    }

    #[test]
    fn validate_rejects_nan_and_infinity() {
        let nan = ConfigurationInput::mm(f64::NAN, 1.0, 1.0, WardrobeType::Sliding);
        assert!(nan.validate().is_err());
        let inf = ConfigurationInput::mm(1.0, 1.0, f64::INFINITY, WardrobeType::Sliding);
        assert!(inf.validate().is_err());
    }

    #[test]
    fn normalizes_every_dimension() {
        let input = ConfigurationInput::new(LengthUnit::Ft, 1.0, 2.0, 0.5, WardrobeType::WalkIn);
        let mm = input.to_millimeters();
        assert_eq!(mm.width, 304.8);
        assert_eq!(mm.height, 609.6);
        assert_eq!(mm.depth, 152.4);
    }

    #[test]
    fn input_deserializes_from_wire_shape() {
        let json = r#"{"unit":"ft","width":3,"height":7,"depth":1.5,"type":"SLIDING"}"#;
        let input: ConfigurationInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.unit, LengthUnit::Ft);
        assert_eq!(input.wardrobe_type, WardrobeType::Sliding);
        assert_eq!(input.depth, 1.5);
    }

    #[test]
    fn result_serializes_camel_case() {
        let result = ConfigurationResult {
            columns: 2,
            shutters: 2,
            hinges_per_shutter: 4,
            straightener_per_shutter: true,
            drawers: 4,
            shelves: 3,
            rods: 3,
            foldable_shelf: false,
            notes: vec![Note::warning("tall")],
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["hingesPerShutter"], 4);
        assert_eq!(json["straightenerPerShutter"], true);
        assert_eq!(json["foldableShelf"], false);
        assert_eq!(result.total_hinges(), 8);
        assert!(result.has_warnings());
        assert_eq!(result.messages().collect::<Vec<_>>(), vec!["tall"]);
    }
}
