//! Layout Rule Engine
//!
//! Splits a wardrobe into vertical modules and picks shutters and hinge
//! hardware according to its type.

use tracing::debug;

use super::rounding::{round_half_up, to_count};
use crate::domain::policies::IndustryStandards;
use crate::domain::value_objects::{Note, WardrobeType, MM_PER_FOOT};

/// Column, shutter and hinge decisions for one wardrobe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub columns: u32,
    pub shutters: u32,
    pub hinges_per_shutter: u32,
    pub straightener_per_shutter: bool,
    pub notes: Vec<Note>,
}

/// Number of modules across `width_mm`; never less than one.
pub fn column_count(width_mm: f64, standards: &IndustryStandards) -> u32 {
    to_count(round_half_up(width_mm / standards.module_width_mm).max(1.0))
}

/// Derive columns, shutters and hinge hardware from normalized width/height.
pub fn derive_layout(
    width_mm: f64,
    height_mm: f64,
    wardrobe_type: WardrobeType,
    standards: &IndustryStandards,
) -> Layout {
    let columns = column_count(width_mm, standards);
    let mut notes = Vec::new();

    let layout = match wardrobe_type {
        WardrobeType::Openable => {
            let straightener = standards.needs_straightener(height_mm);
            if straightener {
                notes.push(Note::warning(format!(
                    "Door height exceeds {:.0} mm ({:.0} ft); add a straightener on each shutter to prevent warping.",
                    standards.straightener_height_mm,
                    standards.straightener_height_mm / MM_PER_FOOT
                )));
            }
            Layout {
                columns,
                shutters: columns,
                hinges_per_shutter: standards.hinges_for_height(height_mm),
                straightener_per_shutter: straightener,
                notes,
            }
        }
        WardrobeType::Sliding => {
            let shutters = if width_mm <= standards.sliding_two_shutter_max_width_mm {
                2
            } else {
                3
            };
            let approx_width = width_mm / f64::from(shutters);
            if !standards.sliding_width_in_band(approx_width) {
                notes.push(Note::info(format!(
                    "Each sliding shutter is about {:.0} mm wide; aim for {:.0}-{:.0} mm per shutter.",
                    approx_width,
                    standards.sliding_shutter_min_width_mm,
                    standards.sliding_shutter_max_width_mm
                )));
            }
            Layout {
                columns,
                shutters,
                hinges_per_shutter: 0,
                straightener_per_shutter: false,
                notes,
            }
        }
        WardrobeType::WalkIn => Layout {
            columns,
            shutters: 0,
            hinges_per_shutter: 0,
            straightener_per_shutter: false,
            notes,
        },
    };

    debug!(
        %wardrobe_type,
        columns = layout.columns,
        shutters = layout.shutters,
        hinges = layout.hinges_per_shutter,
        straightener = layout.straightener_per_shutter,
        "derived layout"
    );

    layout
}
