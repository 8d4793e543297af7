//! Hanging/Storage Allocator
//!
//! Decides rods, shelves and drawers once the column layout is known.

use tracing::debug;

use super::rounding::{round_half_up, to_count};
use crate::domain::policies::IndustryStandards;
use crate::domain::value_objects::Note;

/// Hanging and storage decisions for one wardrobe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Storage {
    pub rods: u32,
    pub foldable_shelf: bool,
    pub drawers: u32,
    pub shelves: u32,
    pub notes: Vec<Note>,
}

/// Drawers scale with width and stay within the configured clamp.
pub fn drawer_count(width_mm: f64, standards: &IndustryStandards) -> u32 {
    let raw = round_half_up(width_mm / standards.drawer_width_mm);
    // max/min rather than clamp: NaN must land on the floor, not propagate
    to_count(
        raw.max(f64::from(standards.min_drawers))
            .min(f64::from(standards.max_drawers)),
    )
}

/// Derive rods, shelves and drawers from normalized dimensions and the
/// column count chosen by the layout stage.
pub fn derive_storage(
    width_mm: f64,
    depth_mm: f64,
    height_mm: f64,
    columns: u32,
    standards: &IndustryStandards,
) -> Storage {
    let mut notes = Vec::new();
    let mut foldable_shelf = false;

    let rods: u32 = if !standards.can_hang(depth_mm) {
        foldable_shelf = true;
        notes.push(Note::warning(format!(
            "Hangers are not recommended below {:.0} mm depth; a foldable shelf was added instead.",
            standards.min_hanging_depth_mm
        )));
        0
    } else {
        let single_column = columns == 1;
        match (standards.allows_double_hang(height_mm), single_column) {
            // double-hang, plus a long-hang column when there is room
            (true, true) => 2,
            (true, false) => 3,
            (false, true) => 1,
            (false, false) => 2,
        }
    };

    let drawers = drawer_count(width_mm, standards);

    let shelves = if rods == 0 {
        foldable_shelf = true;
        columns.saturating_mul(standards.shelves_per_shelved_column)
    } else {
        let hanging_columns = columns.min(rods.div_ceil(standards.max_rods_per_column.max(1)));
        let unhung_columns = columns.saturating_sub(hanging_columns);
        rods.saturating_add(unhung_columns.saturating_mul(standards.shelves_per_unhung_column))
    };

    debug!(rods, foldable_shelf, drawers, shelves, "derived storage");

    Storage {
        rods,
        foldable_shelf,
        drawers,
        shelves,
        notes,
    }
}
