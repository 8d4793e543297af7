//! Output Rendering
//!
//! Human-readable text for advisor results and the effective standards.

use std::fmt::Write as _;

use crate::domain::policies::IndustryStandards;
use crate::domain::value_objects::{ConfigurationInput, ConfigurationResult, Note, NoteSeverity};

/// Icons for output rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Icons {
    pub ok: &'static str,
    pub error: &'static str,
    pub warning: &'static str,
    pub info: &'static str,
}

impl Icons {
    pub fn unicode() -> Self {
        Self {
            ok: "✓",
            error: "✗",
            warning: "⚠",
            info: "ℹ",
        }
    }

    pub fn ascii() -> Self {
        Self {
            ok: "[OK]",
            error: "[X]",
            warning: "[!]",
            info: "[i]",
        }
    }

    pub fn select(unicode: bool) -> Self {
        if unicode {
            Self::unicode()
        } else {
            Self::ascii()
        }
    }

    fn for_note(&self, note: &Note) -> &'static str {
        match note.severity {
            NoteSeverity::Info => self.info,
            NoteSeverity::Warning => self.warning,
        }
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

/// Render one result as an aligned parts list followed by its notes.
pub fn render_result(
    title: Option<&str>,
    input: &ConfigurationInput,
    result: &ConfigurationResult,
    icons: &Icons,
) -> String {
    let mut out = String::new();

    let heading = format!(
        "{} {} x {} x {} {}",
        input.wardrobe_type, input.width, input.height, input.depth, input.unit
    );
    // warning notes flag the heading
    let icon = if result.has_warnings() {
        icons.warning
    } else {
        icons.ok
    };
    match title {
        Some(title) => {
            let _ = writeln!(out, "{} {} ({})", icon, title, heading);
        }
        None => {
            let _ = writeln!(out, "{} {}", icon, heading);
        }
    }

    let mut rows: Vec<(&str, String)> = vec![
        ("Columns", result.columns.to_string()),
        ("Shutters", result.shutters.to_string()),
        ("Hinges per shutter", result.hinges_per_shutter.to_string()),
    ];
    if input.wardrobe_type.is_hinged() {
        rows.push(("Total hinges", result.total_hinges().to_string()));
    }
    rows.extend([
        (
            "Straightener",
            yes_no(result.straightener_per_shutter).to_string(),
        ),
        ("Rods", result.rods.to_string()),
        ("Shelves", result.shelves.to_string()),
        ("Drawers", result.drawers.to_string()),
        ("Foldable shelf", yes_no(result.foldable_shelf).to_string()),
    ]);
    for (label, value) in rows {
        let _ = writeln!(out, "  {:<20}{}", label, value);
    }

    if !result.notes.is_empty() {
        out.push('\n');
        for note in &result.notes {
            let _ = writeln!(out, "  {} {}", icons.for_note(note), note.message);
        }
    }

    out
}

/// Render a rejected entry.
pub fn render_error(title: &str, message: &str, icons: &Icons) -> String {
    format!("{} {}: {}\n", icons.error, title, message)
}

/// Render the thresholds the advisor is running with.
pub fn render_standards(standards: &IndustryStandards) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Industry standards (mm)");

    let rows: Vec<(&str, String)> = vec![
        ("Module width", standards.module_width_mm.to_string()),
        (
            "Straightener above",
            standards.straightener_height_mm.to_string(),
        ),
        (
            "Sliding 2-shutter max",
            standards.sliding_two_shutter_max_width_mm.to_string(),
        ),
        (
            "Sliding shutter band",
            format!(
                "{}-{}",
                standards.sliding_shutter_min_width_mm, standards.sliding_shutter_max_width_mm
            ),
        ),
        (
            "Min hanging depth",
            standards.min_hanging_depth_mm.to_string(),
        ),
        (
            "Double-hang from",
            standards.double_hang_min_height_mm.to_string(),
        ),
        ("Drawer width", standards.drawer_width_mm.to_string()),
        (
            "Drawers",
            format!("{}-{}", standards.min_drawers, standards.max_drawers),
        ),
        (
            "Shelves (no rods)",
            format!("{} per column", standards.shelves_per_shelved_column),
        ),
        (
            "Shelves (unhung)",
            format!("{} per column", standards.shelves_per_unhung_column),
        ),
        (
            "Rods per column",
            standards.max_rods_per_column.to_string(),
        ),
    ];
    for (label, value) in rows {
        let _ = writeln!(out, "  {:<24}{}", label, value);
    }

    let _ = writeln!(out, "  Hinges per shutter");
    for band in &standards.hinge_bands {
        let _ = writeln!(out, "    up to {:<18}{}", band.max_height_mm, band.hinges);
    }
    let _ = writeln!(out, "    {:<24}{}", "taller", standards.tall_door_hinges);

    out
}
