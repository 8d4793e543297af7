//! Industry Standards Policy
//!
//! Every threshold the layout and storage rules depend on, in millimeters.
//! Defaults follow common carcass-joinery practice; a shop can override any
//! of them from `[standards]` in its config file.

use serde::{Deserialize, Serialize};

use crate::error::{AdvisorError, AdvisorResult};

/// Hinge count for shutters up to `max_height_mm` tall
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HingeBand {
    pub max_height_mm: f64,
    pub hinges: u32,
}

/// Named thresholds used by the rule engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndustryStandards {
    /// Width of one vertical module
    pub module_width_mm: f64,
    /// Height bands for hinges, ascending by `max_height_mm`
    pub hinge_bands: Vec<HingeBand>,
    /// Hinges for shutters taller than the last band
    pub tall_door_hinges: u32,
    /// Shutters strictly taller than this need a straightener
    pub straightener_height_mm: f64,
    /// Sliding wardrobes up to this width get two shutters, wider get three
    pub sliding_two_shutter_max_width_mm: f64,
    pub sliding_shutter_min_width_mm: f64,
    pub sliding_shutter_max_width_mm: f64,
    /// Below this depth garments cannot hang
    pub min_hanging_depth_mm: f64,
    /// At or above this height a column can take two stacked rods
    pub double_hang_min_height_mm: f64,
    /// One drawer per this much wardrobe width
    pub drawer_width_mm: f64,
    pub min_drawers: u32,
    pub max_drawers: u32,
    /// Shelves per column when the unit has no rods at all
    pub shelves_per_shelved_column: u32,
    /// Extra shelves in a column that hosts no rod
    pub shelves_per_unhung_column: u32,
    /// Rods one column can host (double-hang)
    pub max_rods_per_column: u32,
}

impl Default for IndustryStandards {
    fn default() -> Self {
        Self {
            module_width_mm: 600.0,
            hinge_bands: vec![
                HingeBand {
                    max_height_mm: 900.0,
                    hinges: 2,
                },
                HingeBand {
                    max_height_mm: 1500.0,
                    hinges: 3,
                },
                HingeBand {
                    max_height_mm: 2100.0,
                    hinges: 4,
                },
            ],
            tall_door_hinges: 4,
            straightener_height_mm: 2100.0,
            sliding_two_shutter_max_width_mm: 1800.0,
            sliding_shutter_min_width_mm: 750.0,
            sliding_shutter_max_width_mm: 950.0,
            min_hanging_depth_mm: 550.0,
            double_hang_min_height_mm: 2100.0,
            drawer_width_mm: 300.0,
            min_drawers: 2,
            max_drawers: 6,
            shelves_per_shelved_column: 4,
            shelves_per_unhung_column: 2,
            max_rods_per_column: 2,
        }
    }
}

impl IndustryStandards {
    /// Hinges for one openable shutter of the given height
    pub fn hinges_for_height(&self, height_mm: f64) -> u32 {
        self.hinge_bands
            .iter()
            .find(|band| height_mm <= band.max_height_mm)
            .map(|band| band.hinges)
            .unwrap_or(self.tall_door_hinges)
    }

    pub fn needs_straightener(&self, height_mm: f64) -> bool {
        height_mm > self.straightener_height_mm
    }

    pub fn can_hang(&self, depth_mm: f64) -> bool {
        depth_mm >= self.min_hanging_depth_mm
    }

    pub fn allows_double_hang(&self, height_mm: f64) -> bool {
        height_mm >= self.double_hang_min_height_mm
    }

    pub fn sliding_width_in_band(&self, shutter_width_mm: f64) -> bool {
        (self.sliding_shutter_min_width_mm..=self.sliding_shutter_max_width_mm)
            .contains(&shutter_width_mm)
    }

    /// Check that the thresholds describe a usable rule set.
    pub fn validate(&self) -> AdvisorResult<()> {
        positive("module_width_mm", self.module_width_mm)?;
        positive("drawer_width_mm", self.drawer_width_mm)?;
        positive("straightener_height_mm", self.straightener_height_mm)?;
        positive(
            "sliding_two_shutter_max_width_mm",
            self.sliding_two_shutter_max_width_mm,
        )?;
        positive("min_hanging_depth_mm", self.min_hanging_depth_mm)?;
        positive("double_hang_min_height_mm", self.double_hang_min_height_mm)?;
        positive(
            "sliding_shutter_min_width_mm",
            self.sliding_shutter_min_width_mm,
        )?;
        positive(
            "sliding_shutter_max_width_mm",
            self.sliding_shutter_max_width_mm,
        )?;

        if self.sliding_shutter_min_width_mm > self.sliding_shutter_max_width_mm {
            return Err(AdvisorError::InvalidStandard {
                field: "sliding_shutter_max_width_mm",
                reason: format!(
                    "{} is below sliding_shutter_min_width_mm {}",
                    self.sliding_shutter_max_width_mm, self.sliding_shutter_min_width_mm
                ),
            });
        }

        if self.min_drawers > self.max_drawers {
            return Err(AdvisorError::InvalidStandard {
                field: "max_drawers",
                reason: format!(
                    "{} is below min_drawers {}",
                    self.max_drawers, self.min_drawers
                ),
            });
        }

        if self.max_rods_per_column == 0 {
            return Err(AdvisorError::InvalidStandard {
                field: "max_rods_per_column",
                reason: "must be at least 1".to_string(),
            });
        }

        for pair in self.hinge_bands.windows(2) {
            if pair[1].max_height_mm <= pair[0].max_height_mm {
                return Err(AdvisorError::InvalidStandard {
                    field: "hinge_bands",
                    reason: format!(
                        "bands must ascend by max_height_mm ({} follows {})",
                        pair[1].max_height_mm, pair[0].max_height_mm
                    ),
                });
            }
        }
        for band in &self.hinge_bands {
            positive("hinge_bands.max_height_mm", band.max_height_mm)?;
        }

        Ok(())
    }
}

fn positive(field: &'static str, value: f64) -> AdvisorResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(AdvisorError::InvalidStandard {
            field,
            reason: format!("{value} is not a positive number"),
        })
    }
}
