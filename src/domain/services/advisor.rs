//! Wardrobe Configuration Advisor
//!
//! Single-pass orchestration: normalize, lay out, allocate storage, merge.
//! Stateless apart from the thresholds it was built with, so one advisor can
//! be shared freely across threads.

use tracing::debug;

use super::layout::derive_layout;
use super::storage::derive_storage;
use crate::domain::policies::IndustryStandards;
use crate::domain::value_objects::{ConfigurationInput, ConfigurationResult};
use crate::error::AdvisorResult;

/// Advisor bound to a validated set of industry standards
#[derive(Debug, Clone, Default)]
pub struct WardrobeAdvisor {
    standards: IndustryStandards,
}

impl WardrobeAdvisor {
    /// Build an advisor, rejecting thresholds the rules cannot work with
    pub fn new(standards: IndustryStandards) -> AdvisorResult<Self> {
        standards.validate()?;
        Ok(Self { standards })
    }

    pub fn standards(&self) -> &IndustryStandards {
        &self.standards
    }

    /// Compute the recommended layout. Total over any `f64` input.
    pub fn suggest(&self, input: &ConfigurationInput) -> ConfigurationResult {
        let mm = input.to_millimeters();
        debug!(
            unit = %input.unit,
            width_mm = mm.width,
            height_mm = mm.height,
            depth_mm = mm.depth,
            "normalized dimensions"
        );

        let layout = derive_layout(mm.width, mm.height, input.wardrobe_type, &self.standards);
        let storage = derive_storage(
            mm.width,
            mm.depth,
            mm.height,
            layout.columns,
            &self.standards,
        );

        let mut notes = layout.notes;
        notes.extend(storage.notes);

        ConfigurationResult {
            columns: layout.columns,
            shutters: layout.shutters,
            hinges_per_shutter: layout.hinges_per_shutter,
            straightener_per_shutter: layout.straightener_per_shutter,
            drawers: storage.drawers,
            shelves: storage.shelves,
            rods: storage.rods,
            foldable_shelf: storage.foldable_shelf,
            notes,
        }
    }

    /// Validate the dimensions, then compute the layout.
    pub fn advise(&self, input: &ConfigurationInput) -> AdvisorResult<ConfigurationResult> {
        input.validate()?;
        Ok(self.suggest(input))
    }
}

/// Recommended layout under the default industry standards.
pub fn suggest_defaults(input: &ConfigurationInput) -> ConfigurationResult {
    WardrobeAdvisor::default().suggest(input)
}
