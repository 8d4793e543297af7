//! Wardrobe Advisor - smart defaults for furniture wardrobes
//!
//! Given a wardrobe's width, height, depth and type, recommends how to split
//! it into modules and which parts to fit: shutters, hinges, straighteners,
//! hanging rods, shelves and drawers, plus advisory notes for borderline
//! dimensions.
//!
//! ```
//! use wardrobe_advisor::{suggest_defaults, ConfigurationInput, WardrobeType};
//!
//! let input = ConfigurationInput::mm(1200.0, 2400.0, 600.0, WardrobeType::Openable);
//! let result = suggest_defaults(&input);
//! assert_eq!(result.columns, 2);
//! assert!(result.straightener_per_shutter);
//! ```

pub mod batch;
pub mod config;
pub mod domain;
pub mod error;
pub mod presentation;

// Re-exports for convenience
pub use batch::{advise_batch, load_batch, AdvisedEntry, BatchEntry, BatchFormat, BatchOutcome};
pub use config::{Config, ConfigWarning, Verbosity};
pub use domain::policies::{HingeBand, IndustryStandards};
pub use domain::services::{suggest_defaults, WardrobeAdvisor};
pub use domain::value_objects::{
    map_to_smart_default_type, to_millimeters, ConfigurationInput, ConfigurationResult,
    LengthUnit, Note, NoteSeverity, WardrobeType, MM_PER_FOOT,
};
pub use error::{AdvisorError, AdvisorResult};

// Re-export for fuzz targets
pub use serde_yaml_ng;
