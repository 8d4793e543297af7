//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod configuration;
mod note;
mod unit;
mod wardrobe_type;

pub use configuration::{ConfigurationInput, ConfigurationResult, Millimeters};
pub use note::{Note, NoteSeverity};
pub use unit::{to_millimeters, LengthUnit, MM_PER_FOOT};
pub use wardrobe_type::{map_to_smart_default_type, WardrobeType};
