//! Domain Layer
//!
//! The wardrobe rule engine: pure business logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `value_objects/` - Immutable value types (LengthUnit, WardrobeType, input/result)
//! - `policies/` - Named thresholds (IndustryStandards)
//! - `services/` - Rule stages (layout, storage) and the advisor
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system
//! 2. **Total functions** - Services always return; validation happens at the boundary
//! 3. **Named thresholds** - No magic numbers inside the rules

pub mod policies;
pub mod services;
pub mod value_objects;
