//! Configuration module
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (WARDROBE_*)
//! 3. Project config (./wardrobe.toml)
//! 4. User config (<config_dir>/wardrobe/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{load_layered, user_config_path, ConfigWarning, LoadReport, PROJECT_CONFIG_FILE};
pub use types::{Config, DefaultsConfig, OutputConfig, Verbosity};
