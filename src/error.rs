//! Error types for the wardrobe advisor
//!
//! Uses `thiserror` for library errors; the binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for advisor operations
pub type AdvisorResult<T> = Result<T, AdvisorError>;

/// Main error type for advisor operations
#[derive(Error, Debug)]
pub enum AdvisorError {
    /// A wardrobe dimension is zero, negative, or not a finite number
    #[error("invalid {dimension}: {value} (must be a positive, finite number)")]
    InvalidDimension { dimension: &'static str, value: f64 },

    /// Measurement unit not recognized
    #[error("unknown unit '{0}' (expected 'mm' or 'ft')")]
    UnknownUnit(String),

    /// Wardrobe type not recognized
    #[error("unknown wardrobe type '{0}' (expected 'openable', 'sliding' or 'walkin')")]
    UnknownWardrobeType(String),

    /// An industry standard threshold is out of range
    #[error("invalid standard '{field}': {reason}")]
    InvalidStandard { field: &'static str, reason: String },

    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Batch file could not be parsed
    #[error("invalid batch file {file}: {message}")]
    InvalidBatch { file: PathBuf, message: String },

    /// Batch file extension is not one we can read
    #[error("unsupported batch format for {file} (use .toml, .json, .yaml or .yml)")]
    UnsupportedFormat { file: PathBuf },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AdvisorError {
    /// Stable machine-readable code for JSON output
    pub fn code(&self) -> &'static str {
        match self {
            AdvisorError::InvalidDimension { .. } => "invalid_dimension",
            AdvisorError::UnknownUnit(_) => "unknown_unit",
            AdvisorError::UnknownWardrobeType(_) => "unknown_wardrobe_type",
            AdvisorError::InvalidStandard { .. } => "invalid_standard",
            AdvisorError::InvalidConfig { .. } => "invalid_config",
            AdvisorError::InvalidBatch { .. } => "invalid_batch",
            AdvisorError::UnsupportedFormat { .. } => "unsupported_format",
            AdvisorError::Io(_) => "io",
        }
    }
}
