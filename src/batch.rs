//! Batch input: several wardrobes from one file
//!
//! A quote usually carries more than one wardrobe. Batch files hold a
//! top-level `wardrobe` array in TOML, JSON or YAML:
//!
//! ```toml
//! [[wardrobe]]
//! name = "Master bedroom"
//! unit = "ft"
//! width = 6
//! height = 7
//! depth = 2
//! type = "Sliding"
//! ```
//!
//! Entries are converted and validated one by one, so a bad line item never
//! hides the results of the good ones.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::DefaultsConfig;
use crate::domain::services::WardrobeAdvisor;
use crate::domain::value_objects::{
    map_to_smart_default_type, ConfigurationInput, ConfigurationResult, LengthUnit,
};
use crate::error::{AdvisorError, AdvisorResult};

/// On-disk encoding of a batch file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchFormat {
    Toml,
    Json,
    Yaml,
}

impl BatchFormat {
    /// Pick a format from the file extension
    pub fn from_path(path: &Path) -> AdvisorResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("toml") => Ok(BatchFormat::Toml),
            Some("json") => Ok(BatchFormat::Json),
            Some("yaml") | Some("yml") => Ok(BatchFormat::Yaml),
            _ => Err(AdvisorError::UnsupportedFormat {
                file: path.to_path_buf(),
            }),
        }
    }
}

#[derive(Debug, Deserialize)]
struct BatchFile {
    #[serde(default)]
    wardrobe: Vec<BatchEntry>,
}

/// One wardrobe as written in a batch file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchEntry {
    #[serde(default)]
    pub name: Option<String>,
    /// Parsed strictly; falls back to the configured default when absent
    #[serde(default)]
    pub unit: Option<String>,
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    /// Free-text label, mapped leniently
    #[serde(default, rename = "type")]
    pub label: Option<String>,
}

impl BatchEntry {
    /// Name to show for this entry (1-based position when unnamed)
    pub fn display_name(&self, index: usize) -> String {
        match &self.name {
            Some(name) if !name.trim().is_empty() => name.clone(),
            _ => format!("#{}", index + 1),
        }
    }

    /// Build a validated advisor input, filling gaps from `defaults`.
    pub fn to_input(&self, defaults: &DefaultsConfig) -> AdvisorResult<ConfigurationInput> {
        let unit = match &self.unit {
            Some(unit) => unit.parse::<LengthUnit>()?,
            None => defaults.unit,
        };
        let wardrobe_type = self
            .label
            .as_deref()
            .map(map_to_smart_default_type)
            .unwrap_or(defaults.wardrobe_type);

        let input =
            ConfigurationInput::new(unit, self.width, self.height, self.depth, wardrobe_type);
        input.validate()?;
        Ok(input)
    }
}

/// A batch entry that passed validation, with its recommendation
#[derive(Debug, Clone, PartialEq)]
pub struct AdvisedEntry {
    pub input: ConfigurationInput,
    pub result: ConfigurationResult,
}

/// Result of advising one batch entry
#[derive(Debug)]
pub struct BatchOutcome {
    pub name: String,
    pub advice: AdvisorResult<AdvisedEntry>,
}

impl BatchOutcome {
    pub fn is_ok(&self) -> bool {
        self.advice.is_ok()
    }
}

/// Parse batch entries from text in the given format.
pub fn parse_batch(
    content: &str,
    format: BatchFormat,
    path: &Path,
) -> AdvisorResult<Vec<BatchEntry>> {
    let invalid = |message: String| AdvisorError::InvalidBatch {
        file: path.to_path_buf(),
        message,
    };

    let file: BatchFile = match format {
        BatchFormat::Toml => toml::from_str(content).map_err(|e| invalid(e.to_string()))?,
        BatchFormat::Json => serde_json::from_str(content).map_err(|e| invalid(e.to_string()))?,
        BatchFormat::Yaml => {
            serde_yaml_ng::from_str(content).map_err(|e| invalid(e.to_string()))?
        }
    };

    Ok(file.wardrobe)
}

/// Read and parse a batch file, choosing the format by extension.
pub fn load_batch(path: &Path) -> AdvisorResult<Vec<BatchEntry>> {
    let format = BatchFormat::from_path(path)?;
    let content = fs::read_to_string(path)?;
    let entries = parse_batch(&content, format, path)?;
    debug!(file = %path.display(), entries = entries.len(), "loaded batch");
    Ok(entries)
}

/// Advise every entry independently.
pub fn advise_batch(
    advisor: &WardrobeAdvisor,
    entries: &[BatchEntry],
    defaults: &DefaultsConfig,
) -> Vec<BatchOutcome> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let name = entry.display_name(index);
            let advice = entry.to_input(defaults).map(|input| AdvisedEntry {
                result: advisor.suggest(&input),
                input,
            });
            if let Err(err) = &advice {
                warn!(entry = %name, error = %err, "rejected batch entry");
            }
            BatchOutcome { name, advice }
        })
        .collect()
}
