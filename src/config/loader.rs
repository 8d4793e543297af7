//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{AdvisorError, AdvisorResult};

use super::types::{Config, Verbosity};

/// Project-level config file name, looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "wardrobe.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
///
/// The loaded standards are validated; a config that parses but describes
/// unusable thresholds is an error.
pub fn load_with_warnings(path: &Path) -> AdvisorResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| AdvisorError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    config.standards.validate()?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .rsplit('.')
                .next()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
                file: path.to_path_buf(),
                key,
            }
        })
        .collect();

    debug!(file = %path.display(), "loaded config");
    Ok((config, warnings))
}

/// What layered loading found, before anything was logged
#[derive(Debug, Default)]
pub struct LoadReport {
    pub config: Config,
    /// File the config came from; `None` means built-in defaults
    pub source: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
    /// Files that exist but failed to load, with the reason
    pub skipped: Vec<(PathBuf, String)>,
}

/// Try project config, then user config, then defaults; env overrides last.
///
/// Files that exist but fail to load are recorded in `skipped` and the next
/// layer is tried.
pub fn load_layered(project_root: Option<&Path>) -> LoadReport {
    let candidates = project_root
        .map(|root| root.join(PROJECT_CONFIG_FILE))
        .into_iter()
        .chain(user_config_path());

    let mut report = LoadReport::default();
    for candidate in candidates {
        if !candidate.exists() {
            continue;
        }
        match load_with_warnings(&candidate) {
            Ok((config, warnings)) => {
                report.config = config;
                report.warnings = warnings;
                report.source = Some(candidate);
                break;
            }
            Err(err) => report.skipped.push((candidate, err.to_string())),
        }
    }

    report.config = with_env_overrides(report.config);
    report
}

/// Apply environment variable overrides (WARDROBE_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |key| std::env::var(key).ok())
}

/// Apply overrides from any key lookup. Unparseable values are ignored.
pub(crate) fn apply_overrides(
    mut config: Config,
    lookup: impl Fn(&str) -> Option<String>,
) -> Config {
    // WARDROBE_UNIT
    if let Some(unit) = lookup("WARDROBE_UNIT") {
        match unit.parse() {
            Ok(unit) => config.defaults.unit = unit,
            Err(err) => warn!(%err, "ignoring WARDROBE_UNIT"),
        }
    }

    // WARDROBE_TYPE
    if let Some(kind) = lookup("WARDROBE_TYPE") {
        match kind.parse() {
            Ok(kind) => config.defaults.wardrobe_type = kind,
            Err(err) => warn!(%err, "ignoring WARDROBE_TYPE"),
        }
    }

    // WARDROBE_VERBOSITY
    if let Some(verbosity) = lookup("WARDROBE_VERBOSITY") {
        config.output.verbosity = match verbosity.to_lowercase().as_str() {
            "quiet" => Verbosity::Quiet,
            "verbose" => Verbosity::Verbose,
            "debug" => Verbosity::Debug,
            _ => Verbosity::Normal,
        };
    }

    config
}

/// `<config_dir>/wardrobe/config.toml`, if the platform has a config dir
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("wardrobe").join("config.toml"))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "defaults",
        "unit",
        "wardrobe_type",
        "standards",
        "module_width_mm",
        "hinge_bands",
        "max_height_mm",
        "hinges",
        "tall_door_hinges",
        "straightener_height_mm",
        "sliding_two_shutter_max_width_mm",
        "sliding_shutter_min_width_mm",
        "sliding_shutter_max_width_mm",
        "min_hanging_depth_mm",
        "double_hang_min_height_mm",
        "drawer_width_mm",
        "min_drawers",
        "max_drawers",
        "shelves_per_shelved_column",
        "shelves_per_unhung_column",
        "max_rods_per_column",
        "output",
        "verbosity",
        "unicode",
    ];

    CANDIDATES
        .iter()
        .map(|candidate| (*candidate, levenshtein(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let b_bytes = b.as_bytes();
    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a.as_bytes().iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let substitution = prev[j] + usize::from(ac != bc);
            curr[j + 1] = substitution.min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_bytes.len()]
}
