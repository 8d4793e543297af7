//! Advisory note value object.

use serde::{Deserialize, Serialize};

/// How much attention a note deserves. Neither level blocks a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NoteSeverity {
    #[default]
    Info,
    Warning,
}

/// Human-readable remark attached to a configuration result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub severity: NoteSeverity,
    pub message: String,
}

impl Note {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            severity: NoteSeverity::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: NoteSeverity::Warning,
            message: message.into(),
        }
    }

    pub fn is_warning(&self) -> bool {
        self.severity == NoteSeverity::Warning
    }
}

impl std::fmt::Display for Note {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_severity() {
        assert!(Note::warning("tall").is_warning());
        assert!(!Note::info("fyi").is_warning());
    }

    #[test]
    fn serializes_as_tagged_record() {
        let json = serde_json::to_value(Note::warning("x")).unwrap();
        assert_eq!(json["severity"], "warning");
        assert_eq!(json["message"], "x");
    }
}
