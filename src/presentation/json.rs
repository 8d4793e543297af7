//! Shared JSON event types for consistent CLI output.
//!
//! Commands emit NDJSON: one `start`, any number of payload events, one
//! `complete`.

use std::io::{self, Write};

use serde::Serialize;

use crate::domain::policies::IndustryStandards;
use crate::domain::value_objects::{ConfigurationInput, ConfigurationResult};

/// Event emitted when a command starts.
#[derive(Debug, Clone, Serialize)]
pub struct StartEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub version: &'static str,
}

impl<'a> StartEvent<'a> {
    pub fn new(command: &'a str) -> Self {
        Self {
            event: "start",
            command,
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// One advised wardrobe.
#[derive(Debug, Clone, Serialize)]
pub struct AdviceEvent<'a> {
    pub event: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
    pub input: &'a ConfigurationInput,
    pub result: &'a ConfigurationResult,
}

impl<'a> AdviceEvent<'a> {
    pub fn new(
        name: Option<&'a str>,
        input: &'a ConfigurationInput,
        result: &'a ConfigurationResult,
    ) -> Self {
        Self {
            event: "advice",
            name,
            input,
            result,
        }
    }
}

/// A batch entry that could not be advised.
#[derive(Debug, Clone, Serialize)]
pub struct EntryErrorEvent<'a> {
    pub event: &'static str,
    pub name: &'a str,
    pub message: String,
}

impl<'a> EntryErrorEvent<'a> {
    pub fn new(name: &'a str, error: &dyn std::error::Error) -> Self {
        Self {
            event: "entry_error",
            name,
            message: error.to_string(),
        }
    }
}

/// The thresholds in effect.
#[derive(Debug, Clone, Serialize)]
pub struct StandardsEvent<'a> {
    pub event: &'static str,
    pub standards: &'a IndustryStandards,
}

impl<'a> StandardsEvent<'a> {
    pub fn new(standards: &'a IndustryStandards) -> Self {
        Self {
            event: "standards",
            standards,
        }
    }
}

/// Event emitted when a command completes.
#[derive(Debug, Clone, Serialize)]
pub struct CompleteEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advised: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejected: Option<usize>,
}

impl<'a> CompleteEvent<'a> {
    pub fn success(command: &'a str) -> Self {
        Self {
            event: "complete",
            command,
            success: true,
            advised: None,
            rejected: None,
        }
    }

    pub fn failure(command: &'a str) -> Self {
        Self {
            event: "complete",
            command,
            success: false,
            advised: None,
            rejected: None,
        }
    }

    pub fn with_counts(mut self, advised: usize, rejected: usize) -> Self {
        self.advised = Some(advised);
        self.rejected = Some(rejected);
        self.success = rejected == 0;
        self
    }
}

/// Event emitted when a command fails.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub code: &'a str,
    pub message: String,
}

impl<'a> ErrorEvent<'a> {
    pub fn new(command: &'a str, code: &'a str, message: impl Into<String>) -> Self {
        Self {
            event: "error",
            command,
            code,
            message: message.into(),
        }
    }
}

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event(out: &mut impl Write, event: &impl Serialize) -> io::Result<()> {
    let line = serde_json::to_string(event).map_err(io::Error::other)?;
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Convenience helper that writes to stdout.
pub fn emit(event: &impl Serialize) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, event)
}
