//! Presentation Layer
//!
//! Rendering of advisor results for people (text) and machines (NDJSON).
//! Argument parsing and command dispatch live in the binary.

pub mod json;
pub mod output;

pub use output::{render_error, render_result, render_standards, Icons};
