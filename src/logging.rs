//! Logging setup for the CLI.
//!
//! Diagnostics go to stderr through `tracing`; stdout carries command output
//! only. `RUST_LOG` wins over the configured verbosity when set.

use tracing_subscriber::EnvFilter;
use wardrobe_advisor::Verbosity;

/// Install the global subscriber. Safe to call more than once.
pub fn init_logging(verbosity: Verbosity) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.filter_directive()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
