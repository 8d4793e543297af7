//! Command implementations and the shared context they run in.

pub mod advise;
pub mod batch;
pub mod standards;

use anyhow::{Context as _, Result};
use tracing::{debug, warn};
use wardrobe_advisor::config::load_layered;
use wardrobe_advisor::presentation::json::{self, CompleteEvent, ErrorEvent};
use wardrobe_advisor::presentation::Icons;
use wardrobe_advisor::{AdvisorError, Config, WardrobeAdvisor};

use crate::cli::{Cli, Commands};
use crate::logging::init_logging;
use crate::ui;

/// Everything a command needs besides its own arguments
pub struct Context {
    pub config: Config,
    pub json: bool,
    pub icons: Icons,
}

impl Context {
    pub fn advisor(&self) -> Result<WardrobeAdvisor> {
        WardrobeAdvisor::new(self.config.standards.clone()).context("invalid industry standards")
    }

    /// Close the JSON event stream for a failed command and hand the error back.
    pub fn fail(&self, command: &str, err: anyhow::Error) -> anyhow::Error {
        if self.json {
            let code = err
                .downcast_ref::<AdvisorError>()
                .map(AdvisorError::code)
                .unwrap_or("error");
            let _ = json::emit(&ErrorEvent::new(command, code, format!("{err:#}")));
            let _ = json::emit(&CompleteEvent::failure(command));
        }
        err
    }
}

/// Resolve configuration, set up logging, and run the requested command.
pub fn run(cli: Cli) -> Result<()> {
    let (config, source, warnings, skipped) = match &cli.config {
        Some(path) => {
            let (config, warnings) = Config::load_with_warnings(path)
                .with_context(|| format!("failed to load config {}", path.display()))?;
            (config.with_env_overrides(), Some(path.clone()), warnings, Vec::new())
        }
        None => {
            let cwd = std::env::current_dir()?;
            let report = load_layered(Some(&cwd));
            (report.config, report.source, report.warnings, report.skipped)
        }
    };

    init_logging(config.output.verbosity.bumped(cli.verbose));

    match &source {
        Some(file) => debug!(file = %file.display(), "using config file"),
        None => debug!("using built-in defaults"),
    }

    for (file, reason) in &skipped {
        warn!(file = %file.display(), %reason, "skipping config file");
    }
    if cli.json {
        for w in &warnings {
            warn!(key = %w.key, file = %w.file.display(), "unknown config key");
        }
    } else {
        ui::print_config_warnings(&warnings);
    }

    let ctx = Context {
        icons: ui::icons(&config),
        json: cli.json,
        config,
    };

    match cli.command {
        Commands::Advise {
            width,
            height,
            depth,
            unit,
            wardrobe_type,
            label,
        } => advise::cmd_advise(
            &ctx,
            advise::AdviseArgs {
                width,
                height,
                depth,
                unit,
                wardrobe_type,
                label,
            },
        ),
        Commands::Batch { file } => batch::cmd_batch(&ctx, &file),
        Commands::Standards => standards::cmd_standards(&ctx),
    }
}
