//! Wardrobe Advisor CLI
//!
//! Usage: wardrobe <COMMAND>
//!
//! Commands:
//!   advise     Recommend a layout for one wardrobe
//!   batch      Recommend layouts for every wardrobe in a file
//!   standards  Show the industry standards in effect

mod cli;
mod commands;
mod logging;
mod ui;

use anyhow::Result;
use clap::Parser;

use crate::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    commands::run(cli)
}
