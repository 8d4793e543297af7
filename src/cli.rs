//! CLI Argument Parsing
//!
//! Global flags (--json, --verbose, --config) are inherited by all subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use wardrobe_advisor::{LengthUnit, WardrobeType};

/// Wardrobe Advisor - smart defaults for wardrobe layouts
#[derive(Parser, Debug)]
#[command(name = "wardrobe")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output NDJSON events for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (default: ./wardrobe.toml, then the user config)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Recommend a layout for one wardrobe
    Advise {
        /// Overall width
        #[arg(long, allow_negative_numbers = true)]
        width: f64,

        /// Overall height
        #[arg(long, allow_negative_numbers = true)]
        height: f64,

        /// Inside depth
        #[arg(long, allow_negative_numbers = true)]
        depth: f64,

        /// Unit of the dimensions (mm or ft)
        #[arg(short, long)]
        unit: Option<LengthUnit>,

        /// Wardrobe type (openable, sliding, walkin)
        #[arg(short = 't', long = "type", conflicts_with = "label")]
        wardrobe_type: Option<WardrobeType>,

        /// Free-text type label, e.g. "Walk-in"; unknown labels mean openable
        #[arg(long)]
        label: Option<String>,
    },

    /// Recommend layouts for every wardrobe in a TOML, JSON or YAML file
    Batch {
        /// Batch file with a top-level `wardrobe` list
        file: PathBuf,
    },

    /// Show the industry standards in effect
    Standards,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_advise() {
        let cli = Cli::try_parse_from([
            "wardrobe", "advise", "--width", "1200", "--height", "2400", "--depth", "600",
        ])
        .unwrap();
        if let Commands::Advise {
            width,
            unit,
            wardrobe_type,
            ..
        } = cli.command
        {
            assert_eq!(width, 1200.0);
            assert!(unit.is_none());
            assert!(wardrobe_type.is_none());
        } else {
            panic!("Expected Advise command");
        }
    }

    #[test]
    fn test_cli_parse_advise_with_unit_and_type() {
        let cli = Cli::try_parse_from([
            "wardrobe", "advise", "--width", "3", "--height", "7", "--depth", "1.5", "-u", "ft",
            "--type", "sliding",
        ])
        .unwrap();
        if let Commands::Advise {
            unit,
            wardrobe_type,
            ..
        } = cli.command
        {
            assert_eq!(unit, Some(LengthUnit::Ft));
            assert_eq!(wardrobe_type, Some(WardrobeType::Sliding));
        } else {
            panic!("Expected Advise command");
        }
    }

    #[test]
    fn test_cli_rejects_unknown_type() {
        let result = Cli::try_parse_from([
            "wardrobe", "advise", "--width", "1", "--height", "1", "--depth", "1", "--type",
            "loft",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_type_conflicts_with_label() {
        let result = Cli::try_parse_from([
            "wardrobe", "advise", "--width", "1", "--height", "1", "--depth", "1", "--type",
            "sliding", "--label", "Walk-in",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_negative_dimension_parses() {
        let cli = Cli::try_parse_from([
            "wardrobe", "advise", "--width", "-600", "--height", "1", "--depth", "1",
        ])
        .unwrap();
        assert!(matches!(cli.command, Commands::Advise { width, .. } if width == -600.0));
    }

    #[test]
    fn test_cli_parse_batch_and_globals() {
        let cli = Cli::try_parse_from([
            "wardrobe", "batch", "quote.toml", "--json", "-vv", "--config", "shop.toml",
        ])
        .unwrap();
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("shop.toml")));
        assert!(matches!(cli.command, Commands::Batch { file } if file == PathBuf::from("quote.toml")));
    }

    #[test]
    fn test_cli_parse_standards() {
        let cli = Cli::try_parse_from(["wardrobe", "standards"]).unwrap();
        assert!(matches!(cli.command, Commands::Standards));
    }
}
