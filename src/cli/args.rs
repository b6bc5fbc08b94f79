//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Vercheck - software version requirement checking.
#[derive(Debug, Parser)]
#[command(name = "vercheck")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compare two version strings
    Check(CheckArgs),

    /// Require a minimum version for a host context
    Require(RequireArgs),

    /// Print the current version of a host context
    Current(CurrentArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CheckArgs {
    /// Left-hand version
    pub version1: String,

    /// Comparison operator: <, <=, >, >=, == (=), != (<>)
    pub operator: String,

    /// Right-hand version
    pub version2: String,
}

/// Arguments for the `require` command.
#[derive(Debug, Clone, clap::Args)]
pub struct RequireArgs {
    /// Host context (php, wordpress; case-insensitive)
    pub context: String,

    /// Minimum required version
    #[arg(id = "min_version", value_name = "VERSION")]
    pub version: String,
}

/// Arguments for the `current` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CurrentArgs {
    /// Host context (php, wordpress; case-insensitive)
    pub context: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_check_command() {
        let cli = Cli::parse_from(["vercheck", "check", "1.2.3", ">=", "1.0.0"]);
        match cli.command {
            Commands::Check(args) => {
                assert_eq!(args.version1, "1.2.3");
                assert_eq!(args.operator, ">=");
                assert_eq!(args.version2, "1.0.0");
            }
            _ => panic!("Expected Check command"),
        }
    }

    #[test]
    fn parses_require_command() {
        let cli = Cli::parse_from(["vercheck", "require", "php", "8.0.0"]);
        match cli.command {
            Commands::Require(args) => {
                assert_eq!(args.context, "php");
                assert_eq!(args.version, "8.0.0");
            }
            _ => panic!("Expected Require command"),
        }
    }

    #[test]
    fn parses_current_with_json_flag() {
        let cli = Cli::parse_from(["vercheck", "current", "wordpress", "--json"]);
        match cli.command {
            Commands::Current(args) => {
                assert_eq!(args.context, "wordpress");
                assert!(args.json);
            }
            _ => panic!("Expected Current command"),
        }
    }

    #[test]
    fn global_flags_apply_after_subcommand() {
        let cli = Cli::parse_from(["vercheck", "check", "1.0.0", "==", "1.0.0", "--quiet"]);
        assert!(cli.quiet);
    }
}
