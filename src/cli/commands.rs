//! Command execution.
//!
//! The [`CommandDispatcher`] routes a parsed [`Cli`] to its handler and
//! returns a process exit code. Unmet comparisons and requirements exit
//! with code 1; usage and probe errors propagate as [`VercheckError`].

use clap::CommandFactory;
use serde::Serialize;

use crate::checker::VersionChecker;
use crate::error::{Result, VercheckError};

use super::args::{CheckArgs, Cli, Commands, CompletionsArgs, CurrentArgs, RequireArgs};

/// JSON payload for `current --json`.
#[derive(Debug, Serialize)]
struct CurrentOutput {
    context: String,
    version: String,
}

/// Dispatches parsed CLI commands to their handlers.
pub struct CommandDispatcher {
    checker: VersionChecker,
}

impl CommandDispatcher {
    /// Create a dispatcher backed by the system probe.
    pub fn new() -> Self {
        Self {
            checker: VersionChecker::new(),
        }
    }

    /// Execute the parsed command, returning the process exit code.
    pub fn dispatch(&self, cli: &Cli) -> Result<u8> {
        match &cli.command {
            Commands::Check(args) => self.run_check(args, cli.quiet),
            Commands::Require(args) => self.run_require(args, cli.quiet),
            Commands::Current(args) => self.run_current(args),
            Commands::Completions(args) => run_completions(args),
        }
    }

    fn run_check(&self, args: &CheckArgs, quiet: bool) -> Result<u8> {
        let holds = self
            .checker
            .check(&args.version1, &args.version2, &args.operator)?;

        if !quiet {
            println!(
                "{} {} {} is {}",
                args.version1, args.operator, args.version2, holds
            );
        }
        Ok(if holds { 0 } else { 1 })
    }

    fn run_require(&self, args: &RequireArgs, quiet: bool) -> Result<u8> {
        match self.checker.require_at_least(&args.context, &args.version) {
            Ok(()) => {
                if !quiet {
                    println!(
                        "{} satisfies required version '{}'.",
                        args.context.to_lowercase(),
                        args.version
                    );
                }
                Ok(0)
            }
            Err(VercheckError::UnsatisfiedVersion { message }) => {
                eprintln!("{message}");
                Ok(1)
            }
            Err(err) => Err(err),
        }
    }

    fn run_current(&self, args: &CurrentArgs) -> Result<u8> {
        let version = self.checker.current_version(&args.context)?;

        if args.json {
            let output = CurrentOutput {
                context: args.context.to_lowercase(),
                version,
            };
            println!("{}", serde_json::to_string(&output).unwrap_or_default());
        } else {
            println!("{version}");
        }
        Ok(0)
    }
}

impl Default for CommandDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

fn run_completions(args: &CompletionsArgs) -> Result<u8> {
    let mut cmd = Cli::command();
    clap_complete::generate(args.shell, &mut cmd, "vercheck", &mut std::io::stdout());
    Ok(0)
}
