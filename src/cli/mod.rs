//! Command-line interface.
//!
//! # Modules
//!
//! - [`args`] - Argument definitions (clap derive)
//! - [`commands`] - Command dispatch and handlers

pub mod args;
pub mod commands;

pub use args::{Cli, Commands};
pub use commands::CommandDispatcher;
