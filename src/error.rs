//! Error types for vercheck operations.
//!
//! This module defines [`VercheckError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `VercheckError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` inside the host probes for command plumbing; probe
//!   failures surface as `VercheckError::ProbeFailed`
//! - All errors should provide actionable messages for users

use thiserror::Error;

/// Core error type for vercheck operations.
#[derive(Debug, Error)]
pub enum VercheckError {
    /// Unrecognized comparison operator string.
    #[error("Invalid operator: '{operator}'")]
    InvalidOperator { operator: String },

    /// A version string that could not be interpreted even leniently.
    #[error("Failed to parse version '{version}': {message}")]
    VersionParse { version: String, message: String },

    /// Unrecognized context name passed to a host lookup.
    #[error("Invalid context given. '{context}' is not a valid context.")]
    UnknownContext { context: String },

    /// A version requirement was not satisfied.
    #[error("{message}")]
    UnsatisfiedVersion { message: String },

    /// The host probe could not resolve a current version.
    #[error("Failed to probe {context} version: {reason}")]
    ProbeFailed {
        context: &'static str,
        reason: anyhow::Error,
    },
}

/// Result type alias for vercheck operations.
pub type Result<T> = std::result::Result<T, VercheckError>;
