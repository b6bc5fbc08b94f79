//! Vercheck - software version requirement checking.
//!
//! Vercheck compares software version strings against required thresholds
//! and resolves the current version of host software (the PHP runtime, a
//! WordPress installation) for minimum-version assertions. Comparison is
//! delegated to semver ordering; host versions come from injectable probes
//! so nothing here needs a live host to test.
//!
//! # Modules
//!
//! - [`checker`] - The version checker: check, ensure, and require operations
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result alias
//! - [`host`] - Host contexts and version probes
//! - [`version`] - Operator parsing and semver comparison
//!
//! # Example
//!
//! ```
//! use vercheck::VersionChecker;
//! use vercheck::host::StaticProbe;
//!
//! let checker = VersionChecker::with_probe(StaticProbe::new().with_php("8.3.1"));
//! assert!(checker.check("2.0.0", "1.9.9", ">").unwrap());
//! assert!(checker.ensure_php("8.0.0", ">=", None).is_ok());
//! assert!(checker.require_at_least("php", "999.0.0").is_err());
//! ```

pub mod checker;
pub mod cli;
pub mod error;
pub mod host;
pub mod version;

pub use checker::VersionChecker;
pub use error::{Result, VercheckError};
