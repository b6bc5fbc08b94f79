//! Host contexts and version probes.
//!
//! A [`Context`] names the software whose version is being checked. The
//! probes in [`probe`] resolve its current version from the environment,
//! behind a trait so tests never need a live host.
//!
//! # Modules
//!
//! - [`probe`] - Version probes (env overrides, command output, fixed values)

pub mod probe;

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, VercheckError};

pub use probe::{HostProbe, StaticProbe, SystemProbe};

/// Named software whose version can be resolved from the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Context {
    /// The PHP runtime.
    Php,
    /// The hosting WordPress installation.
    WordPress,
}

impl Context {
    /// Human-readable software name used in requirement messages.
    pub fn software_name(self) -> &'static str {
        match self {
            Self::Php => "PHP",
            Self::WordPress => "WordPress",
        }
    }
}

impl FromStr for Context {
    type Err = VercheckError;

    /// Case-insensitive: `"PHP"`, `"php"`, and `"Php"` all resolve identically.
    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "php" => Ok(Self::Php),
            "wordpress" => Ok(Self::WordPress),
            _ => Err(VercheckError::UnknownContext {
                context: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Self::Php => "php",
            Self::WordPress => "wordpress",
        };
        f.write_str(tag)
    }
}
