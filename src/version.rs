//! Operator parsing and version comparison.
//!
//! Comparison itself is delegated to the `semver` crate. The only local
//! logic is the operator enum and a lenient parse that accepts the version
//! strings real hosts report: a leading `v`, a missing minor or patch
//! component, or a pre-release suffix on a short core (`"1.2-beta"`).

use std::fmt;
use std::str::FromStr;

use semver::Version;

use crate::error::{Result, VercheckError};

/// Comparison operator between two version strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `<`
    Lt,
    /// `<=`
    Le,
    /// `>`
    Gt,
    /// `>=`
    Ge,
    /// `==` (also accepted as `=`)
    Eq,
    /// `!=` (also accepted as `<>`)
    Ne,
}

impl Operator {
    fn holds_for(self, ordering: std::cmp::Ordering) -> bool {
        use std::cmp::Ordering::{Equal, Greater, Less};
        match self {
            Self::Lt => ordering == Less,
            Self::Le => ordering != Greater,
            Self::Gt => ordering == Greater,
            Self::Ge => ordering != Less,
            Self::Eq => ordering == Equal,
            Self::Ne => ordering != Equal,
        }
    }
}

impl FromStr for Operator {
    type Err = VercheckError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "<" => Ok(Self::Lt),
            "<=" => Ok(Self::Le),
            ">" => Ok(Self::Gt),
            ">=" => Ok(Self::Ge),
            "==" | "=" => Ok(Self::Eq),
            "!=" | "<>" => Ok(Self::Ne),
            other => Err(VercheckError::InvalidOperator {
                operator: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Lt => "<",
            Self::Le => "<=",
            Self::Gt => ">",
            Self::Ge => ">=",
            Self::Eq => "==",
            Self::Ne => "!=",
        };
        f.write_str(symbol)
    }
}

/// Parse a version string leniently.
///
/// Strips a leading `v`, zero-pads a missing minor or patch component,
/// drops components beyond patch, and keeps any pre-release or build
/// suffix in place.
pub fn parse_loose(version: &str) -> Result<Version> {
    let trimmed = version.trim().trim_start_matches('v');

    if let Ok(parsed) = Version::parse(trimmed) {
        return Ok(parsed);
    }

    // Split off a pre-release/build suffix before reshaping the numeric core.
    let (core, suffix) = match trimmed.find(['-', '+']) {
        Some(idx) => (&trimmed[..idx], &trimmed[idx..]),
        None => (trimmed, ""),
    };

    let parts: Vec<&str> = core.split('.').collect();
    let padded = match parts.len() {
        1 => format!("{core}.0.0{suffix}"),
        2 => format!("{core}.0{suffix}"),
        3 => format!("{core}{suffix}"),
        _ => format!("{}.{}.{}{suffix}", parts[0], parts[1], parts[2]),
    };

    Version::parse(&padded).map_err(|err| VercheckError::VersionParse {
        version: version.to_string(),
        message: err.to_string(),
    })
}

/// Returns whether `version1 <operator> version2` holds under semver ordering.
///
/// Pre-releases order below their release (`2.0.0-beta1 < 2.0.0`), per
/// semver precedence rules.
pub fn compare(version1: &str, version2: &str, operator: Operator) -> Result<bool> {
    let left = parse_loose(version1)?;
    let right = parse_loose(version2)?;
    let holds = operator.holds_for(left.cmp(&right));

    tracing::debug!("compare: {left} {operator} {right} -> {holds}");
    Ok(holds)
}
