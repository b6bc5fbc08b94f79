//! Version requirement checking against host software.
//!
//! [`VersionChecker`] is the public surface of the crate: pairwise version
//! comparison, raising variants that fail with a message when a comparison
//! does not hold, and context-resolving helpers that probe the current PHP
//! or WordPress version before comparing.

use std::str::FromStr;

use crate::error::{Result, VercheckError};
use crate::host::{Context, HostProbe, SystemProbe};
use crate::version::{self, Operator};

/// Default failure message for [`VersionChecker::ensure`].
const DEFAULT_MESSAGE: &str = "Invalid version.";
/// Default failure message for [`VersionChecker::ensure_php`].
const DEFAULT_PHP_MESSAGE: &str = "Invalid PHP version.";
/// Default failure message for [`VersionChecker::ensure_wordpress`].
const DEFAULT_WORDPRESS_MESSAGE: &str = "Invalid WordPress version.";

/// Checks software version strings against required thresholds.
///
/// Generic over the [`HostProbe`] that resolves current versions, so
/// callers can substitute a [`StaticProbe`](crate::host::StaticProbe)
/// when no live host is available.
pub struct VersionChecker<P = SystemProbe> {
    probe: P,
}

impl VersionChecker<SystemProbe> {
    /// Create a checker backed by the system probe.
    pub fn new() -> Self {
        Self {
            probe: SystemProbe::new(),
        }
    }
}

impl Default for VersionChecker<SystemProbe> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: HostProbe> VersionChecker<P> {
    /// Create a checker backed by a custom probe.
    pub fn with_probe(probe: P) -> Self {
        Self { probe }
    }

    /// Returns whether `version1 <operator> version2` holds.
    ///
    /// An unrecognized operator is a [`VercheckError::InvalidOperator`]
    /// error, never a silent `false`.
    pub fn check(&self, version1: &str, version2: &str, operator: &str) -> Result<bool> {
        let operator = Operator::from_str(operator)?;
        version::compare(version1, version2, operator)
    }

    /// Like [`check`](Self::check), but fails with
    /// [`VercheckError::UnsatisfiedVersion`] when the comparison does not hold.
    pub fn ensure(
        &self,
        version1: &str,
        version2: &str,
        operator: &str,
        message: Option<&str>,
    ) -> Result<()> {
        if self.check(version1, version2, operator)? {
            Ok(())
        } else {
            Err(VercheckError::UnsatisfiedVersion {
                message: message.unwrap_or(DEFAULT_MESSAGE).to_string(),
            })
        }
    }

    /// Compare the current PHP version against `version`.
    ///
    /// Equivalent to `check(current_php_version, version, operator)`.
    pub fn check_php(&self, version: &str, operator: &str) -> Result<bool> {
        self.check_context(Context::Php, version, operator)
    }

    /// Fails when the current PHP version does not satisfy the comparison.
    ///
    /// The failure condition matches [`ensure`](Self::ensure): an error is
    /// returned when the comparison does not hold.
    pub fn ensure_php(&self, version: &str, operator: &str, message: Option<&str>) -> Result<()> {
        self.ensure_context(Context::Php, version, operator, message, DEFAULT_PHP_MESSAGE)
    }

    /// Compare the current WordPress version against `version`.
    pub fn check_wordpress(&self, version: &str, operator: &str) -> Result<bool> {
        self.check_context(Context::WordPress, version, operator)
    }

    /// Fails when the current WordPress version does not satisfy the comparison.
    pub fn ensure_wordpress(
        &self,
        version: &str,
        operator: &str,
        message: Option<&str>,
    ) -> Result<()> {
        self.ensure_context(
            Context::WordPress,
            version,
            operator,
            message,
            DEFAULT_WORDPRESS_MESSAGE,
        )
    }

    /// Fails unless the current version for `context` is at least `required`.
    ///
    /// `context` is a case-insensitive tag (`"php"`, `"wordpress"`); an
    /// unrecognized tag is a [`VercheckError::UnknownContext`] error.
    pub fn require_at_least(&self, context: &str, required: &str) -> Result<()> {
        let context = Context::from_str(context)?;
        let current = self.resolve(context)?;
        let message = format!(
            "{} version must be at least '{required}'.",
            context.software_name()
        );
        self.ensure(&current, required, ">=", Some(&message))
    }

    /// Resolve the current version for a named context.
    pub fn current_version(&self, context: &str) -> Result<String> {
        let context = Context::from_str(context)?;
        self.resolve(context)
    }

    fn check_context(&self, context: Context, version: &str, operator: &str) -> Result<bool> {
        let current = self.resolve(context)?;
        self.check(&current, version, operator)
    }

    fn ensure_context(
        &self,
        context: Context,
        version: &str,
        operator: &str,
        message: Option<&str>,
        default_message: &str,
    ) -> Result<()> {
        if self.check_context(context, version, operator)? {
            Ok(())
        } else {
            Err(VercheckError::UnsatisfiedVersion {
                message: message.unwrap_or(default_message).to_string(),
            })
        }
    }

    fn resolve(&self, context: Context) -> Result<String> {
        self.probe
            .current_version(context)
            .map_err(|reason| VercheckError::ProbeFailed {
                context: context.software_name(),
                reason,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::StaticProbe;

    fn checker() -> VersionChecker<StaticProbe> {
        VersionChecker::with_probe(StaticProbe::new().with_php("8.3.1").with_wordpress("6.5.2"))
    }

    #[test]
    fn check_matches_semver_ordering() {
        let checker = checker();
        assert!(checker.check("1.2.3", "1.2.3", "==").unwrap());
        assert!(checker.check("1.2.3", "1.2.4", "<").unwrap());
        assert!(checker.check("2.0.0", "1.9.9", ">").unwrap());
        assert!(!checker.check("1.0.0", "2.0.0", ">=").unwrap());
    }

    #[test]
    fn check_rejects_invalid_operator() {
        let err = checker().check("1.0.0", "1.0.0", "~>").unwrap_err();
        assert!(matches!(err, VercheckError::InvalidOperator { .. }));
    }

    #[test]
    fn ensure_fails_with_default_message() {
        let err = checker().ensure("1.0.0", "2.0.0", ">=", None).unwrap_err();
        assert_eq!(err.to_string(), "Invalid version.");
    }

    #[test]
    fn ensure_fails_with_caller_message() {
        let err = checker()
            .ensure("1.0.0", "2.0.0", ">=", Some("upgrade required"))
            .unwrap_err();
        assert_eq!(err.to_string(), "upgrade required");
    }

    #[test]
    fn ensure_passes_when_comparison_holds() {
        assert!(checker().ensure("2.0.0", "1.0.0", ">=", None).is_ok());
    }

    #[test]
    fn check_php_compares_probed_version() {
        let checker = checker();
        assert!(checker.check_php("8.0.0", ">=").unwrap());
        assert!(!checker.check_php("9.0.0", ">=").unwrap());
    }

    #[test]
    fn ensure_php_fails_when_requirement_not_met() {
        let err = checker().ensure_php("9.0.0", ">=", None).unwrap_err();
        assert_eq!(err.to_string(), "Invalid PHP version.");
    }

    #[test]
    fn ensure_php_passes_when_requirement_met() {
        assert!(checker().ensure_php("8.0.0", ">=", None).is_ok());
    }

    #[test]
    fn ensure_wordpress_uses_its_default_message() {
        let err = checker().ensure_wordpress("99.0.0", ">=", None).unwrap_err();
        assert_eq!(err.to_string(), "Invalid WordPress version.");
    }

    #[test]
    fn require_at_least_passes_when_current_is_newer() {
        assert!(checker().require_at_least("php", "8.0.0").is_ok());
        assert!(checker().require_at_least("wordpress", "6.0.0").is_ok());
    }

    #[test]
    fn require_at_least_names_software_in_message() {
        let err = checker().require_at_least("php", "999.0.0").unwrap_err();
        assert_eq!(
            err.to_string(),
            "PHP version must be at least '999.0.0'."
        );

        let err = checker()
            .require_at_least("wordpress", "999.0.0")
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "WordPress version must be at least '999.0.0'."
        );
    }

    #[test]
    fn require_at_least_rejects_unknown_context() {
        let err = checker()
            .require_at_least("unknown-system", "1.0.0")
            .unwrap_err();
        assert!(matches!(err, VercheckError::UnknownContext { .. }));
    }

    #[test]
    fn require_at_least_context_is_case_insensitive() {
        let checker = checker();
        assert!(checker.require_at_least("PHP", "8.0.0").is_ok());
        assert!(checker.require_at_least("Php", "8.0.0").is_ok());
        assert!(checker.require_at_least("WordPress", "6.0.0").is_ok());
    }

    #[test]
    fn require_at_least_exact_match_passes() {
        let err = checker().require_at_least("php", "8.3.1");
        assert!(err.is_ok());
    }

    #[test]
    fn unconfigured_probe_surfaces_probe_failure() {
        let checker = VersionChecker::with_probe(StaticProbe::new());
        let err = checker.require_at_least("php", "8.0.0").unwrap_err();
        assert!(matches!(err, VercheckError::ProbeFailed { .. }));
    }

    #[test]
    fn current_version_resolves_context_string() {
        assert_eq!(checker().current_version("WordPress").unwrap(), "6.5.2");
    }
}
