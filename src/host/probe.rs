//! Version probes for host software.
//!
//! The production probe resolves a context's current version in two steps:
//! an environment variable override first, then the host binary's own
//! version output. The override exists because the hosting process often
//! knows its versions already (and because spawned commands see a
//! non-interactive PATH where the host binary may not resolve).

use std::process::Command;

use anyhow::{anyhow, Context as _};
use regex::Regex;

use super::Context;

/// Env overrides, checked before running any command.
pub const PHP_VERSION_ENV: &str = "VERCHECK_PHP_VERSION";
pub const WORDPRESS_VERSION_ENV: &str = "VERCHECK_WORDPRESS_VERSION";

/// Resolves the current version of a host context.
pub trait HostProbe {
    /// Resolve the current version string for `context`.
    fn current_version(&self, context: Context) -> anyhow::Result<String>;
}

/// Probe that reads the live environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProbe;

impl SystemProbe {
    /// Create a new system probe.
    pub fn new() -> Self {
        Self
    }

    fn env_override(context: Context) -> Option<String> {
        let var = match context {
            Context::Php => PHP_VERSION_ENV,
            Context::WordPress => WORDPRESS_VERSION_ENV,
        };
        std::env::var(var).ok().filter(|value| !value.is_empty())
    }

    fn version_command(context: Context) -> (&'static str, &'static [&'static str]) {
        match context {
            Context::Php => ("php", &["--version"]),
            Context::WordPress => ("wp", &["core", "version"]),
        }
    }
}

impl HostProbe for SystemProbe {
    fn current_version(&self, context: Context) -> anyhow::Result<String> {
        if let Some(version) = Self::env_override(context) {
            tracing::debug!("{context} version from env override: {version}");
            return Ok(version);
        }

        let (program, args) = Self::version_command(context);
        let output = Command::new(program)
            .args(args)
            .output()
            .with_context(|| format!("failed to run '{program}'"))?;

        if !output.status.success() {
            return Err(anyhow!("'{program}' exited with {}", output.status));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let version = extract_version(&stdout)
            .ok_or_else(|| anyhow!("no version number in '{program}' output"))?;

        tracing::debug!("{context} version from '{program}': {version}");
        Ok(version)
    }
}

/// Probe with fixed versions, for tests and for embedding hosts that
/// already know their versions.
#[derive(Debug, Clone, Default)]
pub struct StaticProbe {
    php: Option<String>,
    wordpress: Option<String>,
}

impl StaticProbe {
    /// Create an empty static probe; every lookup fails until versions are set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the PHP version this probe reports.
    pub fn with_php(mut self, version: &str) -> Self {
        self.php = Some(version.to_string());
        self
    }

    /// Set the WordPress version this probe reports.
    pub fn with_wordpress(mut self, version: &str) -> Self {
        self.wordpress = Some(version.to_string());
        self
    }
}

impl HostProbe for StaticProbe {
    fn current_version(&self, context: Context) -> anyhow::Result<String> {
        let version = match context {
            Context::Php => self.php.as_ref(),
            Context::WordPress => self.wordpress.as_ref(),
        };
        version
            .cloned()
            .ok_or_else(|| anyhow!("no {context} version configured"))
    }
}

/// Extract a version number from command output.
///
/// `php --version` prints `PHP 8.3.1 (cli) (built: ...)`; `wp core version`
/// prints the bare number. Tries the most specific pattern first.
fn extract_version(output: &str) -> Option<String> {
    let patterns = [r"(\d+\.\d+\.\d+(?:-[0-9A-Za-z.]+)?)", r"(\d+\.\d+)"];

    for pattern in &patterns {
        if let Ok(re) = Regex::new(pattern) {
            if let Some(caps) = re.captures(output) {
                if let Some(m) = caps.get(1) {
                    return Some(m.as_str().to_string());
                }
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_version_from_php_banner() {
        let output = "PHP 8.3.1 (cli) (built: Dec 21 2023 20:19:13) (NTS)";
        assert_eq!(extract_version(output), Some("8.3.1".to_string()));
    }

    #[test]
    fn extract_version_bare_number() {
        assert_eq!(extract_version("6.5.2\n"), Some("6.5.2".to_string()));
    }

    #[test]
    fn extract_version_two_components() {
        assert_eq!(extract_version("version 6.5"), Some("6.5".to_string()));
    }

    #[test]
    fn extract_version_with_prerelease() {
        let output = "PHP 8.4.0-RC1 (cli)";
        assert_eq!(extract_version(output), Some("8.4.0-RC1".to_string()));
    }

    #[test]
    fn extract_version_none_when_absent() {
        assert_eq!(extract_version("no numbers here"), None);
    }

    #[test]
    fn static_probe_reports_configured_versions() {
        let probe = StaticProbe::new().with_php("8.3.1").with_wordpress("6.5.2");
        assert_eq!(probe.current_version(Context::Php).unwrap(), "8.3.1");
        assert_eq!(probe.current_version(Context::WordPress).unwrap(), "6.5.2");
    }

    #[test]
    fn static_probe_fails_on_unconfigured_context() {
        let probe = StaticProbe::new().with_php("8.3.1");
        assert!(probe.current_version(Context::WordPress).is_err());
    }
}
