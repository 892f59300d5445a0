//! Configuration validation with descriptive errors.

use crate::error::{ConfigError, Result};
use crate::types::HelperConfig;
use std::collections::HashSet;
use t3composer_core::{MajorVersionRepository, ReleaseVersion};

/// Validation severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Informational message.
    Info,
    /// Warning (may indicate issues).
    Warning,
    /// Error (must be fixed).
    Error,
}

impl Severity {
    /// Lowercase label for display.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// Validation issue.
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    /// Severity level.
    pub severity: Severity,
    /// Issue code for programmatic handling.
    pub code: &'static str,
    /// Field path (dot-notation).
    pub field: String,
    /// Human-readable message.
    pub message: String,
    /// Suggested fix.
    pub hint: Option<String>,
}

impl ValidationIssue {
    /// Create a new error.
    #[must_use]
    pub fn error(code: &'static str, field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_severity(Severity::Error, code, field, message)
    }

    /// Create a new warning.
    #[must_use]
    pub fn warning(
        code: &'static str,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::with_severity(Severity::Warning, code, field, message)
    }

    /// Create a new info message.
    #[must_use]
    pub fn info(code: &'static str, field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_severity(Severity::Info, code, field, message)
    }

    fn with_severity(
        severity: Severity,
        code: &'static str,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            code,
            field: field.into(),
            message: message.into(),
            hint: None,
        }
    }

    /// Add a hint to the issue.
    #[must_use]
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Validation result containing all issues.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// All validation issues.
    pub issues: Vec<ValidationIssue>,
}

impl ValidationResult {
    /// Create a new empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an issue.
    pub fn add(&mut self, issue: ValidationIssue) {
        self.issues.push(issue);
    }

    /// Check if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(|i| i.severity == Severity::Error)
    }

    /// Check if there are any warnings.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        self.issues.iter().any(|i| i.severity == Severity::Warning)
    }

    /// Get error count.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    /// Get warning count.
    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    fn count(&self, severity: Severity) -> usize {
        self.issues.iter().filter(|i| i.severity == severity).count()
    }

    /// Issue codes in report order.
    #[must_use]
    pub fn codes(&self) -> Vec<&'static str> {
        self.issues.iter().map(|i| i.code).collect()
    }

    /// Convert to result, failing if there are errors.
    ///
    /// # Errors
    /// Returns error if validation has errors.
    pub fn into_result(self) -> Result<()> {
        if self.has_errors() {
            let errors: Vec<String> = self
                .issues
                .iter()
                .filter(|i| i.severity == Severity::Error)
                .map(|i| format!("{}: {}", i.field, i.message))
                .collect();
            Err(ConfigError::ValidationFailed {
                count: errors.len(),
                errors,
            })
        } else {
            Ok(())
        }
    }
}

/// Configuration validator.
#[derive(Debug, Default)]
pub struct Validator {
    /// Strict mode (treat warnings as errors).
    strict: bool,
}

impl Validator {
    /// Create a new validator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable strict mode.
    #[must_use]
    pub const fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Validate a configuration.
    #[must_use]
    pub fn validate(&self, config: &HelperConfig) -> ValidationResult {
        let mut result = ValidationResult::new();
        self.validate_major_versions(config, &mut result);
        self.validate_cache(config, &mut result);

        if self.strict {
            for issue in &mut result.issues {
                if issue.severity == Severity::Warning {
                    issue.severity = Severity::Error;
                }
            }
        }
        result
    }

    fn validate_major_versions(&self, config: &HelperConfig, result: &mut ValidationResult) {
        if config.major_versions.is_empty() {
            result.add(
                ValidationIssue::error(
                    "no-major-versions",
                    "major-versions",
                    "no major version is configured",
                )
                .with_hint("add at least one entry to \"major-versions\""),
            );
            return;
        }

        let mut seen = HashSet::new();
        for (index, major) in config.major_versions.iter().enumerate() {
            let field = format!("major-versions.{index}");

            if major.version.trim().is_empty() {
                result.add(ValidationIssue::error(
                    "empty-version",
                    format!("{field}.version"),
                    "version must not be empty",
                ));
            } else if !seen.insert(major.version.as_str()) {
                result.add(ValidationIssue::error(
                    "duplicate-major-version",
                    format!("{field}.version"),
                    format!("major version {} is configured twice", major.version),
                ));
            }

            if let Some(lts) = &major.lts {
                if !major.composer {
                    result.add(
                        ValidationIssue::warning(
                            "lts-without-composer",
                            format!("{field}.lts"),
                            format!("{} is LTS but not installable with Composer", major.version),
                        )
                        .with_hint("the version selector ignores it"),
                    );
                }
                if !lts.starts_with(major.version.as_str()) {
                    result.add(ValidationIssue::warning(
                        "lts-mismatch",
                        format!("{field}.lts"),
                        format!("LTS {lts} does not belong to {}", major.version),
                    ));
                }
            }

            if major.releases.is_empty() {
                result.add(ValidationIssue::warning(
                    "no-releases",
                    format!("{field}.releases"),
                    format!("{} has no release", major.version),
                ));
            }

            for (position, release) in major.releases.iter().enumerate() {
                if ReleaseVersion::parse(release).is_none() {
                    result.add(
                        ValidationIssue::warning(
                            "unparseable-release",
                            format!("{field}.releases.{position}"),
                            format!("release '{release}' is not major.minor.patch"),
                        )
                        .with_hint("it ranks below every parseable release"),
                    );
                }
            }
        }

        self.validate_form_source(config, result);
    }

    fn validate_form_source(&self, config: &HelperConfig, result: &mut ValidationResult) {
        let repository = config.repository();
        match repository.find_latest_lts_composer_supported() {
            None => result.add(
                ValidationIssue::error(
                    "no-lts",
                    "major-versions",
                    "no LTS major version with Composer support",
                )
                .with_hint("the helper form cannot select a default version"),
            ),
            Some(major) if major.latest_release().is_none() => result.add(ValidationIssue::error(
                "no-lts-release",
                "major-versions",
                format!("{} is the newest LTS but has no release", major.title()),
            )),
            Some(_) => {}
        }
    }

    fn validate_cache(&self, config: &HelperConfig, result: &mut ValidationResult) {
        if config.cache.capacity == 0 {
            result.add(
                ValidationIssue::error("cache-capacity", "cache.capacity", "capacity must be positive")
                    .with_hint("use the default of 10000 entries"),
            );
        }
        if config.cache.ttl == 0 {
            result.add(ValidationIssue::info(
                "cache-no-expiry",
                "cache.ttl",
                "entries never expire",
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MajorVersionConfig;
    use pretty_assertions::assert_eq;

    fn lts(version: &str, lts: &str, releases: &[&str]) -> MajorVersionConfig {
        MajorVersionConfig {
            lts: Some(lts.to_string()),
            releases: releases.iter().map(|r| (*r).to_string()).collect(),
            ..MajorVersionConfig::new(version)
        }
    }

    fn config(majors: Vec<MajorVersionConfig>) -> HelperConfig {
        HelperConfig {
            major_versions: majors,
            ..HelperConfig::default()
        }
    }

    #[test]
    fn builtin_defaults_are_clean() {
        let result = Validator::new().validate(&crate::loader::defaults().unwrap());
        assert!(!result.has_errors(), "{:?}", result.issues);
        assert!(!result.has_warnings(), "{:?}", result.issues);
    }

    #[test]
    fn empty_configuration() {
        let result = Validator::new().validate(&HelperConfig::default());
        assert_eq!(result.codes(), vec!["no-major-versions"]);
        assert!(result.into_result().is_err());
    }

    #[test]
    fn duplicate_major() {
        let result = Validator::new().validate(&config(vec![
            lts("12", "12.4", &["12.4.3"]),
            lts("12", "12.4", &["12.4.4"]),
        ]));
        assert_eq!(result.codes(), vec!["duplicate-major-version"]);
    }

    #[test]
    fn lts_without_composer() {
        let mut legacy = lts("7", "7.6", &["7.6.32"]);
        legacy.composer = false;
        let result = Validator::new().validate(&config(vec![lts("12", "12.4", &["12.4.3"]), legacy]));
        assert_eq!(result.codes(), vec!["lts-without-composer"]);
        assert_eq!(result.warning_count(), 1);
    }

    #[test]
    fn release_problems() {
        let result = Validator::new().validate(&config(vec![
            lts("12", "12.4", &["12.4.3", "dev-main"]),
            MajorVersionConfig::new("13"),
        ]));
        assert_eq!(result.codes(), vec!["unparseable-release", "no-releases"]);
        assert_eq!(result.issues[0].field, "major-versions.0.releases.1");
    }

    #[test]
    fn form_needs_an_lts_release() {
        let result = Validator::new().validate(&config(vec![lts("12", "12.4", &[])]));
        assert_eq!(result.codes(), vec!["no-releases", "no-lts-release"]);

        let result = Validator::new().validate(&config(vec![MajorVersionConfig {
            releases: vec!["13.0.0".to_string()],
            ..MajorVersionConfig::new("13")
        }]));
        assert_eq!(result.codes(), vec!["no-lts"]);
    }

    #[test]
    fn strict_mode_promotes_warnings() {
        let config = config(vec![lts("12", "11.5", &["12.4.3"])]);
        assert!(!Validator::new().validate(&config).has_errors());

        let result = Validator::new().strict(true).validate(&config);
        assert_eq!(result.error_count(), 1);
        assert_eq!(result.codes(), vec!["lts-mismatch"]);
    }

    #[test]
    fn cache_settings() {
        let mut config = config(vec![lts("12", "12.4", &["12.4.3"])]);
        config.cache.capacity = 0;
        config.cache.ttl = 0;
        let result = Validator::new().validate(&config);
        assert_eq!(result.codes(), vec!["cache-capacity", "cache-no-expiry"]);
        assert_eq!(result.error_count(), 1);
    }
}
