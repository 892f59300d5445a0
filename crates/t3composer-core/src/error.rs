//! Error types for Composer helper operations.
//!
//! Each error has:
//! - A unique error code (e.g., E0201) for easy reference and searching
//! - A clear error message explaining what went wrong
//! - Suggestions for how to fix the issue

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Error codes for helper errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Catalog errors (E01xx)
    /// Package is not part of the catalog
    E0101,
    /// Bundle is not part of the catalog
    E0102,

    // Release data errors (E02xx)
    /// No LTS major version with Composer support
    E0201,
    /// Major version has no release
    E0202,
    /// No Composer-supported release at all
    E0203,

    // Input errors (E04xx)
    /// Invalid form submission
    E0401,
    /// Invalid JSON syntax
    E0403,

    // IO errors (E05xx)
    /// File could not be read or written
    E0501,

    // Cache errors (E06xx)
    /// Cache invalidation failed
    E0601,

    // Configuration errors (E11xx)
    /// Invalid configuration
    E1101,
}

impl ErrorCode {
    /// Get the string representation of the error code.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::E0101 => "E0101",
            Self::E0102 => "E0102",
            Self::E0201 => "E0201",
            Self::E0202 => "E0202",
            Self::E0203 => "E0203",
            Self::E0401 => "E0401",
            Self::E0403 => "E0403",
            Self::E0501 => "E0501",
            Self::E0601 => "E0601",
            Self::E1101 => "E1101",
        }
    }

    /// Get a brief title for this error code.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::E0101 => "Unknown package",
            Self::E0102 => "Unknown bundle",
            Self::E0201 => "No LTS version",
            Self::E0202 => "No release",
            Self::E0203 => "No Composer release",
            Self::E0401 => "Invalid submission",
            Self::E0403 => "JSON syntax error",
            Self::E0501 => "IO error",
            Self::E0601 => "Cache error",
            Self::E1101 => "Invalid configuration",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Main error type for the Composer helper.
#[derive(Error, Debug)]
pub enum Error {
    /// Package not in the catalog.
    #[error("[E0101] package '{name}' is not part of the catalog")]
    UnknownPackage {
        /// Package name.
        name: String,
        /// Suggestions for fixing.
        suggestions: Vec<String>,
    },

    /// Bundle not in the catalog.
    #[error("[E0102] bundle '{name}' is not part of the catalog")]
    UnknownBundle {
        /// Bundle name.
        name: String,
        /// Suggestions for fixing.
        suggestions: Vec<String>,
    },

    /// No LTS major version with Composer support.
    #[error("[E0201] no LTS release with Composer support found")]
    NoLtsMajorVersion {
        /// Suggestions for fixing.
        suggestions: Vec<String>,
    },

    /// A major version exists but carries no release.
    #[error("[E0202] no release found for {major}")]
    NoRelease {
        /// Title or version of the major version.
        major: String,
        /// Suggestions for fixing.
        suggestions: Vec<String>,
    },

    /// No Composer-supported release exists at all.
    #[error("[E0203] no release with Composer support found")]
    NoComposerRelease {
        /// Suggestions for fixing.
        suggestions: Vec<String>,
    },

    /// Invalid submission input.
    #[error("[E0401] invalid submission: {message}")]
    InvalidSubmission {
        /// Offending field (if known).
        field: Option<String>,
        /// Error message.
        message: String,
        /// Suggestions for fixing.
        suggestions: Vec<String>,
    },

    /// JSON error.
    #[error("[E0403] json error: {0}")]
    Json(#[from] sonic_rs::Error),

    /// IO error.
    #[error("[E0501] io error at {path}: {message}")]
    Io {
        /// File path.
        path: PathBuf,
        /// Error message.
        message: String,
        /// Suggestions for fixing.
        suggestions: Vec<String>,
    },

    /// Cache error.
    #[error("[E0601] cache error: {message}")]
    Cache {
        /// Error message.
        message: String,
        /// Suggestions for fixing.
        suggestions: Vec<String>,
    },

    /// Configuration error.
    #[error("[E1101] config error: {message}")]
    Config {
        /// Error message.
        message: String,
        /// Configuration key.
        key: Option<String>,
        /// Suggestions for fixing.
        suggestions: Vec<String>,
    },
}

impl Error {
    /// Get the error code for this error.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::UnknownPackage { .. } => ErrorCode::E0101,
            Self::UnknownBundle { .. } => ErrorCode::E0102,
            Self::NoLtsMajorVersion { .. } => ErrorCode::E0201,
            Self::NoRelease { .. } => ErrorCode::E0202,
            Self::NoComposerRelease { .. } => ErrorCode::E0203,
            Self::InvalidSubmission { .. } => ErrorCode::E0401,
            Self::Json(_) => ErrorCode::E0403,
            Self::Io { .. } => ErrorCode::E0501,
            Self::Cache { .. } => ErrorCode::E0601,
            Self::Config { .. } => ErrorCode::E1101,
        }
    }

    /// Get suggestions for fixing this error.
    #[must_use]
    pub fn suggestions(&self) -> &[String] {
        match self {
            Self::UnknownPackage { suggestions, .. }
            | Self::UnknownBundle { suggestions, .. }
            | Self::NoLtsMajorVersion { suggestions }
            | Self::NoRelease { suggestions, .. }
            | Self::NoComposerRelease { suggestions }
            | Self::InvalidSubmission { suggestions, .. }
            | Self::Io { suggestions, .. }
            | Self::Cache { suggestions, .. }
            | Self::Config { suggestions, .. } => suggestions,
            Self::Json(_) => &[],
        }
    }

    /// Create an unknown package error.
    #[must_use]
    pub fn unknown_package(name: impl Into<String>) -> Self {
        let name = name.into();
        Self::UnknownPackage {
            suggestions: vec![
                "List the catalog with: t3composer packages".to_string(),
                format!("Check '{name}' for typos (expected vendor/name)"),
            ],
            name,
        }
    }

    /// Create an unknown bundle error.
    #[must_use]
    pub fn unknown_bundle(name: impl Into<String>) -> Self {
        let name = name.into();
        Self::UnknownBundle {
            suggestions: vec!["List the bundles with: t3composer bundles".to_string()],
            name,
        }
    }

    /// No LTS major version with Composer support is known.
    #[must_use]
    pub fn no_lts_major_version() -> Self {
        Self::NoLtsMajorVersion {
            suggestions: vec![
                "Mark at least one Composer-supported major version as LTS".to_string(),
                "Check the release data with: t3composer validate".to_string(),
            ],
        }
    }

    /// A major version has no release.
    #[must_use]
    pub fn no_release(major: impl Into<String>) -> Self {
        let major = major.into();
        Self::NoRelease {
            suggestions: vec![format!("Add at least one release to {major}")],
            major,
        }
    }

    /// No Composer-supported release exists.
    #[must_use]
    pub fn no_composer_release() -> Self {
        Self::NoComposerRelease {
            suggestions: vec![
                "Add a major version with Composer support and a release".to_string(),
                "Submit an explicit caret constraint such as ^12.4".to_string(),
            ],
        }
    }

    /// Create an invalid submission error.
    #[must_use]
    pub fn invalid_submission(field: Option<String>, message: impl Into<String>) -> Self {
        let mut suggestions = vec!["Pass fields as FIELD=VALUE pairs or a JSON object".to_string()];
        if let Some(ref f) = field {
            suggestions.push(format!("Check the value given for '{f}'"));
        }
        Self::InvalidSubmission {
            field,
            message: message.into(),
            suggestions,
        }
    }

    /// Create an IO error with context.
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        let path = path.into();
        let suggestions = match err.kind() {
            std::io::ErrorKind::NotFound => {
                vec![format!("Check if the path exists: {}", path.display())]
            }
            std::io::ErrorKind::PermissionDenied => {
                vec![format!("Check permissions on: {}", path.display())]
            }
            _ => vec![format!("Check the file: {}", path.display())],
        };
        Self::Io {
            path,
            message: err.to_string(),
            suggestions,
        }
    }

    /// Create a cache error.
    #[must_use]
    pub fn cache(message: impl Into<String>) -> Self {
        Self::Cache {
            message: message.into(),
            suggestions: vec!["Retry the purge once the cache backend is reachable".to_string()],
        }
    }

    /// Create a config error.
    #[must_use]
    pub fn config(message: impl Into<String>, key: Option<String>) -> Self {
        Self::Config {
            message: message.into(),
            key,
            suggestions: vec!["Check your configuration file for errors".to_string()],
        }
    }

    /// Format the error with suggestions for display.
    #[must_use]
    pub fn display_with_suggestions(&self) -> String {
        let mut output = format!("{self}");
        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str("\n\nSuggestions:");
            for suggestion in suggestions {
                output.push_str(&format!("\n  • {suggestion}"));
            }
        }
        output
    }
}

/// Result type for helper operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(ErrorCode::E0201.as_str(), "E0201");
        assert_eq!(ErrorCode::E0201.title(), "No LTS version");
    }

    #[test]
    fn test_no_lts_error() {
        let err = Error::no_lts_major_version();
        assert_eq!(err.code(), ErrorCode::E0201);
        assert!(!err.suggestions().is_empty());
        assert!(err.to_string().contains("[E0201]"));
    }

    #[test]
    fn test_no_release_mentions_major() {
        let err = Error::no_release("TYPO3 13");
        assert_eq!(err.code(), ErrorCode::E0202);
        assert!(err.to_string().contains("TYPO3 13"));
    }

    #[test]
    fn test_invalid_submission_field_suggestion() {
        let err = Error::invalid_submission(Some("typo3_version".into()), "missing '='");
        assert_eq!(err.code(), ErrorCode::E0401);
        assert_eq!(err.suggestions().len(), 2);
    }

    #[test]
    fn test_display_with_suggestions() {
        let err = Error::unknown_bundle("typo3/huge");
        let display = err.display_with_suggestions();
        assert!(display.contains("Suggestions:"));
        assert!(display.contains("t3composer bundles"));
    }
}
