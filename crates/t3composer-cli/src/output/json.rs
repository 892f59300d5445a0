//! JSON output support for machine-readable CLI output.
//!
//! With `--format json` every command prints a single `JsonResult` object:
//! the result on stdout, or the error on stderr.

use miette::{Diagnostic, GraphicalReportHandler};
use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use t3composer_config::ConfigError;
use t3composer_core::Error as CoreError;

/// Global JSON output mode
static JSON_OUTPUT: AtomicBool = AtomicBool::new(false);

/// Enable JSON output mode.
pub fn enable() {
    JSON_OUTPUT.store(true, Ordering::Relaxed);
}

/// Check if JSON output is enabled.
pub fn is_enabled() -> bool {
    JSON_OUTPUT.load(Ordering::Relaxed)
}

/// JSON-serializable error structure.
#[derive(Debug, Serialize)]
pub struct JsonError {
    /// Error code (e.g., "E0201")
    pub code: String,
    /// Error code title
    pub title: String,
    /// Detailed error message
    pub message: String,
    /// Suggestions for fixing the error
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
    /// Related file, field or package
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

/// JSON-serializable result structure.
#[derive(Debug, Serialize)]
pub struct JsonResult<T> {
    /// Whether the operation succeeded
    pub success: bool,
    /// The result data (if success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Error information (if failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonError>,
}

impl JsonError {
    /// Create a `JsonError` from a core error.
    #[must_use]
    pub fn from_core_error(err: &CoreError) -> Self {
        let code = err.code();
        Self {
            code: code.as_str().to_string(),
            title: code.title().to_string(),
            message: err.to_string(),
            suggestions: err.suggestions().to_vec(),
            context: extract_context(err),
        }
    }

    /// Create a `JsonError` from a configuration error.
    #[must_use]
    pub fn from_config_error(err: &ConfigError) -> Self {
        let code = t3composer_core::ErrorCode::E1101;
        let mut suggestions: Vec<String> = err.help().map(|h| h.to_string()).into_iter().collect();
        if let ConfigError::ValidationFailed { errors, .. } = err {
            suggestions.extend(errors.iter().cloned());
        }
        Self {
            code: code.as_str().to_string(),
            title: code.title().to_string(),
            message: err.to_string(),
            suggestions,
            context: err.key().map(str::to_string),
        }
    }

    /// Create a `JsonError` from an anyhow error.
    #[must_use]
    pub fn from_anyhow(err: &anyhow::Error) -> Self {
        if let Some(core_err) = err.downcast_ref::<CoreError>() {
            return Self::from_core_error(core_err);
        }
        if let Some(config_err) = err.downcast_ref::<ConfigError>() {
            return Self::from_config_error(config_err);
        }

        Self {
            code: "E0000".to_string(),
            title: "Unknown error".to_string(),
            message: format!("{err:#}"),
            suggestions: vec![],
            context: None,
        }
    }
}

impl<T: Serialize> JsonResult<T> {
    /// Create a successful result.
    #[must_use]
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// Print this result as JSON to stdout (or stderr for errors).
    pub fn print(&self) {
        if let Ok(json) = sonic_rs::to_string_pretty(self) {
            if self.success {
                println!("{json}");
            } else {
                eprintln!("{json}");
            }
        }
    }
}

impl JsonResult<()> {
    /// Create a failed result.
    #[must_use]
    pub fn failure(error: JsonError) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
        }
    }
}

/// Extract context from a core error.
fn extract_context(err: &CoreError) -> Option<String> {
    match err {
        CoreError::UnknownPackage { name, .. } | CoreError::UnknownBundle { name, .. } => {
            Some(name.clone())
        }
        CoreError::NoRelease { major, .. } => Some(major.clone()),
        CoreError::InvalidSubmission { field, .. } => field.clone(),
        CoreError::Io { path, .. } => Some(path.display().to_string()),
        CoreError::Config { key, .. } => key.clone(),
        _ => None,
    }
}

/// Print command data as a JSON result.
pub fn print_success<T: Serialize>(data: &T) {
    JsonResult::success(data).print();
}

/// Print an error in JSON format if enabled, otherwise human-readable.
pub fn print_error(err: &anyhow::Error) {
    if is_enabled() {
        JsonResult::failure(JsonError::from_anyhow(err)).print();
    } else if let Some(core_err) = err.downcast_ref::<CoreError>() {
        eprintln!("{}", core_err.display_with_suggestions());
    } else if let Some(config_err) = err.downcast_ref::<ConfigError>() {
        print_diagnostic(config_err);
    } else {
        super::error(&format!("{err:#}"));
    }
}

/// Print a configuration error with its diagnostic.
pub fn print_config_error(err: &ConfigError) {
    if is_enabled() {
        JsonResult::failure(JsonError::from_config_error(err)).print();
    } else {
        print_diagnostic(err);
    }
}

fn print_diagnostic(diagnostic: &dyn Diagnostic) {
    let mut rendered = String::new();
    if GraphicalReportHandler::new()
        .render_report(&mut rendered, diagnostic)
        .is_ok()
    {
        eprint!("{rendered}");
    } else {
        super::error(&diagnostic.to_string());
    }
}
