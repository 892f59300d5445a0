//! Terminal output utilities.
//!
//! Messages go to stderr so stdout only carries command results. Colors
//! follow console's TTY and `NO_COLOR` detection.

pub mod json;
pub mod table;

use console::style;
use std::sync::atomic::{AtomicBool, Ordering};

static QUIET: AtomicBool = AtomicBool::new(false);

/// Initialize output settings from global flags.
pub fn init(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

/// Whether `-q` was given.
pub fn is_quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Check if colors are enabled
pub fn colors_enabled() -> bool {
    console::colors_enabled()
}

/// Print a styled header
pub fn header(text: &str) {
    if is_quiet() || json::is_enabled() {
        return;
    }
    eprintln!("{} {}", style("t3composer").cyan().bold(), style(text).dim());
}

/// Print a success message
pub fn success(text: &str) {
    if is_quiet() || json::is_enabled() {
        return;
    }
    eprintln!("{} {text}", style("✓").green());
}

/// Print a warning message
pub fn warning(text: &str) {
    if json::is_enabled() {
        return;
    }
    eprintln!("{} {}", style("!").yellow().bold(), style(text).yellow());
}

/// Print an error message
pub fn error(text: &str) {
    eprintln!("{} {}", style("✗").red().bold(), style(text).red());
}

/// Print a section heading to stdout
pub fn section(text: &str) {
    println!("{}", style(text).bold().underlined());
}
