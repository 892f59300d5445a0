//! Validate command implementation.

use crate::context::Context;
use crate::output::{self, json, table::Table};
use anyhow::Result;
use clap::Args;
use console::style;
use serde::Serialize;
use t3composer_config::{CacheSettings, Severity, ValidationIssue, Validator};
use tracing::info;

/// Arguments for the validate command.
#[derive(Args, Debug, Clone)]
pub struct ValidateArgs {
    /// Strict mode (warnings as errors)
    #[arg(long)]
    pub strict: bool,
}

#[derive(Debug, Serialize)]
struct IssueRow<'a> {
    severity: &'static str,
    code: &'static str,
    field: &'a str,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    hint: Option<&'a str>,
}

impl<'a> From<&'a ValidationIssue> for IssueRow<'a> {
    fn from(issue: &'a ValidationIssue) -> Self {
        Self {
            severity: issue.severity.as_str(),
            code: issue.code,
            field: &issue.field,
            message: &issue.message,
            hint: issue.hint.as_deref(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ValidateOutput<'a> {
    source: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<String>,
    cache: CacheSettings,
    issues: Vec<IssueRow<'a>>,
}

/// Run the validate command.
pub fn run(args: &ValidateArgs, ctx: &Context) -> Result<()> {
    info!(strict = args.strict, "running validate command");

    let loaded = &ctx.loaded;
    let result = Validator::new().strict(args.strict).validate(&loaded.config);

    if json::is_enabled() {
        if !result.has_errors() {
            json::print_success(&ValidateOutput {
                source: loaded.source.description(),
                path: loaded.path.as_ref().map(|p| p.display().to_string()),
                cache: loaded.config.cache,
                issues: result.issues.iter().map(IssueRow::from).collect(),
            });
        }
        return Ok(result.into_result()?);
    }

    let origin = loaded.path.as_ref().map_or_else(
        || loaded.source.description().to_string(),
        |p| p.display().to_string(),
    );
    output::header(&format!("Validating {origin}"));
    println!("{}", describe_cache(loaded.config.cache));

    if result.issues.is_empty() {
        output::success("configuration is valid");
        return Ok(());
    }

    let mut table = Table::new();
    table.headers(["Severity", "Code", "Field", "Message"]);
    for issue in &result.issues {
        let severity = match issue.severity {
            Severity::Error => table.error_cell(issue.severity.as_str()),
            Severity::Warning => table.warning_cell(issue.severity.as_str()),
            Severity::Info => table.dim_cell(issue.severity.as_str()),
        };
        let message = match &issue.hint {
            Some(hint) => format!("{} ({})", issue.message, style(hint).dim()),
            None => issue.message.clone(),
        };
        table.styled_row(vec![
            severity,
            comfy_table::Cell::new(issue.code),
            comfy_table::Cell::new(&issue.field),
            comfy_table::Cell::new(message),
        ]);
    }
    table.print();

    if !result.has_errors() {
        output::success(&format!(
            "configuration is valid with {} warning(s)",
            result.warning_count()
        ));
    }
    Ok(result.into_result()?)
}

fn describe_cache(cache: CacheSettings) -> String {
    let ttl = if cache.ttl == 0 {
        "no expiry".to_string()
    } else {
        format!("ttl {}s", cache.ttl)
    };
    format!("cache: {} entries, {ttl}", cache.capacity)
}
