//! Clean command implementation.

use super::SubmissionArgs;
use crate::context::Context;
use crate::output::{self, json};
use anyhow::Result;
use clap::Args;
use serde::Serialize;
use t3composer_core::{PackageFilter, Submission, to_json_pretty};
use tracing::info;

/// Arguments for the clean command.
#[derive(Args, Debug, Clone)]
pub struct CleanArgs {
    #[command(flatten)]
    pub submission: SubmissionArgs,
}

#[derive(Debug, Serialize)]
struct CleanOutput<'a> {
    major: u32,
    removed: Vec<&'a str>,
    submission: &'a Submission,
}

/// Run the clean command.
pub fn run(args: &CleanArgs, ctx: &Context) -> Result<()> {
    info!("running clean command");

    let submission = args.submission.submission()?;
    let major = PackageFilter::new(ctx.repository()).resolve_major(&submission)?;
    let cleaned = ctx.service.clean_packages_for_versions(submission.clone())?;
    let removed: Vec<&str> = submission
        .names()
        .filter(|name| !cleaned.contains(name))
        .collect();

    if json::is_enabled() {
        json::print_success(&CleanOutput {
            major,
            removed,
            submission: &cleaned,
        });
        return Ok(());
    }

    println!("{}", to_json_pretty(&cleaned)?);
    if removed.is_empty() {
        output::success(&format!("every package is available for TYPO3 {major}"));
    } else {
        output::warning(&format!(
            "removed for TYPO3 {major}: {}",
            removed.join(", ")
        ));
    }
    Ok(())
}
