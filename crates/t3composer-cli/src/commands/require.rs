//! Require command implementation.

use super::SubmissionArgs;
use crate::context::Context;
use crate::output::{self, json};
use anyhow::Result;
use clap::Args;
use serde::Serialize;
use t3composer_core::Requirement;
use tracing::info;

/// Arguments for the require command.
#[derive(Args, Debug, Clone)]
pub struct RequireArgs {
    #[command(flatten)]
    pub submission: SubmissionArgs,

    /// Print a composer.json "require" fragment instead of a command line
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct RequireOutput<'a> {
    requirements: &'a [Requirement],
    command: String,
}

/// Run the require command.
pub fn run(args: &RequireArgs, ctx: &Context) -> Result<()> {
    info!("running require command");

    let set = ctx.service.requirements(args.submission.submission()?)?;

    if json::is_enabled() {
        json::print_success(&RequireOutput {
            requirements: set.requirements(),
            command: set.to_command_line(),
        });
        return Ok(());
    }

    if args.json {
        println!("{}", set.to_composer_json()?);
        return Ok(());
    }

    if set.is_empty() {
        output::warning("no package selected");
        return Ok(());
    }
    println!("{}", set.to_command_line());
    Ok(())
}
