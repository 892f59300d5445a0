//! t3composer - compose TYPO3 Composer requirements from the command line.
//!
//! Every helper operation is exposed as a subcommand: the version selector
//! and package form, catalog listings, submission cleanup, requirement
//! rendering and cache purges.

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

mod commands;
mod context;
mod output;

use clap::Parser;
use commands::{Cli, Commands};
use context::Context;
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity
    let log_level = match cli.verbose {
        0 if cli.quiet => Level::ERROR,
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let filter = EnvFilter::builder()
        .with_default_directive(log_level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    output::init(cli.quiet);
    if matches!(cli.format, commands::OutputFormat::Json) {
        output::json::enable();
    }

    let ctx = match Context::new(&cli.to_context_args()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output::json::print_config_error(&e);
            return ExitCode::FAILURE;
        }
    };

    match run_command(&cli, &ctx) {
        Ok(code) => code,
        Err(e) => {
            output::json::print_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn run_command(cli: &Cli, ctx: &Context) -> anyhow::Result<ExitCode> {
    match &cli.command {
        Commands::Form(args) => commands::form::run(args, ctx)?,
        Commands::Packages(args) => commands::packages::run(args, ctx)?,
        Commands::Bundles(args) => commands::bundles::run(args, ctx)?,
        Commands::Constraint(args) => commands::constraint::run(args)?,
        Commands::Clean(args) => commands::clean::run(args, ctx)?,
        Commands::Require(args) => commands::require::run(args, ctx)?,
        Commands::Purge(args) => commands::purge::run(args, ctx)?,
        Commands::Validate(args) => commands::validate::run(args, ctx)?,
    }
    Ok(ExitCode::SUCCESS)
}
