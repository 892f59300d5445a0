//! Constraint command implementation.

use crate::output::json;
use anyhow::Result;
use clap::Args;
use serde::Serialize;
use t3composer_core::{ReleaseVersion, VersionConstraint};
use tracing::{info, warn};

/// Arguments for the constraint command.
#[derive(Args, Debug, Clone)]
pub struct ConstraintArgs {
    /// Release version (e.g. 12.4.3)
    #[arg(id = "release_version", value_name = "VERSION")]
    pub version: String,

    /// Build a development constraint (^VERSION@dev)
    #[arg(long)]
    pub dev: bool,
}

#[derive(Debug, Serialize)]
struct ConstraintOutput<'a> {
    version: &'a str,
    development: bool,
    constraint: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    next_minor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    next_patch: Option<String>,
}

/// Run the constraint command.
pub fn run(args: &ConstraintArgs) -> Result<()> {
    info!(version = %args.version, dev = args.dev, "running constraint command");

    let constraint = VersionConstraint::for_version(&args.version, args.dev);
    if constraint.is_empty() {
        warn!(version = %args.version, "version has no major.minor prefix");
    }

    if json::is_enabled() {
        let parsed = ReleaseVersion::parse(&args.version);
        json::print_success(&ConstraintOutput {
            version: &args.version,
            development: args.dev,
            constraint: constraint.as_str(),
            next_minor: parsed.map(|v| v.next_minor()),
            next_patch: parsed.map(|v| v.next_patch()),
        });
        return Ok(());
    }

    println!("{constraint}");
    Ok(())
}
