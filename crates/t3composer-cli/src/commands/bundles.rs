//! Bundles command implementation.

use crate::context::Context;
use crate::output::{self, json, table::Table};
use anyhow::Result;
use clap::Args;
use serde::Serialize;
use t3composer_core::catalog;
use tracing::info;

/// Arguments for the bundles command.
#[derive(Args, Debug, Clone)]
pub struct BundlesArgs {
    /// Show a single bundle
    #[arg(value_name = "BUNDLE")]
    pub name: Option<String>,
}

#[derive(Debug, Serialize)]
struct BundleRow<'a> {
    name: &'a str,
    fields: &'a str,
}

/// Run the bundles command.
pub fn run(args: &BundlesArgs, ctx: &Context) -> Result<()> {
    info!(bundle = ?args.name, "running bundles command");

    let bundles = match &args.name {
        Some(name) => {
            let bundle = catalog::find_bundle(name)?;
            vec![(bundle.name, bundle.to_json()?)]
        }
        None => ctx.service.bundles()?,
    };

    if json::is_enabled() {
        let rows: Vec<BundleRow<'_>> = bundles
            .iter()
            .map(|(name, fields)| BundleRow { name, fields })
            .collect();
        json::print_success(&rows);
        return Ok(());
    }

    output::header("Package bundles");
    let mut table = Table::new();
    table.headers(["Bundle", "Fields"]);
    for (name, fields) in &bundles {
        table.row([*name, fields.as_str()]);
    }
    table.print();
    Ok(())
}
