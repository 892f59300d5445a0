//! Packages command implementation.

use crate::context::Context;
use crate::output::{self, json, table::Table};
use anyhow::Result;
use clap::Args;
use serde::Serialize;
use t3composer_core::catalog::{self, PACKAGES, Package};
use tracing::info;

/// Arguments for the packages command.
#[derive(Args, Debug, Clone)]
pub struct PackagesArgs {
    /// Show a single package (Composer name or field identifier)
    #[arg(value_name = "PACKAGE", conflicts_with = "major")]
    pub name: Option<String>,

    /// Only list packages available for this major version
    #[arg(long, value_name = "MAJOR")]
    pub major: Option<u32>,

    /// Only print package names
    #[arg(long)]
    pub names_only: bool,
}

#[derive(Debug, Serialize)]
struct PackageRow {
    name: &'static str,
    field: String,
    description: &'static str,
    versions: &'static [u32],
}

impl From<&Package> for PackageRow {
    fn from(package: &Package) -> Self {
        Self {
            name: package.name,
            field: package.field_name(),
            description: package.description,
            versions: package.versions,
        }
    }
}

/// Run the packages command.
pub fn run(args: &PackagesArgs, ctx: &Context) -> Result<()> {
    info!(package = ?args.name, major = ?args.major, "running packages command");

    let packages: Vec<&Package> = match (&args.name, args.major) {
        (Some(name), _) => vec![catalog::package(name)?],
        (None, Some(major)) => catalog::packages_for_major(major).collect(),
        (None, None) => PACKAGES.iter().collect(),
    };

    if json::is_enabled() {
        if args.names_only {
            let names: Vec<&str> = if args.name.is_none() && args.major.is_none() {
                ctx.service.core_packages()
            } else {
                packages.iter().map(|p| p.name).collect()
            };
            json::print_success(&names);
        } else {
            let rows: Vec<PackageRow> = packages.into_iter().map(PackageRow::from).collect();
            json::print_success(&rows);
        }
        return Ok(());
    }

    if args.names_only {
        for package in &packages {
            println!("{}", package.name);
        }
        return Ok(());
    }

    match args.major {
        Some(major) => output::header(&format!("Packages available for TYPO3 {major}")),
        None => output::header("Package catalog"),
    }

    let mut table = Table::new();
    table.headers(["Package", "Versions", "Description"]);
    for package in &packages {
        let versions = package
            .versions
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        table.row([package.name, versions.as_str(), package.description]);
    }

    if table.is_empty() {
        output::warning("no package matches");
    } else {
        table.print();
    }
    Ok(())
}
