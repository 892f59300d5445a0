//! Form command implementation.

use crate::context::Context;
use crate::output::{self, json, table::Table};
use anyhow::Result;
use clap::Args;
use console::style;
use t3composer_core::{FormDefinition, VERSION_FIELD};
use tracing::info;

/// Arguments for the form command.
#[derive(Args, Debug, Clone)]
pub struct FormArgs {
    /// Only print the version selector
    #[arg(long)]
    pub versions_only: bool,
}

/// Run the form command.
pub fn run(args: &FormArgs, ctx: &Context) -> Result<()> {
    info!("running form command");

    let form = ctx.service.build_form(FormDefinition::default())?;

    if json::is_enabled() {
        if args.versions_only {
            json::print_success(&form.choice(VERSION_FIELD));
        } else {
            json::print_success(&form);
        }
        return Ok(());
    }

    output::header("Composer helper form");

    if let Some(version) = form.choice(VERSION_FIELD) {
        output::section(&format!("{} ({})", version.label, version.name));
        println!("default: {}", style(&version.data).green());
        for group in version.choices.groups() {
            println!();
            println!("{}", style(&group.label).bold());
            let mut table = Table::new();
            for choice in &group.choices {
                let value = if choice.value.is_empty() {
                    "\"\"".to_string()
                } else {
                    choice.value.clone()
                };
                table.row([choice.label.clone(), value]);
            }
            table.print();
        }
    }

    if args.versions_only {
        return Ok(());
    }

    println!();
    output::section("Packages");
    let mut table = Table::new();
    table.headers(["Field", "Package", "Description"]);
    for checkbox in form.checkboxes() {
        table.row([
            checkbox.name.as_str(),
            checkbox.value.as_str(),
            checkbox.help.as_str(),
        ]);
    }
    table.print();

    Ok(())
}
