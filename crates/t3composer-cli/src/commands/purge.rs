//! Purge command implementation.
//!
//! Fills the tagged cache with the data the helper serves per major version,
//! then runs the invalidation for one major version against it and reports
//! the purged tags and entries.

use crate::context::Context;
use crate::output::{self, json};
use anyhow::Result;
use clap::Args;
use serde::Serialize;
use t3composer_cache::{CacheService, tags};
use t3composer_core::{FormDefinition, MajorVersion, catalog, to_json};
use tracing::{debug, info};

/// Arguments for the purge command.
#[derive(Args, Debug, Clone)]
pub struct PurgeArgs {
    /// Major version whose data changed (e.g. 12 or 6.2)
    #[arg(value_name = "MAJOR")]
    pub major: String,

    /// Only purge the release lists
    #[arg(long)]
    pub releases_only: bool,
}

#[derive(Debug, Serialize)]
struct PurgeOutput<'a> {
    major_version: &'a str,
    tags: &'a [String],
    invalidated_entries: u64,
    remaining_entries: u64,
}

/// Run the purge command.
pub fn run(args: &PurgeArgs, ctx: &Context) -> Result<()> {
    info!(major = %args.major, releases_only = args.releases_only, "running purge command");

    if ctx.loaded.config.major_version(&args.major).is_none() {
        output::warning(&format!("{} is not a configured major version", args.major));
    }

    warm(ctx)?;

    let service = CacheService::new(&ctx.cache);
    let tags = if args.releases_only {
        service.purge_major_version_releases(&args.major)?
    } else {
        service.purge_major_version(&args.major)?
    };
    ctx.cache.run_pending_tasks();

    let invalidated_entries = ctx.cache.stats().invalidated_entries;
    let remaining_entries = ctx.cache.len();

    if json::is_enabled() {
        json::print_success(&PurgeOutput {
            major_version: &args.major,
            tags: &tags,
            invalidated_entries,
            remaining_entries,
        });
        return Ok(());
    }

    for tag in &tags {
        println!("{tag}");
    }
    output::success(&format!(
        "dropped {invalidated_entries} cached entries, {remaining_entries} remain"
    ));
    Ok(())
}

/// Cache the version list, the form and the per-major data under their tags.
fn warm(ctx: &Context) -> Result<()> {
    let cache = &ctx.cache;
    let majors = ctx.repository().all();

    let versions: Vec<&str> = majors.iter().map(MajorVersion::version).collect();
    cache.insert("major-versions", to_json(&versions)?, [tags::MAJOR_VERSION]);

    match ctx.service.build_form(FormDefinition::default()) {
        Ok(form) => cache.insert("form", to_json(&form)?, [tags::MAJOR_VERSION, tags::RELEASE]),
        Err(e) => debug!(error = %e, "form not cached"),
    }

    for major in majors {
        let version = major.version();
        cache.insert(
            format!("major/{version}"),
            to_json(major)?,
            [tags::major_version(version)],
        );
        cache.insert(
            format!("releases/{version}"),
            to_json(major.releases())?,
            [tags::releases(version), tags::RELEASE.to_string()],
        );
        let packages: Vec<&str> = major
            .major_number()
            .map(|n| catalog::packages_for_major(n).map(|p| p.name).collect())
            .unwrap_or_default();
        cache.insert(
            format!("requirements/{version}"),
            to_json(&packages)?,
            [tags::requirements(version)],
        );
    }

    cache.run_pending_tasks();
    debug!(entries = cache.len(), "cache warmed");
    Ok(())
}
