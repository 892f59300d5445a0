//! Removes packages a submitted TYPO3 version cannot install.

use crate::assembler::VERSION_FIELD;
use crate::catalog::PACKAGES;
use crate::release::MajorVersionRepository;
use crate::submission::{FieldValue, Submission};
use crate::version::{caret_major, leading_major};
use crate::{Error, Result};
use tracing::{debug, warn};

/// Filters submissions against the catalog's supported major versions.
#[derive(Debug)]
pub struct PackageFilter<'r, R: ?Sized> {
    repository: &'r R,
}

impl<'r, R> PackageFilter<'r, R>
where
    R: MajorVersionRepository + ?Sized,
{
    /// Create a filter resolving fallbacks through `repository`.
    #[must_use]
    pub fn new(repository: &'r R) -> Self {
        Self { repository }
    }

    /// Major version the submission targets.
    ///
    /// A caret constraint (`^11`, `^12.4`) names it directly. Anything else
    /// falls back to the newest Composer-supported release.
    pub fn resolve_major(&self, submission: &Submission) -> Result<u32> {
        if let Some(major) = submission
            .get(VERSION_FIELD)
            .and_then(FieldValue::as_text)
            .and_then(caret_major)
        {
            debug!(major, "major from submitted constraint");
            return Ok(major);
        }

        let majors = self.repository.find_all_composer_supported();
        let release = majors
            .first()
            .and_then(|m| m.latest_release())
            .ok_or_else(Error::no_composer_release)?;

        let major = leading_major(release.version()).unwrap_or_else(|| {
            warn!(
                release = release.version(),
                "release has no leading major number, filtering for 0"
            );
            0
        });
        debug!(major, release = release.version(), "major from latest release");
        Ok(major)
    }

    /// Drop every package that does not exist for the resolved major.
    ///
    /// Packages are matched by Composer name and by form field identifier.
    /// All other fields are kept in their original order.
    pub fn clean(&self, mut submission: Submission) -> Result<Submission> {
        let major = self.resolve_major(&submission)?;
        let mut removed = 0usize;

        for package in PACKAGES.iter().filter(|p| !p.supports(major)) {
            if submission.remove(package.name).is_some() {
                removed += 1;
            }
            if submission.remove(&package.field_name()).is_some() {
                removed += 1;
            }
        }

        debug!(major, removed, kept = submission.len(), "cleaned submission");
        Ok(submission)
    }
}
