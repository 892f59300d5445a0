//! Major versions, releases and the repository seam they are read through.

use crate::version::{ReleaseVersion, leading_major};
use serde::Serialize;
use tracing::debug;

/// A concrete release within a major version line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Release {
    version: String,
}

impl Release {
    /// Create a release from its version string.
    #[must_use]
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
        }
    }

    /// Version string as published.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Parsed `major.minor.patch`, if the version has that shape.
    #[must_use]
    pub fn parsed(&self) -> Option<ReleaseVersion> {
        ReleaseVersion::parse(&self.version)
    }
}

/// A TYPO3 release line such as "TYPO3 12".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MajorVersion {
    version: String,
    title: String,
    lts: Option<String>,
    composer_supported: bool,
    releases: Vec<Release>,
}

impl MajorVersion {
    /// Create a Composer-supported major version without releases.
    #[must_use]
    pub fn new(version: impl Into<String>) -> Self {
        let version = version.into();
        Self {
            title: format!("TYPO3 {version}"),
            version,
            lts: None,
            composer_supported: true,
            releases: Vec::new(),
        }
    }

    /// Override the display title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Mark as long-term-support, e.g. `12.4`.
    #[must_use]
    pub fn with_lts(mut self, lts: impl Into<String>) -> Self {
        self.lts = Some(lts.into());
        self
    }

    /// Set whether the line can be installed with Composer.
    #[must_use]
    pub fn with_composer_support(mut self, supported: bool) -> Self {
        self.composer_supported = supported;
        self
    }

    /// Add a release.
    #[must_use]
    pub fn with_release(mut self, version: impl Into<String>) -> Self {
        self.releases.push(Release::new(version));
        self
    }

    /// Version string of the line, e.g. `12`.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Display title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// LTS designation, if any.
    #[must_use]
    pub fn lts(&self) -> Option<&str> {
        self.lts.as_deref()
    }

    /// Whether the line carries an LTS designation.
    #[must_use]
    pub fn is_lts(&self) -> bool {
        self.lts.is_some()
    }

    /// Whether the line can be installed with Composer.
    #[must_use]
    pub fn is_composer_supported(&self) -> bool {
        self.composer_supported
    }

    /// All known releases in insertion order.
    #[must_use]
    pub fn releases(&self) -> &[Release] {
        &self.releases
    }

    /// Highest release by `major.minor.patch`.
    ///
    /// Versions that do not parse rank below all parseable ones; on ties the
    /// release listed last wins.
    #[must_use]
    pub fn latest_release(&self) -> Option<&Release> {
        self.releases.iter().max_by_key(|r| r.parsed())
    }

    /// Leading integer of the version string.
    #[must_use]
    pub fn major_number(&self) -> Option<u32> {
        leading_major(&self.version)
    }

    fn sort_key(&self) -> Vec<u64> {
        self.version
            .split('.')
            .map_while(|part| part.parse().ok())
            .collect()
    }
}

/// Read-only access to major version data.
pub trait MajorVersionRepository {
    /// Newest LTS major version that supports Composer.
    fn find_latest_lts_composer_supported(&self) -> Option<&MajorVersion>;

    /// All Composer-supported major versions, newest first.
    fn find_all_composer_supported(&self) -> Vec<&MajorVersion>;
}

/// Repository over a fixed list of major versions.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMajorVersions {
    majors: Vec<MajorVersion>,
}

impl InMemoryMajorVersions {
    /// Create from major versions in any order.
    #[must_use]
    pub fn new(mut majors: Vec<MajorVersion>) -> Self {
        majors.sort_by_key(|m| std::cmp::Reverse(m.sort_key()));
        Self { majors }
    }

    /// Look up a major version by its version string.
    #[must_use]
    pub fn get(&self, version: &str) -> Option<&MajorVersion> {
        self.majors.iter().find(|m| m.version == version)
    }

    /// All major versions, newest first.
    #[must_use]
    pub fn all(&self) -> &[MajorVersion] {
        &self.majors
    }

    /// Number of major versions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.majors.len()
    }

    /// Whether no major version is known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.majors.is_empty()
    }
}

impl MajorVersionRepository for InMemoryMajorVersions {
    fn find_latest_lts_composer_supported(&self) -> Option<&MajorVersion> {
        let found = self
            .majors
            .iter()
            .find(|m| m.is_lts() && m.is_composer_supported());
        debug!(major = ?found.map(MajorVersion::version), "latest LTS with Composer support");
        found
    }

    fn find_all_composer_supported(&self) -> Vec<&MajorVersion> {
        self.majors
            .iter()
            .filter(|m| m.is_composer_supported())
            .collect()
    }
}
