//! Configuration file types.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use t3composer_cache::CacheConfig;
use t3composer_core::{InMemoryMajorVersions, MajorVersion};

/// Built-in release data used when no configuration file is found.
pub const DEFAULT_CONFIG: &str = include_str!("../defaults.json");

/// Top level of `t3composer.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct HelperConfig {
    /// Known TYPO3 major versions, in any order.
    pub major_versions: Vec<MajorVersionConfig>,
    /// In-memory cache settings.
    pub cache: CacheSettings,
}

impl HelperConfig {
    /// Repository over the configured major versions.
    #[must_use]
    pub fn repository(&self) -> InMemoryMajorVersions {
        InMemoryMajorVersions::new(
            self.major_versions
                .iter()
                .map(MajorVersionConfig::to_major_version)
                .collect(),
        )
    }

    /// Look up a configured major version.
    #[must_use]
    pub fn major_version(&self, version: &str) -> Option<&MajorVersionConfig> {
        self.major_versions.iter().find(|m| m.version == version)
    }
}

/// One TYPO3 major version and its releases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MajorVersionConfig {
    /// Version of the line, e.g. `"12"` or `"6.2"`.
    pub version: String,
    /// Display title. Defaults to `TYPO3 <version>`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// LTS designation, e.g. `"12.4"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lts: Option<String>,
    /// Whether the line can be installed with Composer.
    #[serde(default = "default_true")]
    pub composer: bool,
    /// Published release versions.
    #[serde(default)]
    pub releases: Vec<String>,
}

const fn default_true() -> bool {
    true
}

impl MajorVersionConfig {
    /// Create a Composer-supported major version without releases.
    #[must_use]
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            title: None,
            lts: None,
            composer: true,
            releases: Vec::new(),
        }
    }

    /// Title shown in the version selector.
    #[must_use]
    pub fn display_title(&self) -> String {
        self.title
            .clone()
            .unwrap_or_else(|| format!("TYPO3 {}", self.version))
    }

    /// Convert into the core model.
    #[must_use]
    pub fn to_major_version(&self) -> MajorVersion {
        let mut major = MajorVersion::new(self.version.as_str())
            .with_title(self.display_title())
            .with_composer_support(self.composer);
        if let Some(lts) = &self.lts {
            major = major.with_lts(lts.as_str());
        }
        self.releases
            .iter()
            .fold(major, |major, release| major.with_release(release.as_str()))
    }
}

/// Settings of the in-memory tagged cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheSettings {
    /// Time-to-live in seconds. Zero disables expiry.
    pub ttl: u64,
    /// Maximum number of entries.
    pub capacity: u64,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            ttl: 3600,
            capacity: 10_000,
        }
    }
}

impl CacheSettings {
    /// Cache configuration for [`t3composer_cache::TaggedCache`].
    #[must_use]
    pub fn to_cache_config(self) -> CacheConfig {
        CacheConfig::builder()
            .capacity(self.capacity)
            .ttl(Duration::from_secs(self.ttl))
            .build()
    }
}
