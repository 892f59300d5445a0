//! Purges cached pages when major version or release data changes.

use crate::{TagAwareCache, tags};
use t3composer_core::Result;
use tracing::{info, warn};

/// Emits tag invalidations for changed major versions.
///
/// Each purge is a single call to the backend. Nothing is retried.
#[derive(Debug, Clone)]
pub struct CacheService<C> {
    cache: C,
}

impl<C: TagAwareCache> CacheService<C> {
    /// Create a service over a tag-aware backend.
    #[must_use]
    pub fn new(cache: C) -> Self {
        Self { cache }
    }

    /// The underlying backend.
    #[must_use]
    pub fn cache(&self) -> &C {
        &self.cache
    }

    /// Drop everything rendered from a major version.
    pub fn purge_major_version(&self, major_version: &str) -> Result<Vec<String>> {
        self.purge(major_version, tags::for_major_version(major_version))
    }

    /// Drop the release lists of a major version.
    pub fn purge_major_version_releases(&self, major_version: &str) -> Result<Vec<String>> {
        self.purge(major_version, tags::for_major_version_releases(major_version))
    }

    fn purge(&self, major_version: &str, tags: Vec<String>) -> Result<Vec<String>> {
        match self.cache.invalidate_tags(&tags) {
            Ok(true) => info!(major_version, tags = ?tags, "purged cache tags"),
            Ok(false) => warn!(major_version, tags = ?tags, "cache backend declined invalidation"),
            Err(err) => {
                warn!(major_version, error = %err, "cache purge failed");
                return Err(err);
            }
        }
        Ok(tags)
    }
}
