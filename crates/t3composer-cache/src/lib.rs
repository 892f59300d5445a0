//! Tag-aware cache invalidation for the TYPO3 Composer helper.
//!
//! Pages rendered from major version and release data are cached under tags.
//! Whenever release data changes, [`CacheService`] emits the tags to drop:
//!
//! - `major-version-<v>`, `major-version`, `requirements-<v>`, `releases-<v>`
//!   and `release` when a whole major version changed
//! - `releases-<v>` and `release` when only its releases changed
//!
//! The backend sits behind the [`TagAwareCache`] trait. [`TaggedCache`] is an
//! in-memory implementation built on [moka](https://crates.io/crates/moka),
//! [`RecordingCache`] only remembers what it was asked to invalidate.
//!
//! ## Example
//!
//! ```
//! use t3composer_cache::{CacheService, TaggedCache, tags};
//!
//! # fn main() -> t3composer_core::Result<()> {
//! let cache = TaggedCache::with_defaults();
//! cache.insert("form", &b"<form/>"[..], [tags::MAJOR_VERSION, tags::RELEASE]);
//!
//! CacheService::new(&cache).purge_major_version("12")?;
//! assert!(cache.get("form").is_none());
//! # Ok(())
//! # }
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

mod config;
mod recording;
mod service;
mod stats;
mod tagged;
pub mod tags;

pub use config::{CacheConfig, CacheConfigBuilder};
pub use recording::RecordingCache;
pub use service::CacheService;
pub use stats::{CacheStats, CacheStatsSnapshot};
pub use tagged::{TaggedCache, TaggedEntry};

use t3composer_core::Result;

/// A cache backend able to drop every entry carrying one of a set of tags.
pub trait TagAwareCache {
    /// Invalidate all entries tagged with any of `tags`.
    ///
    /// Returns whether the backend accepted the invalidation.
    fn invalidate_tags(&self, tags: &[String]) -> Result<bool>;
}

impl<T: TagAwareCache + ?Sized> TagAwareCache for &T {
    fn invalidate_tags(&self, tags: &[String]) -> Result<bool> {
        (**self).invalidate_tags(tags)
    }
}

impl<T: TagAwareCache + ?Sized> TagAwareCache for std::sync::Arc<T> {
    fn invalidate_tags(&self, tags: &[String]) -> Result<bool> {
        (**self).invalidate_tags(tags)
    }
}
