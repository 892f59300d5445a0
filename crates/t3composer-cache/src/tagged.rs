//! In-memory tagged cache using moka.
//!
//! Entries carry a set of tags. A tag index maps each tag to the keys holding
//! it so [`TagAwareCache::invalidate_tags`] can drop them in one pass.
//!
//! Every stored entry gets a generation number and the index records it per
//! key. Unlinking only removes a key when the generations match, so a late
//! eviction notice for a replaced value never touches its successor.

use crate::config::CacheConfig;
use crate::stats::{CacheStats, CacheStatsSnapshot};
use crate::TagAwareCache;
use ahash::AHashMap;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use moka::notification::RemovalCause;
use moka::sync::Cache;
use parking_lot::RwLock;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use t3composer_core::Result;
use tracing::{debug, trace};

/// Tag to keys holding it, with the generation of the indexed entry.
type TagIndex = AHashMap<String, AHashMap<String, u64>>;

/// A cached value with its tags.
#[derive(Debug, Clone)]
pub struct TaggedEntry {
    /// Cached bytes.
    pub data: Bytes,
    /// Tags the entry is invalidated by.
    pub tags: Vec<String>,
    /// When the entry was stored.
    pub cached_at: DateTime<Utc>,
    generation: u64,
}

/// Tag-aware in-memory cache.
pub struct TaggedCache {
    cache: Cache<String, Arc<TaggedEntry>>,
    index: Arc<RwLock<TagIndex>>,
    stats: Arc<CacheStats>,
    config: CacheConfig,
    generation: AtomicU64,
}

impl std::fmt::Debug for TaggedCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaggedCache")
            .field("capacity", &self.config.capacity)
            .field("ttl", &self.config.ttl)
            .field("entry_count", &self.cache.entry_count())
            .field("tag_count", &self.index.read().len())
            .finish()
    }
}

impl TaggedCache {
    /// Create a cache from configuration.
    #[must_use]
    pub fn new(config: CacheConfig) -> Self {
        let index = Arc::new(RwLock::new(TagIndex::default()));
        let stats = Arc::new(CacheStats::new());

        let listener_index = Arc::clone(&index);
        let listener_stats = Arc::clone(&stats);
        let mut builder = Cache::builder().max_capacity(config.capacity).eviction_listener(
            move |key: Arc<String>, entry: Arc<TaggedEntry>, cause: RemovalCause| {
                // Explicit removals and replacements maintain the index themselves.
                if cause.was_evicted() {
                    listener_stats.record_eviction();
                    unlink(&mut listener_index.write(), &key, &entry);
                    trace!(key = %key, ?cause, "evicted tagged entry");
                }
            },
        );

        if let Some(ttl) = config.ttl {
            builder = builder.time_to_live(ttl);
        }

        Self {
            cache: builder.build(),
            index,
            stats,
            config,
            generation: AtomicU64::new(0),
        }
    }

    /// Create with default settings.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(CacheConfig::default())
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Get cached bytes.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<Bytes> {
        self.entry(key).map(|entry| entry.data.clone())
    }

    /// Get a cached entry with its metadata.
    #[must_use]
    pub fn entry(&self, key: &str) -> Option<Arc<TaggedEntry>> {
        let entry = self.cache.get(key);
        if entry.is_some() {
            self.stats.record_hit();
        } else {
            self.stats.record_miss();
        }
        entry
    }

    /// Store bytes under `key`, replacing any previous entry and its tags.
    pub fn insert<T>(
        &self,
        key: impl Into<String>,
        data: impl Into<Bytes>,
        tags: impl IntoIterator<Item = T>,
    ) where
        T: Into<String>,
    {
        let key = key.into();
        let mut tags: Vec<String> = tags.into_iter().map(Into::into).collect();
        tags.sort_unstable();
        tags.dedup();

        let generation = self.generation.fetch_add(1, Ordering::Relaxed);
        let previous = self.cache.get(&key);
        {
            let mut index = self.index.write();
            if let Some(previous) = &previous {
                unlink(&mut index, &key, previous);
            }
            for tag in &tags {
                index
                    .entry(tag.clone())
                    .or_default()
                    .insert(key.clone(), generation);
            }
        }

        trace!(key = %key, tags = ?tags, "caching tagged entry");
        self.stats.record_insertion();
        self.cache.insert(
            key,
            Arc::new(TaggedEntry {
                data: data.into(),
                tags,
                cached_at: Utc::now(),
                generation,
            }),
        );
    }

    /// Return the cached bytes, or compute, store and return them.
    pub fn get_or_insert_with<T, F>(
        &self,
        key: &str,
        tags: impl IntoIterator<Item = T>,
        compute: F,
    ) -> Result<Bytes>
    where
        T: Into<String>,
        F: FnOnce() -> Result<Bytes>,
    {
        if let Some(data) = self.get(key) {
            return Ok(data);
        }
        let data = compute()?;
        self.insert(key, data.clone(), tags);
        Ok(data)
    }

    /// Remove a single entry.
    pub fn remove(&self, key: &str) -> Option<Bytes> {
        let entry = self.cache.remove(key)?;
        unlink(&mut self.index.write(), key, &entry);
        Some(entry.data.clone())
    }

    /// Check if key exists.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.cache.contains_key(key)
    }

    /// Drop every entry.
    pub fn clear(&self) {
        self.cache.invalidate_all();
        self.index.write().clear();
    }

    /// Approximate number of entries.
    #[must_use]
    pub fn len(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Whether the cache holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of distinct tags currently in use.
    #[must_use]
    pub fn tag_count(&self) -> usize {
        self.index.read().len()
    }

    /// Run moka's pending maintenance (expiry, eviction, counters).
    pub fn run_pending_tasks(&self) {
        self.cache.run_pending_tasks();
    }

    /// Statistics snapshot.
    #[must_use]
    pub fn stats(&self) -> CacheStatsSnapshot {
        self.stats.snapshot()
    }
}

impl Default for TaggedCache {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl TagAwareCache for TaggedCache {
    fn invalidate_tags(&self, tags: &[String]) -> Result<bool> {
        let keys: AHashMap<String, u64> = {
            let mut index = self.index.write();
            tags.iter()
                .filter_map(|tag| index.remove(tag))
                .flatten()
                .collect()
        };

        // Keys whose indexed generation expired and was stored again under
        // other tags stay in place.
        let removed: Vec<(String, Arc<TaggedEntry>)> = keys
            .into_iter()
            .filter(|(key, generation)| {
                self.cache
                    .get(key)
                    .is_some_and(|entry| entry.generation == *generation)
            })
            .filter_map(|(key, _)| self.cache.remove(&key).map(|entry| (key, entry)))
            .collect();

        if !removed.is_empty() {
            let mut index = self.index.write();
            for (key, entry) in &removed {
                unlink(&mut index, key, entry);
            }
        }

        self.stats.record_invalidation(removed.len() as u64);
        debug!(tags = ?tags, entries = removed.len(), "invalidated tags");
        Ok(true)
    }
}

fn unlink(index: &mut TagIndex, key: &str, entry: &TaggedEntry) {
    for tag in &entry.tags {
        if let Some(keys) = index.get_mut(tag) {
            if keys.get(key) == Some(&entry.generation) {
                keys.remove(key);
            }
            if keys.is_empty() {
                index.remove(tag);
            }
        }
    }
}
