//! Cache statistics tracking.

use std::sync::atomic::{AtomicU64, Ordering};

/// Atomic cache statistics.
#[derive(Debug, Default)]
pub struct CacheStats {
    /// Number of cache hits.
    hits: AtomicU64,
    /// Number of cache misses.
    misses: AtomicU64,
    /// Number of inserted entries.
    insertions: AtomicU64,
    /// Entries dropped by capacity or TTL.
    evictions: AtomicU64,
    /// Number of `invalidate_tags` calls.
    invalidations: AtomicU64,
    /// Entries dropped by tag invalidation.
    invalidated_entries: AtomicU64,
}

impl CacheStats {
    /// Create new stats tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a cache hit.
    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a cache miss.
    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    /// Record an insertion.
    pub fn record_insertion(&self) {
        self.insertions.fetch_add(1, Ordering::Relaxed);
    }

    /// Record an eviction.
    pub fn record_eviction(&self) {
        self.evictions.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a tag invalidation that dropped `entries` entries.
    pub fn record_invalidation(&self, entries: u64) {
        self.invalidations.fetch_add(1, Ordering::Relaxed);
        self.invalidated_entries.fetch_add(entries, Ordering::Relaxed);
    }

    /// Get a snapshot of current statistics.
    #[must_use]
    pub fn snapshot(&self) -> CacheStatsSnapshot {
        CacheStatsSnapshot {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            insertions: self.insertions.load(Ordering::Relaxed),
            evictions: self.evictions.load(Ordering::Relaxed),
            invalidations: self.invalidations.load(Ordering::Relaxed),
            invalidated_entries: self.invalidated_entries.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time copy of [`CacheStats`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStatsSnapshot {
    /// Number of cache hits.
    pub hits: u64,
    /// Number of cache misses.
    pub misses: u64,
    /// Number of inserted entries.
    pub insertions: u64,
    /// Entries dropped by capacity or TTL.
    pub evictions: u64,
    /// Number of `invalidate_tags` calls.
    pub invalidations: u64,
    /// Entries dropped by tag invalidation.
    pub invalidated_entries: u64,
}

impl CacheStatsSnapshot {
    /// Hit rate as a fraction between 0 and 1.
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}
