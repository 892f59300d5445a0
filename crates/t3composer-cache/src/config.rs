//! Tagged cache configuration.

use std::time::Duration;

/// Default maximum number of entries.
pub const DEFAULT_CAPACITY: u64 = 10_000;

/// Default time-to-live (one hour).
pub const DEFAULT_TTL: Duration = Duration::from_secs(60 * 60);

/// Configuration for [`TaggedCache`](crate::TaggedCache).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    /// Maximum number of entries before eviction.
    pub capacity: u64,
    /// Time-to-live per entry. `None` keeps entries until evicted.
    pub ttl: Option<Duration>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            ttl: Some(DEFAULT_TTL),
        }
    }
}

impl CacheConfig {
    /// Create a builder for custom configuration.
    #[must_use]
    pub fn builder() -> CacheConfigBuilder {
        CacheConfigBuilder::default()
    }
}

/// Builder for [`CacheConfig`].
#[derive(Debug, Default)]
pub struct CacheConfigBuilder {
    config: CacheConfig,
}

impl CacheConfigBuilder {
    /// Set the maximum number of entries.
    #[must_use]
    pub fn capacity(mut self, capacity: u64) -> Self {
        self.config.capacity = capacity;
        self
    }

    /// Set the time-to-live. Zero disables expiry.
    #[must_use]
    pub fn ttl(mut self, ttl: Duration) -> Self {
        self.config.ttl = (!ttl.is_zero()).then_some(ttl);
        self
    }

    /// Keep entries until evicted or invalidated.
    #[must_use]
    pub fn no_ttl(mut self) -> Self {
        self.config.ttl = None;
        self
    }

    /// Build the configuration.
    #[must_use]
    pub fn build(self) -> CacheConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = CacheConfig::default();
        assert_eq!(config.capacity, 10_000);
        assert_eq!(config.ttl, Some(Duration::from_secs(3600)));
    }

    #[test]
    fn zero_ttl_disables_expiry() {
        let config = CacheConfig::builder()
            .capacity(5)
            .ttl(Duration::ZERO)
            .build();
        assert_eq!(config.capacity, 5);
        assert_eq!(config.ttl, None);
    }
}
