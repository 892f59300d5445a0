//! Environment variable configuration support.

use crate::error::{ConfigError, Result};
use crate::types::HelperConfig;
use std::path::PathBuf;
use tracing::debug;

/// Environment variables read by the helper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HelperEnvVar {
    /// `T3COMPOSER_CONFIG` - path to the configuration file.
    Config,
    /// `T3COMPOSER_CACHE_TTL` - cache time-to-live (`300`, `5m`, `1h`).
    CacheTtl,
    /// `T3COMPOSER_CACHE_CAPACITY` - maximum cache entries.
    CacheCapacity,
}

impl HelperEnvVar {
    /// Get the environment variable name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Config => "T3COMPOSER_CONFIG",
            Self::CacheTtl => "T3COMPOSER_CACHE_TTL",
            Self::CacheCapacity => "T3COMPOSER_CACHE_CAPACITY",
        }
    }

    /// Get the value from environment.
    #[must_use]
    pub fn get(self) -> Option<String> {
        std::env::var(self.as_str()).ok()
    }
}

/// Values read from the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvConfig {
    /// Configuration file path.
    pub config: Option<PathBuf>,
    /// Raw cache TTL.
    pub cache_ttl: Option<String>,
    /// Raw cache capacity.
    pub cache_capacity: Option<String>,
}

impl EnvConfig {
    /// Read configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(HelperEnvVar::get)
    }

    /// Read configuration through a custom lookup.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(HelperEnvVar) -> Option<String>) -> Self {
        let non_empty = |var| lookup(var).filter(|v: &String| !v.trim().is_empty());
        Self {
            config: non_empty(HelperEnvVar::Config).map(PathBuf::from),
            cache_ttl: non_empty(HelperEnvVar::CacheTtl),
            cache_capacity: non_empty(HelperEnvVar::CacheCapacity),
        }
    }

    /// Apply cache overrides to a loaded configuration.
    ///
    /// # Errors
    /// Returns error if an override cannot be parsed.
    pub fn apply_to(&self, config: &mut HelperConfig) -> Result<()> {
        if let Some(ttl) = &self.cache_ttl {
            config.cache.ttl = parse_duration_secs(ttl)
                .map_err(|e| ConfigError::env(HelperEnvVar::CacheTtl.as_str(), e.to_string()))?;
            debug!(ttl = config.cache.ttl, "cache TTL from environment");
        }
        if let Some(capacity) = &self.cache_capacity {
            config.cache.capacity = capacity.trim().parse().map_err(|_| {
                ConfigError::env(
                    HelperEnvVar::CacheCapacity.as_str(),
                    format!("expected a number of entries, got '{capacity}'"),
                )
            })?;
            debug!(capacity = config.cache.capacity, "cache capacity from environment");
        }
        Ok(())
    }
}

/// Parse duration string (e.g., "300", "5m", "1h").
///
/// # Errors
/// Returns error if the duration string is invalid.
pub fn parse_duration_secs(s: &str) -> Result<u64> {
    let s = s.trim();

    if let Ok(secs) = s.parse::<u64>() {
        return Ok(secs);
    }

    let num_end = s.chars().take_while(char::is_ascii_digit).count();
    if num_end == 0 {
        return Err(ConfigError::invalid_value(
            "duration",
            "invalid duration",
            "use format like '300' or '5m'",
        ));
    }

    let (num_str, unit) = s.split_at(num_end);
    let num: u64 = num_str.parse().map_err(|_| {
        ConfigError::invalid_value("duration", "invalid number", "use a valid number")
    })?;

    let unit = unit.trim().to_lowercase();
    let multiplier: u64 = match unit.as_str() {
        "s" | "sec" | "secs" | "second" | "seconds" => 1,
        "m" | "min" | "mins" | "minute" | "minutes" => 60,
        "h" | "hr" | "hrs" | "hour" | "hours" => 3600,
        "d" | "day" | "days" => 86400,
        _ => {
            return Err(ConfigError::invalid_value(
                "duration",
                format!("unknown unit: {unit}"),
                "use s, m, h, or d",
            ));
        }
    };

    Ok(num.saturating_mul(multiplier))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn lookup(pairs: &'static [(HelperEnvVar, &'static str)]) -> EnvConfig {
        EnvConfig::from_lookup(|var| {
            pairs
                .iter()
                .find(|(v, _)| *v == var)
                .map(|(_, value)| (*value).to_string())
        })
    }

    #[test_case("300", 300)]
    #[test_case("0", 0)]
    #[test_case("5m", 300)]
    #[test_case("2 hours", 7200)]
    #[test_case("1d", 86400)]
    fn parse_duration(input: &str, expected: u64) {
        assert_eq!(parse_duration_secs(input).unwrap(), expected);
    }

    #[test_case("")]
    #[test_case("soon")]
    #[test_case("5 fortnights")]
    fn parse_duration_invalid(input: &str) {
        assert!(parse_duration_secs(input).is_err());
    }

    #[test]
    fn empty_values_are_ignored() {
        let env = lookup(&[(HelperEnvVar::Config, " "), (HelperEnvVar::CacheTtl, "")]);
        assert_eq!(env, EnvConfig::default());
    }

    #[test]
    fn applies_overrides() {
        let env = lookup(&[
            (HelperEnvVar::CacheTtl, "10m"),
            (HelperEnvVar::CacheCapacity, "250"),
        ]);
        let mut config = HelperConfig::default();
        env.apply_to(&mut config).unwrap();
        assert_eq!(config.cache.ttl, 600);
        assert_eq!(config.cache.capacity, 250);
    }

    #[test]
    fn invalid_capacity_names_variable() {
        let env = lookup(&[(HelperEnvVar::CacheCapacity, "lots")]);
        let err = env.apply_to(&mut HelperConfig::default()).unwrap_err();
        assert_eq!(err.key(), Some("T3COMPOSER_CACHE_CAPACITY"));
    }
}
