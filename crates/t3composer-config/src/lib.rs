//! Configuration for the TYPO3 Composer helper.
//!
//! Release data and cache settings are read from a JSON file:
//!
//! ```json
//! {
//!   "major-versions": [
//!     {"version": "12", "title": "TYPO3 12", "lts": "12.4", "composer": true,
//!      "releases": ["12.4.2", "12.4.3"]}
//!   ],
//!   "cache": {"ttl": 3600, "capacity": 10000}
//! }
//! ```
//!
//! See [`ConfigLoader`] for the lookup order and [`Validator`] for the checks
//! run by `t3composer validate`.

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod env;
pub mod error;
pub mod loader;
pub mod types;
pub mod validate;

pub use env::{EnvConfig, HelperEnvVar, parse_duration_secs};
pub use error::{ConfigError, Result};
pub use loader::{ConfigLoader, ConfigSource, LoadedConfig, defaults, load_file};
pub use types::{CacheSettings, DEFAULT_CONFIG, HelperConfig, MajorVersionConfig};
pub use validate::{Severity, ValidationIssue, ValidationResult, Validator};
