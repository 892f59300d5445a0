//! Configuration lookup and loading.
//!
//! The first existing file wins, in this order:
//!
//! 1. the path passed on the command line
//! 2. `T3COMPOSER_CONFIG`
//! 3. `t3composer.json` in the working directory
//! 4. `config.json` in the user configuration directory
//!
//! Without any file the built-in release data is used. Cache overrides from
//! the environment are applied last.

use crate::env::EnvConfig;
use crate::error::{ConfigError, Result};
use crate::types::{DEFAULT_CONFIG, HelperConfig};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Project-local configuration file name.
pub const PROJECT_CONFIG_FILE: &str = "t3composer.json";

/// File name inside the user configuration directory.
pub const USER_CONFIG_FILE: &str = "config.json";

/// Where a loaded configuration came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ConfigSource {
    /// Built-in defaults.
    Defaults = 0,
    /// User configuration directory.
    User = 1,
    /// Project-local configuration.
    Project = 2,
    /// Environment variables.
    Environment = 3,
    /// CLI arguments.
    Cli = 4,
}

impl ConfigSource {
    /// Get description for display.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Defaults => "built-in defaults",
            Self::User => "user configuration",
            Self::Project => "project configuration",
            Self::Environment => "environment variables",
            Self::Cli => "command-line arguments",
        }
    }
}

/// A configuration together with its origin.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    /// The configuration.
    pub config: HelperConfig,
    /// Where it was read from.
    pub source: ConfigSource,
    /// File it was read from, if any.
    pub path: Option<PathBuf>,
}

/// Configuration loader.
#[derive(Debug)]
pub struct ConfigLoader {
    working_dir: PathBuf,
    explicit: Option<PathBuf>,
    user_config_dir: Option<PathBuf>,
    env: EnvConfig,
}

impl ConfigLoader {
    /// Create a loader rooted at `working_dir`, reading the process environment.
    #[must_use]
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
            explicit: None,
            user_config_dir: default_user_config_dir(),
            env: EnvConfig::from_env(),
        }
    }

    /// Use an explicit configuration file.
    #[must_use]
    pub fn with_path(mut self, path: Option<PathBuf>) -> Self {
        self.explicit = path;
        self
    }

    /// Replace the environment values.
    #[must_use]
    pub fn with_env(mut self, env: EnvConfig) -> Self {
        self.env = env;
        self
    }

    /// Replace the user configuration directory.
    #[must_use]
    pub fn with_user_config_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.user_config_dir = dir;
        self
    }

    /// Path of the project-local configuration file.
    #[must_use]
    pub fn project_config_path(&self) -> PathBuf {
        self.working_dir.join(PROJECT_CONFIG_FILE)
    }

    /// Path of the user configuration file, if a home directory is known.
    #[must_use]
    pub fn user_config_path(&self) -> Option<PathBuf> {
        self.user_config_dir
            .as_ref()
            .map(|dir| dir.join(USER_CONFIG_FILE))
    }

    /// Find the file to load.
    ///
    /// Paths given explicitly or through the environment are returned even
    /// when missing so that loading reports them.
    #[must_use]
    pub fn locate(&self) -> Option<(PathBuf, ConfigSource)> {
        if let Some(path) = &self.explicit {
            return Some((path.clone(), ConfigSource::Cli));
        }
        if let Some(path) = &self.env.config {
            return Some((path.clone(), ConfigSource::Environment));
        }

        let project = self.project_config_path();
        if project.is_file() {
            return Some((project, ConfigSource::Project));
        }

        self.user_config_path()
            .filter(|path| path.is_file())
            .map(|path| (path, ConfigSource::User))
    }

    /// Load the configuration and apply environment overrides.
    ///
    /// # Errors
    /// Returns error if a located file cannot be read or parsed, or if an
    /// environment override is invalid.
    pub fn load(&self) -> Result<LoadedConfig> {
        let mut loaded = match self.locate() {
            Some((path, source)) => {
                let config = load_file(&path)?;
                info!(path = %path.display(), source = source.description(), "loaded configuration");
                LoadedConfig {
                    config,
                    source,
                    path: Some(path),
                }
            }
            None => {
                debug!("no configuration file found, using built-in defaults");
                LoadedConfig {
                    config: defaults()?,
                    source: ConfigSource::Defaults,
                    path: None,
                }
            }
        };

        self.env.apply_to(&mut loaded.config)?;
        Ok(loaded)
    }
}

/// Load a configuration file.
///
/// # Errors
/// Returns error if the file cannot be read or is not valid configuration.
pub fn load_file(path: &Path) -> Result<HelperConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
    sonic_rs::from_str(&content).map_err(|e| ConfigError::json(path, &e))
}

/// The built-in configuration.
///
/// # Errors
/// Returns error if the embedded defaults are malformed.
pub fn defaults() -> Result<HelperConfig> {
    sonic_rs::from_str(DEFAULT_CONFIG).map_err(|e| ConfigError::json("<built-in>", &e))
}

fn default_user_config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("org", "TYPO3", "t3composer")
        .map(|dirs| dirs.config_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};
    use tempfile::TempDir;

    const PROJECT: &str = r#"{"major-versions":[{"version":"12","lts":"12.4","releases":["12.4.3"]}]}"#;
    const USER: &str = r#"{"major-versions":[{"version":"11","lts":"11.5","releases":["11.5.30"]}]}"#;

    #[fixture]
    fn dirs() -> (TempDir, TempDir) {
        (TempDir::new().unwrap(), TempDir::new().unwrap())
    }

    fn loader(work: &TempDir, user: &TempDir) -> ConfigLoader {
        ConfigLoader::new(work.path())
            .with_env(EnvConfig::default())
            .with_user_config_dir(Some(user.path().to_path_buf()))
    }

    #[rstest]
    fn falls_back_to_defaults(dirs: (TempDir, TempDir)) {
        let loaded = loader(&dirs.0, &dirs.1).load().unwrap();
        assert_eq!(loaded.source, ConfigSource::Defaults);
        assert!(loaded.path.is_none());
        assert!(!loaded.config.major_versions.is_empty());
    }

    #[rstest]
    fn user_config_is_used(dirs: (TempDir, TempDir)) {
        std::fs::write(dirs.1.path().join(USER_CONFIG_FILE), USER).unwrap();

        let loaded = loader(&dirs.0, &dirs.1).load().unwrap();
        assert_eq!(loaded.source, ConfigSource::User);
        assert!(loaded.config.major_version("11").is_some());
    }

    #[rstest]
    fn project_config_wins_over_user(dirs: (TempDir, TempDir)) {
        std::fs::write(dirs.0.path().join(PROJECT_CONFIG_FILE), PROJECT).unwrap();
        std::fs::write(dirs.1.path().join(USER_CONFIG_FILE), USER).unwrap();

        let loaded = loader(&dirs.0, &dirs.1).load().unwrap();
        assert_eq!(loaded.source, ConfigSource::Project);
        assert!(loaded.config.major_version("12").is_some());
    }

    #[rstest]
    fn environment_path_wins_over_project(dirs: (TempDir, TempDir)) {
        std::fs::write(dirs.0.path().join(PROJECT_CONFIG_FILE), PROJECT).unwrap();
        let env_path = dirs.1.path().join("elsewhere.json");
        std::fs::write(&env_path, USER).unwrap();

        let loaded = loader(&dirs.0, &dirs.1)
            .with_env(EnvConfig {
                config: Some(env_path.clone()),
                ..EnvConfig::default()
            })
            .load()
            .unwrap();
        assert_eq!(loaded.source, ConfigSource::Environment);
        assert_eq!(loaded.path, Some(env_path));
    }

    #[rstest]
    fn explicit_path_wins_over_environment(dirs: (TempDir, TempDir)) {
        let explicit = dirs.0.path().join("release-data.json");
        std::fs::write(&explicit, PROJECT).unwrap();
        let env_path = dirs.1.path().join("elsewhere.json");
        std::fs::write(&env_path, USER).unwrap();

        let loaded = loader(&dirs.0, &dirs.1)
            .with_env(EnvConfig {
                config: Some(env_path),
                ..EnvConfig::default()
            })
            .with_path(Some(explicit.clone()))
            .load()
            .unwrap();
        assert_eq!(loaded.source, ConfigSource::Cli);
        assert_eq!(loaded.path, Some(explicit));
    }

    #[rstest]
    fn explicit_path_must_exist(dirs: (TempDir, TempDir)) {
        std::fs::write(dirs.0.path().join(PROJECT_CONFIG_FILE), PROJECT).unwrap();

        let err = loader(&dirs.0, &dirs.1)
            .with_path(Some(dirs.0.path().join("missing.json")))
            .load()
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[rstest]
    fn invalid_json_reports_location(dirs: (TempDir, TempDir)) {
        let path = dirs.0.path().join(PROJECT_CONFIG_FILE);
        std::fs::write(&path, "{\"major-versions\": [}").unwrap();

        let err = loader(&dirs.0, &dirs.1).load().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidJson { .. }), "{err:?}");
    }

    #[rstest]
    fn environment_overrides_cache(dirs: (TempDir, TempDir)) {
        let loaded = loader(&dirs.0, &dirs.1)
            .with_env(EnvConfig {
                cache_ttl: Some("1h".to_string()),
                cache_capacity: Some("42".to_string()),
                ..EnvConfig::default()
            })
            .load()
            .unwrap();
        assert_eq!(loaded.config.cache.ttl, 3600);
        assert_eq!(loaded.config.cache.capacity, 42);
    }
}
