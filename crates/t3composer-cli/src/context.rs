//! Shared state built once per invocation.

use std::path::PathBuf;
use t3composer_cache::TaggedCache;
use t3composer_config::{ConfigError, ConfigLoader, LoadedConfig};
use t3composer_core::{ComposerPackagesService, InMemoryMajorVersions};
use tracing::debug;

/// Global flags that shape the context.
#[derive(Debug, Clone, Default)]
pub struct ContextArgs {
    /// Explicit configuration file.
    pub config: Option<PathBuf>,
    /// Directory searched for `t3composer.json`.
    pub working_dir: Option<PathBuf>,
}

/// Loaded configuration and the services built from it.
#[derive(Debug)]
pub struct Context {
    /// Configuration with its origin.
    pub loaded: LoadedConfig,
    /// Helper service over the configured release data.
    pub service: ComposerPackagesService<InMemoryMajorVersions>,
    /// Tagged cache sized by the `cache` settings.
    pub cache: TaggedCache,
}

impl Context {
    /// Load configuration and build services.
    pub fn new(args: &ContextArgs) -> Result<Self, ConfigError> {
        let working_dir = match &args.working_dir {
            Some(dir) => dir.clone(),
            None => std::env::current_dir().map_err(|e| ConfigError::io(".", e))?,
        };

        let loaded = ConfigLoader::new(working_dir)
            .with_path(args.config.clone())
            .load()?;
        debug!(
            source = loaded.source.description(),
            majors = loaded.config.major_versions.len(),
            "configuration ready"
        );

        let service = ComposerPackagesService::new(loaded.config.repository());
        let cache = TaggedCache::new(loaded.config.cache.to_cache_config());
        Ok(Self {
            loaded,
            service,
            cache,
        })
    }

    /// Configured release data.
    pub fn repository(&self) -> &InMemoryMajorVersions {
        self.service.repository()
    }
}
