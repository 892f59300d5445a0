//! Temporary working directories for integration tests.

use anyhow::{Context, Result};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tempfile::{TempDir, tempdir};

/// A temporary working directory, removed on drop.
#[derive(Debug)]
pub struct TempProject {
    dir: TempDir,
    config_path: PathBuf,
}

impl TempProject {
    /// Create a new temporary project builder.
    #[must_use]
    #[allow(clippy::new_ret_no_self)]
    pub fn new() -> TempProjectBuilder {
        TempProjectBuilder::default()
    }

    /// Root directory of the project.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Path of `t3composer.json`, whether or not it was written.
    #[must_use]
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Write a file relative to the project root.
    pub fn write_file(&self, relative: impl AsRef<Path>, content: &str) -> Result<PathBuf> {
        let path = self.dir.path().join(relative);
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(path)
    }

    /// Write a JSON value relative to the project root.
    pub fn write_json(&self, relative: impl AsRef<Path>, value: &Value) -> Result<PathBuf> {
        let content = serde_json::to_string_pretty(value)?;
        self.write_file(relative, &content)
    }
}

/// Builder for [`TempProject`].
#[derive(Debug, Default)]
pub struct TempProjectBuilder {
    config: Option<Value>,
    raw_config: Option<String>,
}

impl TempProjectBuilder {
    /// Write this value as `t3composer.json`.
    #[must_use]
    pub fn with_config(mut self, config: Value) -> Self {
        self.config = Some(config);
        self
    }

    /// Write raw text as `t3composer.json`, e.g. malformed JSON.
    #[must_use]
    pub fn with_raw_config(mut self, content: impl Into<String>) -> Self {
        self.raw_config = Some(content.into());
        self
    }

    /// Create the directory and its files.
    pub fn build(self) -> Result<TempProject> {
        let dir = tempdir().context("Failed to create temp directory")?;
        let project = TempProject {
            config_path: dir.path().join("t3composer.json"),
            dir,
        };

        if let Some(raw) = &self.raw_config {
            project.write_file("t3composer.json", raw)?;
        } else if let Some(config) = &self.config {
            project.write_json("t3composer.json", config)?;
        }

        Ok(project)
    }
}
