//! File-backed context configuration store.

use crate::error::StorageError;
use crate::store::{ContextConfig, ContextConfigStore};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Stores the [`ContextConfig`] singleton as a TOML document.
///
/// Writes go to a sibling temporary file that is then renamed over the
/// target, so a reader sees either the previous document or the new one.
pub struct TomlContextConfigStore {
    path: PathBuf,
}

impl TomlContextConfigStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn staging_path(&self) -> PathBuf {
        let mut file_name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        file_name.push(".tmp");
        self.path.with_file_name(file_name)
    }
}

impl ContextConfigStore for TomlContextConfigStore {
    fn get(&self) -> Result<ContextConfig, StorageError> {
        if !self.path.exists() {
            return Ok(ContextConfig::default());
        }
        let content = std::fs::read_to_string(&self.path)?;
        toml::from_str(&content).map_err(|e| StorageError::Decode {
            what: "context config",
            reason: format!("{}: {}", self.path.display(), e),
        })
    }

    fn put(&self, config: &ContextConfig) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(config).map_err(|e| StorageError::Encode {
            what: "context config",
            reason: e.to_string(),
        })?;

        let staging = self.staging_path();
        std::fs::write(&staging, content)?;
        std::fs::rename(&staging, &self.path)?;
        debug!(
            path = %self.path.display(),
            contexts = config.available_contexts.len(),
            "Wrote context config"
        );
        Ok(())
    }
}
