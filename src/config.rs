//! Configuration System
//!
//! Layered configuration for where the stores live, what a new token's
//! endpoint defaults to, and how logging behaves. Built-in defaults are
//! overridden by the global config file (or an explicit `--config` file),
//! which is overridden by `CTXKIT__*` environment variables.

use crate::error::ApiError;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

mod facade;
mod merge;
mod paths;
mod sources;

pub use facade::ConfigLoader;

/// XDG path helpers
pub mod xdg {
    pub use super::paths::xdg_root::*;
}

/// Application directory name under the XDG roots.
pub const APP_DIR: &str = "ctxkit";

/// Endpoint recorded for a token when none is given.
pub const DEFAULT_ENDPOINT: &str = "grpc.authzed.com:443";

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CtxkitConfig {
    /// Store locations
    #[serde(default)]
    pub storage: StorageConfig,

    /// Values applied when a command leaves them out
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Store locations. Relative paths resolve under the XDG roots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Token database directory, relative to `$XDG_DATA_HOME/ctxkit`
    #[serde(default = "default_tokens_path")]
    pub tokens_path: PathBuf,

    /// Context config file, relative to `$XDG_CONFIG_HOME/ctxkit`
    #[serde(default = "default_contexts_path")]
    pub contexts_path: PathBuf,
}

fn default_tokens_path() -> PathBuf {
    PathBuf::from("tokens")
}

fn default_contexts_path() -> PathBuf {
    PathBuf::from("contexts.toml")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            tokens_path: default_tokens_path(),
            contexts_path: default_contexts_path(),
        }
    }
}

impl StorageConfig {
    /// Absolute `(tokens_path, contexts_path)`.
    pub fn resolve_paths(&self) -> Result<(PathBuf, PathBuf), ApiError> {
        let tokens = resolve_under(&self.tokens_path, xdg::app_data_dir)?;
        let contexts = resolve_under(&self.contexts_path, xdg::app_config_dir)?;
        Ok((tokens, contexts))
    }
}

fn resolve_under(
    path: &Path,
    root: fn() -> Result<PathBuf, ApiError>,
) -> Result<PathBuf, ApiError> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(root()?.join(path))
    }
}

/// Defaults applied by commands
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Endpoint stored with a token when `--endpoint` is omitted
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone)]
pub enum ValidationError {
    Storage(String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Storage(msg) => write!(f, "Storage: {}", msg),
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl CtxkitConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.storage.tokens_path.as_os_str().is_empty() {
            errors.push(ValidationError::Storage(
                "Tokens path cannot be empty".to_string(),
            ));
        }
        if self.storage.contexts_path.as_os_str().is_empty() {
            errors.push(ValidationError::Storage(
                "Contexts path cannot be empty".to_string(),
            ));
        }

        if !matches!(self.logging.format.as_str(), "text" | "json") {
            errors.push(ValidationError::Logging(format!(
                "Invalid log format: {} (must be 'json' or 'text')",
                self.logging.format
            )));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
