//! XDG base directories for ctxkit.
//!
//! `$XDG_CONFIG_HOME` and `$XDG_DATA_HOME` win when set; otherwise the
//! conventional `~/.config` and `~/.local/share` under `$HOME`, and finally
//! whatever the platform reports.

use crate::config::APP_DIR;
use crate::error::ApiError;
use directories::BaseDirs;
use std::path::PathBuf;

fn from_env_or_home(var: &str, home_relative: &[&str]) -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os(var).filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(dir));
    }
    std::env::var_os("HOME")
        .filter(|v| !v.is_empty())
        .map(|home| {
            home_relative
                .iter()
                .fold(PathBuf::from(home), |path, part| path.join(part))
        })
}

/// `$XDG_CONFIG_HOME`, or `~/.config`.
pub fn config_home() -> Result<PathBuf, ApiError> {
    from_env_or_home("XDG_CONFIG_HOME", &[".config"])
        .or_else(|| BaseDirs::new().map(|d| d.config_dir().to_path_buf()))
        .ok_or_else(|| {
            ApiError::ConfigError("Could not determine config directory".to_string())
        })
}

/// `$XDG_DATA_HOME`, or `~/.local/share`.
pub fn data_home() -> Result<PathBuf, ApiError> {
    from_env_or_home("XDG_DATA_HOME", &[".local", "share"])
        .or_else(|| BaseDirs::new().map(|d| d.data_dir().to_path_buf()))
        .ok_or_else(|| ApiError::ConfigError("Could not determine data directory".to_string()))
}

fn ensure_dir(dir: PathBuf) -> Result<PathBuf, ApiError> {
    if !dir.exists() {
        std::fs::create_dir_all(&dir).map_err(|e| {
            ApiError::ConfigError(format!(
                "Failed to create directory {}: {}",
                dir.display(),
                e
            ))
        })?;
    }
    Ok(dir)
}

/// `<config_home>/ctxkit`, created on first use.
pub fn app_config_dir() -> Result<PathBuf, ApiError> {
    ensure_dir(config_home()?.join(APP_DIR))
}

/// `<data_home>/ctxkit`, created on first use.
pub fn app_data_dir() -> Result<PathBuf, ApiError> {
    ensure_dir(data_home()?.join(APP_DIR))
}

/// Path of the global config file. Not created.
pub fn global_config_file() -> Result<PathBuf, ApiError> {
    Ok(config_home()?.join(APP_DIR).join("config.toml"))
}

/// Default log file location.
pub fn default_log_file() -> Result<PathBuf, ApiError> {
    Ok(app_data_dir()?.join("ctxkit.log"))
}
