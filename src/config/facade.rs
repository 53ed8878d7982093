//! Config loader facade: one entry point that applies the merge policy and sources.

use crate::config::merge::merge_policy;
use crate::config::sources::{env, file, global_file};
use crate::config::CtxkitConfig;
use config::ConfigError;
use std::path::{Path, PathBuf};

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load from defaults, the global config file, and the environment.
    pub fn load() -> Result<CtxkitConfig, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = env::add_to_builder(builder);
        builder.build()?.try_deserialize()
    }

    /// Load from defaults, the given file, and the environment. The global file is skipped.
    pub fn load_from_file(path: &Path) -> Result<CtxkitConfig, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = file::add_to_builder(builder, path)?;
        let builder = env::add_to_builder(builder);
        builder.build()?.try_deserialize()
    }

    /// Explicit file when given, the layered default otherwise.
    pub fn load_for(path: Option<&Path>) -> Result<CtxkitConfig, ConfigError> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => Self::load(),
        }
    }

    /// Location of the global config file.
    pub fn global_config_path() -> Option<PathBuf> {
        global_file::global_config_path()
    }
}
