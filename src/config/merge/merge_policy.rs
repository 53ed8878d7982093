//! Merge rules: defaults, override order, conflict handling.

use crate::config::DEFAULT_ENDPOINT;
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
///
/// Later sources replace individual keys; tables are merged key by key.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("storage.tokens_path", "tokens")?
        .set_default("storage.contexts_path", "contexts.toml")?
        .set_default("defaults.endpoint", DEFAULT_ENDPOINT)
}
