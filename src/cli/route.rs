//! CLI route: single route table and run context. Dispatches to domain services and presentation.
//!
//! Positional arguments are unpacked before the stores are touched, so an
//! arity error never opens (or creates) either store.

use crate::config::{ConfigLoader, CtxkitConfig, DefaultsConfig, StorageConfig};
use crate::context::{ContextCommandService, ContextRow};
use crate::error::ApiError;
use crate::integrity;
use crate::store::{
    ContextConfigStore, SledTokenStore, TokenStore, TomlContextConfigStore,
};
use crate::token::{TokenCommandService, TokenRow};
use std::cell::OnceCell;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info_span};

use crate::cli::args::unpack;
use crate::cli::parse::{Commands, ContextCommands, TokenCommands};
use crate::cli::{command_name, is_mutating};

const TOKEN_SET_USAGE: &str = "name and token";
const RENAME_USAGE: &str = "old name and new name";
const NAME_USAGE: &str = "name";
const CONTEXT_SET_USAGE: &str = "name, tenant, and token name";

/// The open token and context stores.
pub struct Stores {
    pub tokens: Box<dyn TokenStore>,
    pub contexts: Box<dyn ContextConfigStore>,
}

impl Stores {
    /// Open both stores at the locations named by `storage`.
    pub fn open(storage: &StorageConfig) -> Result<Self, ApiError> {
        let (tokens_path, contexts_path) = storage.resolve_paths()?;
        debug!(
            tokens = %tokens_path.display(),
            contexts = %contexts_path.display(),
            "Opening stores"
        );
        let tokens = SledTokenStore::new(&tokens_path)?;
        let contexts = TomlContextConfigStore::new(contexts_path);
        Ok(Self {
            tokens: Box::new(tokens),
            contexts: Box::new(contexts),
        })
    }
}

/// Runtime context for CLI execution: store locations, the stores once
/// opened, and command defaults.
pub struct RunContext {
    storage: StorageConfig,
    stores: OnceCell<Stores>,
    defaults: DefaultsConfig,
    color: bool,
}

impl RunContext {
    /// Load configuration. Uses ConfigLoader only; stores open on first use.
    pub fn new(config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let config = ConfigLoader::load_for(config_path.as_deref())?;
        Self::from_config(config)
    }

    /// Validate an already-loaded configuration. Nothing is opened yet.
    pub fn from_config(config: CtxkitConfig) -> Result<Self, ApiError> {
        if let Err(errors) = config.validate() {
            let msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            return Err(ApiError::ConfigError(msgs.join("; ")));
        }
        Ok(Self {
            storage: config.storage,
            stores: OnceCell::new(),
            defaults: config.defaults,
            color: false,
        })
    }

    /// Build from already-open stores.
    pub fn with_stores(
        tokens: Box<dyn TokenStore>,
        contexts: Box<dyn ContextConfigStore>,
        defaults: DefaultsConfig,
    ) -> Self {
        Self {
            storage: StorageConfig::default(),
            stores: OnceCell::from(Stores { tokens, contexts }),
            defaults,
            color: false,
        }
    }

    /// Enable colored text tables.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// The stores, opening them on first call.
    pub fn stores(&self) -> Result<&Stores, ApiError> {
        if let Some(stores) = self.stores.get() {
            return Ok(stores);
        }
        let opened = Stores::open(&self.storage)?;
        Ok(self.stores.get_or_init(|| opened))
    }

    /// Whether the stores have been opened.
    pub fn stores_opened(&self) -> bool {
        self.stores.get().is_some()
    }

    /// Execute a CLI command via the single route table.
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        let name = command_name(command);
        let span = info_span!("command", name = %name, mutating = is_mutating(command));
        let _guard = span.enter();

        let started = Instant::now();
        let result = match command {
            Commands::Token { command } => self.handle_token_command(command),
            Commands::Context { command } => self.handle_context_command(command),
            Commands::Validate { format } => self.handle_validate(format),
        };
        debug!(
            ok = result.is_ok(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Command finished"
        );
        result
    }

    fn handle_validate(&self, format: &str) -> Result<String, ApiError> {
        let stores = self.stores()?;
        let report = integrity::check(stores.tokens.as_ref(), stores.contexts.as_ref())?;
        match format {
            "json" => Ok(super::format_integrity_report_json(&report)),
            _ => Ok(super::format_integrity_report_text(&report, self.color)),
        }
    }

    fn handle_token_command(&self, command: &TokenCommands) -> Result<String, ApiError> {
        match command {
            TokenCommands::Set {
                args,
                endpoint,
                format,
            } => {
                let [name, secret] = unpack::<2>(args, TOKEN_SET_USAGE)?;
                let endpoint = endpoint.as_deref().unwrap_or(&self.defaults.endpoint);
                let stores = self.stores()?;
                let row = TokenCommandService::set(stores.tokens.as_ref(), name, endpoint, secret)?;
                Ok(render_tokens(&[row], format))
            }
            TokenCommands::Rename { args, format } => {
                let [old_name, new_name] = unpack::<2>(args, RENAME_USAGE)?;
                let stores = self.stores()?;
                let renamed = TokenCommandService::rename(
                    stores.tokens.as_ref(),
                    stores.contexts.as_ref(),
                    old_name,
                    new_name,
                )?;
                Ok(renamed
                    .map(|row| render_tokens(&[row], format))
                    .unwrap_or_default())
            }
            TokenCommands::Delete { args } => {
                let [name] = unpack::<1>(args, NAME_USAGE)?;
                let stores = self.stores()?;
                let result = TokenCommandService::delete(
                    stores.tokens.as_ref(),
                    stores.contexts.as_ref(),
                    name,
                )?;
                Ok(super::format_token_delete_result(&result))
            }
            TokenCommands::List {
                reveal_tokens,
                format,
            } => {
                let stores = self.stores()?;
                let result = TokenCommandService::list(stores.tokens.as_ref(), *reveal_tokens)?;
                Ok(render_tokens(&result.tokens, format))
            }
        }
    }

    fn handle_context_command(&self, command: &ContextCommands) -> Result<String, ApiError> {
        match command {
            ContextCommands::Set { args, format } => {
                let [name, tenant, token_name] = unpack::<3>(args, CONTEXT_SET_USAGE)?;
                let (tokens, contexts) = self.store_refs()?;
                let row = ContextCommandService::set(tokens, contexts, name, tenant, token_name)?;
                Ok(self.render_contexts(&[row], format))
            }
            ContextCommands::Rename { args, format } => {
                let [old_name, new_name] = unpack::<2>(args, RENAME_USAGE)?;
                let (tokens, contexts) = self.store_refs()?;
                let renamed = ContextCommandService::rename(tokens, contexts, old_name, new_name)?;
                Ok(renamed
                    .map(|row| self.render_contexts(&[row], format))
                    .unwrap_or_default())
            }
            ContextCommands::Delete { args } => {
                let [name] = unpack::<1>(args, NAME_USAGE)?;
                let (_, contexts) = self.store_refs()?;
                let result = ContextCommandService::delete(contexts, name)?;
                Ok(super::format_context_delete_result(&result))
            }
            ContextCommands::Use { args, format } => {
                let [name] = unpack::<1>(args, NAME_USAGE)?;
                let (tokens, contexts) = self.store_refs()?;
                let row = ContextCommandService::use_context(tokens, contexts, name)?;
                Ok(self.render_contexts(&[row], format))
            }
            ContextCommands::List { format } => {
                let (tokens, contexts) = self.store_refs()?;
                let result = ContextCommandService::list(tokens, contexts)?;
                Ok(self.render_contexts(&result.contexts, format))
            }
            ContextCommands::Current { format } => {
                let (tokens, contexts) = self.store_refs()?;
                let row = ContextCommandService::current(tokens, contexts)?;
                Ok(self.render_contexts(&[row], format))
            }
        }
    }

    fn store_refs(&self) -> Result<(&dyn TokenStore, &dyn ContextConfigStore), ApiError> {
        let stores = self.stores()?;
        Ok((stores.tokens.as_ref(), stores.contexts.as_ref()))
    }

    fn render_contexts(&self, rows: &[ContextRow], format: &str) -> String {
        match format {
            "json" => super::format_context_rows_json(rows),
            _ => super::format_context_rows_text(rows, self.color),
        }
    }
}

fn render_tokens(rows: &[TokenRow], format: &str) -> String {
    match format {
        "json" => super::format_token_rows_json(rows),
        _ => super::format_token_rows_text(rows),
    }
}
