//! Context command service: single entry point per context CLI command variant.
//!
//! Every operation reads the config, validates, mutates in memory, and writes
//! it back once. Lookups by name resolve to the first matching context.

use crate::error::{ApiError, NotFound};
use crate::store::{Context, ContextConfig, ContextConfigStore, TokenRecord, TokenStore};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

pub struct ContextCommandService;

/// One displayable context with its token's endpoint resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextRow {
    pub name: String,
    pub tenant: String,
    pub token_name: String,
    pub endpoint: String,
    pub current: bool,
}

impl ContextRow {
    fn resolve(
        tokens: &dyn TokenStore,
        context: &Context,
        current: bool,
    ) -> Result<Self, ApiError> {
        let token = tokens.get(&context.token_name, true)?;
        Ok(Self {
            name: context.name.clone(),
            tenant: context.tenant.clone(),
            token_name: context.token_name.clone(),
            endpoint: token.endpoint,
            current,
        })
    }
}

/// Result of context list command.
#[derive(Debug, Clone)]
pub struct ContextListResult {
    pub contexts: Vec<ContextRow>,
}

/// Result of context delete command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextDeleteResult {
    pub context_name: String,
}

fn require_name(name: &str) -> Result<(), ApiError> {
    if name.is_empty() {
        return Err(ApiError::InvalidArgument(
            "context name must not be empty".to_string(),
        ));
    }
    Ok(())
}

impl ContextCommandService {
    /// List every context in config order, resolving each token's endpoint.
    ///
    /// A context whose token no longer exists fails the whole listing.
    pub fn list(
        tokens: &dyn TokenStore,
        contexts: &dyn ContextConfigStore,
    ) -> Result<ContextListResult, ApiError> {
        let cfg = contexts.get()?;
        let rows = cfg
            .available_contexts
            .iter()
            .map(|context| ContextRow::resolve(tokens, context, cfg.is_current(&context.name)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(ContextListResult { contexts: rows })
    }

    /// Append a new context. The first context ever added becomes current.
    ///
    /// No duplicate-name check is made; name lookups take the first match.
    pub fn set(
        tokens: &dyn TokenStore,
        contexts: &dyn ContextConfigStore,
        name: &str,
        tenant: &str,
        token_name: &str,
    ) -> Result<ContextRow, ApiError> {
        require_name(name)?;
        let token = tokens.get(token_name, true)?;

        let mut cfg = contexts.get()?;
        let context = Context::new(name, tenant, token_name);
        cfg.append_available_context(context.clone());
        if cfg.available_contexts.len() == 1 {
            cfg.current_context = name.to_string();
        }
        contexts.put(&cfg)?;
        info!(context = name, tenant, token = token_name, "Added context");

        Ok(ContextRow {
            name: context.name,
            tenant: context.tenant,
            token_name: context.token_name,
            endpoint: token.endpoint,
            current: cfg.is_current(name),
        })
    }

    /// Rename a context in place; the current pointer follows it.
    ///
    /// Returns `None` when the names are equal (no store access).
    pub fn rename(
        tokens: &dyn TokenStore,
        contexts: &dyn ContextConfigStore,
        old_name: &str,
        new_name: &str,
    ) -> Result<Option<ContextRow>, ApiError> {
        if old_name == new_name {
            return Ok(None);
        }
        require_name(new_name)?;

        let mut cfg = contexts.get()?;
        let renamed = {
            let context = cfg
                .find_mut(old_name)
                .ok_or_else(|| NotFound::Context(old_name.to_string()))?;
            context.name = new_name.to_string();
            context.clone()
        };
        if cfg.current_context == old_name {
            cfg.current_context = new_name.to_string();
        }
        contexts.put(&cfg)?;
        info!(from = old_name, to = new_name, "Renamed context");

        let row = ContextRow::resolve(tokens, &renamed, cfg.is_current(new_name))?;
        Ok(Some(row))
    }

    /// Remove the first context with the given name.
    ///
    /// `current_context` is left as is, even when it named the removed context.
    pub fn delete(
        contexts: &dyn ContextConfigStore,
        name: &str,
    ) -> Result<ContextDeleteResult, ApiError> {
        let mut cfg = contexts.get()?;
        let before = cfg.available_contexts.len();
        cfg.remove_by_name(name);

        if cfg.available_contexts.len() == before {
            return Err(NotFound::Context(name.to_string()).into());
        }

        contexts.put(&cfg)?;
        if cfg.current_context == name && cfg.find(name).is_none() {
            debug!(context = name, "Deleted context was current; pointer left in place");
        }
        info!(context = name, "Deleted context");

        Ok(ContextDeleteResult {
            context_name: name.to_string(),
        })
    }

    /// Make the named context current.
    pub fn use_context(
        tokens: &dyn TokenStore,
        contexts: &dyn ContextConfigStore,
        name: &str,
    ) -> Result<ContextRow, ApiError> {
        let mut cfg = contexts.get()?;
        let context = cfg
            .find(name)
            .cloned()
            .ok_or_else(|| NotFound::AvailableContext(name.to_string()))?;

        cfg.current_context = context.name.clone();
        contexts.put(&cfg)?;
        info!(context = name, "Switched current context");

        ContextRow::resolve(tokens, &context, true)
    }

    /// Row for the current context.
    pub fn current(
        tokens: &dyn TokenStore,
        contexts: &dyn ContextConfigStore,
    ) -> Result<ContextRow, ApiError> {
        let cfg = contexts.get()?;
        let context = current_of(&cfg)?;
        ContextRow::resolve(tokens, context, true)
    }

    /// The current context and its token with the secret included.
    ///
    /// This is what a client uses when no explicit context is named.
    pub fn current_token(
        tokens: &dyn TokenStore,
        contexts: &dyn ContextConfigStore,
    ) -> Result<(Context, TokenRecord), ApiError> {
        let cfg = contexts.get()?;
        let context = current_of(&cfg)?.clone();
        let token = tokens.get(&context.token_name, false)?;
        Ok((context, token))
    }
}

fn current_of(cfg: &ContextConfig) -> Result<&Context, ApiError> {
    if cfg.current_context.is_empty() {
        return Err(NotFound::CurrentContext.into());
    }
    cfg.find(&cfg.current_context)
        .ok_or_else(|| NotFound::Context(cfg.current_context.clone()).into())
}
