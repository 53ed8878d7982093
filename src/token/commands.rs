//! Token command service: single entry point per token CLI command variant.
//!
//! Owns the token-side write ordering; CLI unpacks arguments, calls one method
//! per variant, and formats output.

use crate::error::ApiError;
use crate::store::{ContextConfigStore, TokenRecord, TokenStore, REDACTED};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

pub struct TokenCommandService;

/// One displayable token. `secret` is already masked unless revealed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRow {
    pub name: String,
    pub endpoint: String,
    pub secret: String,
}

impl TokenRow {
    fn redacted(record: &TokenRecord) -> Self {
        Self {
            name: record.name.clone(),
            endpoint: record.endpoint.clone(),
            secret: REDACTED.to_string(),
        }
    }
}

impl From<TokenRecord> for TokenRow {
    fn from(record: TokenRecord) -> Self {
        Self {
            name: record.name,
            endpoint: record.endpoint,
            secret: record.secret,
        }
    }
}

/// Result of token list command.
#[derive(Debug, Clone)]
pub struct TokenListResult {
    pub tokens: Vec<TokenRow>,
}

/// Result of token delete command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenDeleteResult {
    pub token_name: String,
    /// Contexts removed because they referenced the token, in config order.
    pub deleted_contexts: Vec<String>,
}

impl TokenCommandService {
    /// Store a token, fully replacing any record with the same name.
    pub fn set(
        tokens: &dyn TokenStore,
        name: &str,
        endpoint: &str,
        secret: &str,
    ) -> Result<TokenRow, ApiError> {
        if name.is_empty() {
            return Err(ApiError::InvalidArgument(
                "token name must not be empty".to_string(),
            ));
        }
        let record = TokenRecord::new(name, endpoint, secret);
        tokens.put(&record)?;
        info!(token = name, endpoint, "Stored token");
        Ok(TokenRow::redacted(&record))
    }

    /// Rename a token and repoint every context that referenced it.
    ///
    /// Write order: new token, then context config, then removal of the old
    /// token. A crash at any step leaves every context reference resolvable.
    /// Returns `None` when the names are equal (nothing is touched).
    pub fn rename(
        tokens: &dyn TokenStore,
        contexts: &dyn ContextConfigStore,
        old_name: &str,
        new_name: &str,
    ) -> Result<Option<TokenRow>, ApiError> {
        if old_name == new_name {
            return Ok(None);
        }
        if new_name.is_empty() {
            return Err(ApiError::InvalidArgument(
                "token name must not be empty".to_string(),
            ));
        }

        let mut token = tokens.get(old_name, false)?;
        token.name = new_name.to_string();
        tokens.put(&token)?;
        debug!(token = new_name, "Wrote renamed token");

        let mut cfg = contexts.get()?;
        let retargeted = cfg.retarget_token(old_name, new_name);
        contexts.put(&cfg)?;
        debug!(retargeted, "Wrote context config after token rename");

        tokens.delete(old_name)?;
        info!(from = old_name, to = new_name, retargeted, "Renamed token");

        Ok(Some(TokenRow::redacted(&token)))
    }

    /// Delete a token along with every context that references it.
    ///
    /// The context config is written first so no surviving context can point
    /// at the removed token.
    pub fn delete(
        tokens: &dyn TokenStore,
        contexts: &dyn ContextConfigStore,
        name: &str,
    ) -> Result<TokenDeleteResult, ApiError> {
        let mut cfg = contexts.get()?;
        let removed = cfg.remove_by_token(name);
        for context in &removed {
            warn!(
                context = %context.name,
                token = name,
                "Deleting context with its token"
            );
        }

        if !removed.is_empty() {
            contexts.put(&cfg)?;
            debug!(removed = removed.len(), "Wrote context config after cascade");
        }

        tokens.delete(name)?;
        info!(token = name, "Deleted token");

        Ok(TokenDeleteResult {
            token_name: name.to_string(),
            deleted_contexts: removed.into_iter().map(|c| c.name).collect(),
        })
    }

    /// List tokens; secrets are masked unless `reveal` is set.
    pub fn list(tokens: &dyn TokenStore, reveal: bool) -> Result<TokenListResult, ApiError> {
        let records = tokens.list(!reveal)?;
        Ok(TokenListResult {
            tokens: records.into_iter().map(TokenRow::from).collect(),
        })
    }
}
