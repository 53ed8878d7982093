//! Token and context stores
//!
//! Record types for the two persisted collections and the store contracts the
//! consistency operations run against. Concrete backends live in the
//! submodules; operations only ever see the traits.

pub mod context_file;
pub mod memory;
pub mod persistence;

pub use context_file::TomlContextConfigStore;
pub use memory::{MemoryContextConfigStore, MemoryTokenStore};
pub use persistence::SledTokenStore;

use crate::error::{ApiError, StorageError};
use serde::{Deserialize, Serialize};

/// Placeholder shown wherever a secret is withheld.
pub const REDACTED: &str = "<redacted>";

/// A named credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRecord {
    pub name: String,
    pub endpoint: String,
    pub secret: String,
}

impl TokenRecord {
    pub fn new(
        name: impl Into<String>,
        endpoint: impl Into<String>,
        secret: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            endpoint: endpoint.into(),
            secret: secret.into(),
        }
    }

    /// Copy of this record with the secret replaced by [`REDACTED`].
    pub fn redacted(&self) -> Self {
        Self {
            name: self.name.clone(),
            endpoint: self.endpoint.clone(),
            secret: REDACTED.to_string(),
        }
    }
}

/// A named binding of a tenant to a token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Context {
    pub name: String,
    pub tenant: String,
    pub token_name: String,
}

impl Context {
    pub fn new(
        name: impl Into<String>,
        tenant: impl Into<String>,
        token_name: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            tenant: tenant.into(),
            token_name: token_name.into(),
        }
    }
}

/// The persisted context singleton.
///
/// `available_contexts` keeps insertion order; `current_context` is empty when
/// nothing is selected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextConfig {
    #[serde(default)]
    pub current_context: String,
    #[serde(default)]
    pub available_contexts: Vec<Context>,
}

impl ContextConfig {
    pub fn append_available_context(&mut self, context: Context) {
        self.available_contexts.push(context);
    }

    /// First context with the given name.
    pub fn find(&self, name: &str) -> Option<&Context> {
        self.available_contexts.iter().find(|c| c.name == name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Context> {
        self.available_contexts.iter_mut().find(|c| c.name == name)
    }

    pub fn is_current(&self, name: &str) -> bool {
        !self.current_context.is_empty() && self.current_context == name
    }

    /// Point every context referencing `old` at `new`. Returns how many changed.
    pub fn retarget_token(&mut self, old: &str, new: &str) -> usize {
        let mut changed = 0;
        for context in self
            .available_contexts
            .iter_mut()
            .filter(|c| c.token_name == old)
        {
            context.token_name = new.to_string();
            changed += 1;
        }
        changed
    }

    /// Remove every context referencing `token_name`, returning the removed ones in order.
    pub fn remove_by_token(&mut self, token_name: &str) -> Vec<Context> {
        let (removed, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.available_contexts)
            .into_iter()
            .partition(|c| c.token_name == token_name);
        self.available_contexts = kept;
        removed
    }

    /// Remove the first context named `name`.
    pub fn remove_by_name(&mut self, name: &str) -> Option<Context> {
        let index = self.available_contexts.iter().position(|c| c.name == name)?;
        Some(self.available_contexts.remove(index))
    }
}

/// Token store interface
pub trait TokenStore {
    /// Fetch a token by exact name.
    ///
    /// With `allow_masked` the caller only needs metadata and the store may
    /// return the secret as [`REDACTED`].
    fn get(&self, name: &str, allow_masked: bool) -> Result<TokenRecord, ApiError>;

    /// Insert or fully replace the record stored under `record.name`.
    fn put(&self, record: &TokenRecord) -> Result<(), StorageError>;

    fn delete(&self, name: &str) -> Result<(), ApiError>;

    /// All tokens in a stable order; secrets masked when `redact` is set.
    fn list(&self, redact: bool) -> Result<Vec<TokenRecord>, StorageError>;
}

/// Context configuration store interface
pub trait ContextConfigStore {
    /// The persisted singleton, or the zero value when none exists yet.
    fn get(&self) -> Result<ContextConfig, StorageError>;

    /// Replace the singleton. Readers never observe a partial write.
    fn put(&self, config: &ContextConfig) -> Result<(), StorageError>;
}
