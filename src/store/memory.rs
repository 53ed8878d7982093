//! In-memory stores.
//!
//! Both stores count their writes so callers can assert that an operation
//! touched (or did not touch) persistence.

use crate::error::{ApiError, NotFound, StorageError};
use crate::store::{ContextConfig, ContextConfigStore, TokenRecord, TokenStore};
use parking_lot::Mutex;
use std::collections::BTreeMap;

#[derive(Default)]
pub struct MemoryTokenStore {
    tokens: Mutex<BTreeMap<String, TokenRecord>>,
    writes: Mutex<usize>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful `put`/`delete` calls.
    pub fn writes(&self) -> usize {
        *self.writes.lock()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tokens.lock().contains_key(name)
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self, name: &str, allow_masked: bool) -> Result<TokenRecord, ApiError> {
        let tokens = self.tokens.lock();
        let record = tokens
            .get(name)
            .ok_or_else(|| NotFound::Token(name.to_string()))?;
        Ok(if allow_masked {
            record.redacted()
        } else {
            record.clone()
        })
    }

    fn put(&self, record: &TokenRecord) -> Result<(), StorageError> {
        self.tokens
            .lock()
            .insert(record.name.clone(), record.clone());
        *self.writes.lock() += 1;
        Ok(())
    }

    fn delete(&self, name: &str) -> Result<(), ApiError> {
        if self.tokens.lock().remove(name).is_none() {
            return Err(NotFound::Token(name.to_string()).into());
        }
        *self.writes.lock() += 1;
        Ok(())
    }

    fn list(&self, redact: bool) -> Result<Vec<TokenRecord>, StorageError> {
        Ok(self
            .tokens
            .lock()
            .values()
            .map(|t| if redact { t.redacted() } else { t.clone() })
            .collect())
    }
}

#[derive(Default)]
pub struct MemoryContextConfigStore {
    config: Mutex<Option<ContextConfig>>,
    writes: Mutex<usize>,
}

impl MemoryContextConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing config without counting it as a write.
    pub fn with_config(config: ContextConfig) -> Self {
        Self {
            config: Mutex::new(Some(config)),
            writes: Mutex::new(0),
        }
    }

    /// Number of successful `put` calls.
    pub fn writes(&self) -> usize {
        *self.writes.lock()
    }
}

impl ContextConfigStore for MemoryContextConfigStore {
    fn get(&self) -> Result<ContextConfig, StorageError> {
        Ok(self.config.lock().clone().unwrap_or_default())
    }

    fn put(&self, config: &ContextConfig) -> Result<(), StorageError> {
        *self.config.lock() = Some(config.clone());
        *self.writes.lock() += 1;
        Ok(())
    }
}
