//! Persistence layer for the token store

use crate::error::{ApiError, NotFound, StorageError};
use crate::store::{TokenRecord, TokenStore};
use bincode;
use sled;
use std::path::Path;

/// Sled-based implementation of TokenStore
///
/// Keys are token names, values are bincode-encoded [`TokenRecord`]s. Sled
/// iterates keys in byte order, which gives `list` its stable ordering.
pub struct SledTokenStore {
    db: sled::Db,
}

impl SledTokenStore {
    /// Open (or create) a token database at the given directory.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, StorageError> {
        let db = sled::open(path).map_err(|e| {
            StorageError::Database(format!("Failed to open token database: {}", e))
        })?;
        Ok(Self { db })
    }

    pub fn from_db(db: sled::Db) -> Self {
        Self { db }
    }

    /// Get the underlying sled database (for advanced operations)
    pub fn db(&self) -> &sled::Db {
        &self.db
    }

    /// Check if a token exists in the store
    pub fn contains(&self, name: &str) -> Result<bool, StorageError> {
        Ok(self.db.contains_key(name.as_bytes())?)
    }

    /// Flush all pending writes to disk
    pub fn flush(&self) -> Result<(), StorageError> {
        self.db.flush()?;
        Ok(())
    }

    fn decode(value: &[u8]) -> Result<TokenRecord, StorageError> {
        bincode::deserialize(value).map_err(|e| StorageError::Decode {
            what: "token record",
            reason: e.to_string(),
        })
    }
}

impl TokenStore for SledTokenStore {
    fn get(&self, name: &str, allow_masked: bool) -> Result<TokenRecord, ApiError> {
        let value = self
            .db
            .get(name.as_bytes())
            .map_err(StorageError::from)?
            .ok_or_else(|| NotFound::Token(name.to_string()))?;
        let record = Self::decode(&value)?;
        if allow_masked {
            Ok(record.redacted())
        } else {
            Ok(record)
        }
    }

    fn put(&self, record: &TokenRecord) -> Result<(), StorageError> {
        let value = bincode::serialize(record).map_err(|e| StorageError::Encode {
            what: "token record",
            reason: e.to_string(),
        })?;
        self.db.insert(record.name.as_bytes(), value)?;
        self.flush()
    }

    fn delete(&self, name: &str) -> Result<(), ApiError> {
        let removed = self.db.remove(name.as_bytes()).map_err(StorageError::from)?;
        if removed.is_none() {
            return Err(NotFound::Token(name.to_string()).into());
        }
        self.flush()?;
        Ok(())
    }

    fn list(&self, redact: bool) -> Result<Vec<TokenRecord>, StorageError> {
        let mut records = Vec::new();
        for item in self.db.iter() {
            let (_, value) = item?;
            let record = Self::decode(&value)?;
            records.push(if redact { record.redacted() } else { record });
        }
        Ok(records)
    }
}
