//! Error types for the token and context configuration core.

use thiserror::Error;

/// Storage-related errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Failed to encode {what}: {reason}")]
    Encode { what: &'static str, reason: String },

    #[error("Failed to decode {what}: {reason}")]
    Decode { what: &'static str, reason: String },
}

impl From<sled::Error> for StorageError {
    fn from(err: sled::Error) -> Self {
        StorageError::Database(err.to_string())
    }
}

/// A named record that does not exist.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotFound {
    #[error("could not find token: {0}")]
    Token(String),

    #[error("could not find context: {0}")]
    Context(String),

    /// Switching to a context that is not among the available ones.
    #[error("could not find available context: {0}")]
    AvailableContext(String),

    #[error("no current context is set")]
    CurrentContext,
}

/// Errors surfaced by the consistency operations and the CLI.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("must provide only {expected} argument{}: {usage}", if *.expected == 1 { "" } else { "s" })]
    Arity { expected: usize, usage: &'static str },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error(transparent)]
    NotFound(#[from] NotFound),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl ApiError {
    /// Whether this error reports a missing token or context.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound(_))
    }
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
