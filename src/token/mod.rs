//! Token domain: credential rows and the token-side consistency operations.
//!
//! Renaming or deleting a token cascades into the context config so no
//! context is left pointing at a name that no longer exists.

pub mod commands;

pub use commands::{TokenCommandService, TokenDeleteResult, TokenListResult, TokenRow};
