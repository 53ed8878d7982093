//! Ctxkit: named API tokens and the contexts that use them
//!
//! Two stores are kept in step: a token store holding named credentials and a
//! context config naming which tenant and token each context uses. Every
//! operation that touches both writes them in a fixed order so that a context
//! never points at a token that is gone.

pub mod cli;
pub mod config;
pub mod context;
pub mod error;
pub mod integrity;
pub mod logging;
pub mod store;
pub mod token;
