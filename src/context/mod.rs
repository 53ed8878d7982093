//! Context domain: named tenant/token bindings and the current-context pointer.

pub mod commands;

pub use commands::{ContextCommandService, ContextDeleteResult, ContextListResult, ContextRow};
