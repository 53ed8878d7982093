//! Cross-store integrity check.
//!
//! Read-only. Reports the states a crash between fixed-order writes (or the
//! lenient set/delete context paths) can leave behind, so a later invocation
//! can repair them with the ordinary commands.

use crate::error::ApiError;
use crate::store::{ContextConfigStore, TokenStore};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use tracing::warn;

/// A single integrity finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IntegrityIssue {
    /// A context references a token that does not exist.
    MissingToken { context: String, token: String },
    /// `current_context` names a context that does not exist.
    DanglingCurrent { context: String },
    /// More than one context shares a name; lookups only reach the first.
    DuplicateContext { context: String },
}

impl std::fmt::Display for IntegrityIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IntegrityIssue::MissingToken { context, token } => {
                write!(f, "context '{}' references missing token '{}'", context, token)
            }
            IntegrityIssue::DanglingCurrent { context } => {
                write!(f, "current context '{}' does not exist", context)
            }
            IntegrityIssue::DuplicateContext { context } => {
                write!(f, "context name '{}' is used more than once", context)
            }
        }
    }
}

/// Result of validate command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntegrityReport {
    pub tokens_checked: usize,
    pub contexts_checked: usize,
    pub issues: Vec<IntegrityIssue>,
}

impl IntegrityReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Check both stores against the reference invariants.
pub fn check(
    tokens: &dyn TokenStore,
    contexts: &dyn ContextConfigStore,
) -> Result<IntegrityReport, ApiError> {
    let token_names: HashSet<String> = tokens
        .list(true)?
        .into_iter()
        .map(|t| t.name)
        .collect();
    let cfg = contexts.get()?;

    let mut issues = Vec::new();

    let mut seen = HashSet::new();
    let mut duplicates = BTreeSet::new();
    for context in &cfg.available_contexts {
        if !token_names.contains(&context.token_name) {
            issues.push(IntegrityIssue::MissingToken {
                context: context.name.clone(),
                token: context.token_name.clone(),
            });
        }
        if !seen.insert(context.name.as_str()) {
            duplicates.insert(context.name.clone());
        }
    }
    issues.extend(
        duplicates
            .into_iter()
            .map(|context| IntegrityIssue::DuplicateContext { context }),
    );

    if !cfg.current_context.is_empty() && cfg.find(&cfg.current_context).is_none() {
        issues.push(IntegrityIssue::DanglingCurrent {
            context: cfg.current_context.clone(),
        });
    }

    for issue in &issues {
        warn!(%issue, "Integrity issue");
    }

    Ok(IntegrityReport {
        tokens_checked: token_names.len(),
        contexts_checked: cfg.available_contexts.len(),
        issues,
    })
}
