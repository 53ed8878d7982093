//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::ApiError;

/// Map domain/service errors to a string for CLI output.
///
/// Messages are shown verbatim; callers rely on them (e.g. `could not find token: x`).
pub fn map_error(e: &ApiError) -> String {
    e.to_string()
}
