//! CLI presentation: text and json formatters per command family.

mod context;
mod integrity;
mod token;

pub use context::{
    format_context_delete_result, format_context_rows_json, format_context_rows_text,
};
pub use integrity::{format_integrity_report_json, format_integrity_report_text};
pub use token::{format_token_delete_result, format_token_rows_json, format_token_rows_text};
