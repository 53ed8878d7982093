//! CLI domain: parse, route, help, output, and presentation only.
//! No domain orchestration; single route table dispatches to domain services.

mod args;
mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use args::unpack;
pub use help::{command_name, is_mutating};
pub use output::map_error;
pub use parse::{Cli, Commands, ContextCommands, TokenCommands};
pub use presentation::{
    format_context_delete_result, format_context_rows_json, format_context_rows_text,
    format_integrity_report_json, format_integrity_report_text, format_token_delete_result,
    format_token_rows_json, format_token_rows_text,
};
pub use route::{RunContext, Stores};
