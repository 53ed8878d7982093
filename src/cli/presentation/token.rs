//! Token command presentation: table, json, and delete messages.

use crate::token::{TokenDeleteResult, TokenRow};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use serde_json::json;

pub fn format_token_rows_text(rows: &[TokenRow]) -> String {
    if rows.is_empty() {
        return "No tokens found.\n\nUse 'ctxkit token set <name> <secret>' to add one."
            .to_string();
    }
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["NAME", "ENDPOINT", "TOKEN"]);
    for row in rows {
        table.add_row(vec![&row.name, &row.endpoint, &row.secret]);
    }
    table.to_string()
}

pub fn format_token_rows_json(rows: &[TokenRow]) -> String {
    let out = json!({ "tokens": rows, "total": rows.len() });
    serde_json::to_string_pretty(&out).unwrap_or_else(|_| "{}".to_string())
}

/// One line per cascaded context, then the token itself.
pub fn format_token_delete_result(result: &TokenDeleteResult) -> String {
    let mut lines: Vec<String> = result
        .deleted_contexts
        .iter()
        .map(|name| format!("deleted context: {}", name))
        .collect();
    lines.push(format!("deleted token: {}", result.token_name));
    lines.join("\n")
}
