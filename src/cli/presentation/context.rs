//! Context command presentation: table, json, and delete message.

use crate::context::{ContextDeleteResult, ContextRow};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::{Cell, Color, Table};
use serde_json::json;

pub fn format_context_rows_text(rows: &[ContextRow], color: bool) -> String {
    if rows.is_empty() {
        return "No contexts found.\n\nUse 'ctxkit context set <name> <tenant> <token name>' to add one."
            .to_string();
    }
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["NAME", "TENANT", "TOKEN NAME", "ENDPOINT", "CURRENT"]);
    if color {
        table.enforce_styling();
    }
    for row in rows {
        let name = if row.current && color {
            Cell::new(&row.name).fg(Color::Green)
        } else {
            Cell::new(&row.name)
        };
        table.add_row(vec![
            name,
            Cell::new(&row.tenant),
            Cell::new(&row.token_name),
            Cell::new(&row.endpoint),
            Cell::new(row.current),
        ]);
    }
    table.to_string()
}

pub fn format_context_rows_json(rows: &[ContextRow]) -> String {
    let out = json!({ "contexts": rows, "total": rows.len() });
    serde_json::to_string_pretty(&out).unwrap_or_else(|_| "{}".to_string())
}

pub fn format_context_delete_result(result: &ContextDeleteResult) -> String {
    format!("deleted context: {}", result.context_name)
}
