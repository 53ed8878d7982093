//! Validate presentation: integrity report text/json.

use crate::integrity::IntegrityReport;
use owo_colors::OwoColorize;

pub fn format_integrity_report_text(report: &IntegrityReport, color: bool) -> String {
    let mut output = format!(
        "Checked {} token(s) and {} context(s)\n",
        report.tokens_checked, report.contexts_checked
    );

    if report.is_clean() {
        let mark = if color {
            "✓".green().to_string()
        } else {
            "✓".to_string()
        };
        output.push_str(&format!("{} No integrity issues found", mark));
        return output;
    }

    output.push_str(&format!("\nIssues ({}):\n", report.issues.len()));
    for issue in &report.issues {
        let mark = if color {
            "✗".red().to_string()
        } else {
            "✗".to_string()
        };
        output.push_str(&format!("  {} {}\n", mark, issue));
    }
    output.push_str(
        "\nRepair with 'ctxkit context delete', 'ctxkit context use', or 'ctxkit token set'.",
    );
    output
}

pub fn format_integrity_report_json(report: &IntegrityReport) -> String {
    serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
}
