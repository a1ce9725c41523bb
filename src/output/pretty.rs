//! Human-readable text formatter.
//!
//! On failure: a header line followed by `- <error>` for every error in
//! the order it was found. On success: a single confirmation line. The
//! header and confirmation are colored only when stdout is a terminal.

use crate::finding::ValidationReport;
use colored::Colorize;

pub const FAILED_HEADER: &str = "Skill validation failed:";
pub const PASSED_LINE: &str = "Skill validation passed.";

/// Formats a [`ValidationReport`] as text, one line per error.
pub fn format(report: &ValidationReport) -> String {
    let mut out = String::new();

    if report.passed() {
        out.push_str(&format!("{}\n", PASSED_LINE.green().bold()));
        return out;
    }

    out.push_str(&format!("{}\n", FAILED_HEADER.red().bold()));
    for error in report.errors() {
        out.push_str(&format!("- {error}\n"));
    }
    out
}
