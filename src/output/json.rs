//! JSON output formatter.

use crate::finding::{ErrorKind, ValidationReport, Verdict};
use std::path::Path;

#[derive(serde::Serialize)]
struct JsonOutput<'a> {
    passed: bool,
    verdict: Verdict,
    skills_checked: usize,
    checked_at: &'a str,
    errors: Vec<JsonError<'a>>,
}

#[derive(serde::Serialize)]
struct JsonError<'a> {
    kind: ErrorKind,
    rule_id: &'static str,
    file: Option<&'a Path>,
    message: &'a str,
}

/// Formats a [`ValidationReport`] as pretty-printed JSON.
///
/// # Panics
///
/// Panics if the report cannot be serialized (should not happen with valid data).
pub fn format(report: &ValidationReport) -> String {
    let output = JsonOutput {
        passed: report.passed(),
        verdict: report.verdict(),
        skills_checked: report.skills_checked(),
        checked_at: report.checked_at(),
        errors: report
            .errors()
            .iter()
            .map(|e| JsonError {
                kind: e.kind(),
                rule_id: e.rule.id(),
                file: e.file.as_deref(),
                message: &e.message,
            })
            .collect(),
    };

    let mut json = serde_json::to_string_pretty(&output).expect("JSON serialization failed");
    json.push('\n');
    json
}
