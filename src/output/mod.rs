//! Output formatting for validation reports.
//!
//! | Format | Module | Use case |
//! |--------|--------|----------|
//! | [`Pretty`](OutputFormat::Pretty) | [`pretty`] | Terminal and CI logs (the default) |
//! | [`Json`](OutputFormat::Json)     | [`json`]   | Automation / scripting |
//! | [`Sarif`](OutputFormat::Sarif)   | [`sarif`]  | Code-scanning integrations |

pub mod json;
pub mod pretty;
pub mod sarif;

use crate::finding::ValidationReport;

/// Supported output formats.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// One line per error, or a single confirmation line.
    #[default]
    Pretty,
    /// Machine-readable JSON.
    Json,
    /// [SARIF 2.1.0](https://sarifweb.azurewebsites.net/).
    Sarif,
}

/// Formats a [`ValidationReport`] in the requested [`OutputFormat`].
pub fn format_report(report: &ValidationReport, format: OutputFormat) -> String {
    match format {
        OutputFormat::Pretty => pretty::format(report),
        OutputFormat::Json => json::format(report),
        OutputFormat::Sarif => sarif::format(report),
    }
}
