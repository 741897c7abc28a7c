//! Output formatting for generation and check reports.
//!
//! | Format | Module | Use case |
//! |--------|--------|----------|
//! | Pretty | [`pretty`] | Terminal / human review |
//! | Json   | [`json`]   | Automation / scripting  |
//! | Sarif  | [`sarif`]  | CI/CD integration (check only) |
//!
//! SARIF models rule violations with locations, which fits the check
//! sweep's findings; the generation report has no such structure, so
//! `generate` only offers the first two formats.

pub mod json;
pub mod pretty;
pub mod sarif;

use crate::batch::GenerationReport;
use crate::check::CheckReport;

/// Output formats for `lintdoc generate`.
#[derive(Debug, Clone, clap::ValueEnum)]
pub enum GenerateFormat {
    /// Human-readable colored text.
    Pretty,
    /// Machine-readable JSON.
    Json,
}

/// Output formats for `lintdoc check`.
#[derive(Debug, Clone, clap::ValueEnum)]
pub enum CheckFormat {
    /// Human-readable colored text.
    Pretty,
    /// Machine-readable JSON.
    Json,
    /// [SARIF 2.1.0](https://sarifweb.azurewebsites.net/) for CI/CD tool integration.
    Sarif,
}

/// Formats a [`GenerationReport`] in the requested format.
pub fn format_generation(report: &GenerationReport, format: &GenerateFormat) -> String {
    match format {
        GenerateFormat::Pretty => pretty::format_generation(report),
        GenerateFormat::Json => json::format_generation(report),
    }
}

/// Formats a [`CheckReport`] in the requested format.
pub fn format_check(report: &CheckReport, format: &CheckFormat) -> String {
    match format {
        CheckFormat::Pretty => pretty::format_check(report),
        CheckFormat::Json => json::format_check(report),
        CheckFormat::Sarif => sarif::format_check(report),
    }
}
