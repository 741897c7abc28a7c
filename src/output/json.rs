//! JSON output formatters.
//!
//! Both reports already carry their summary counts and a `passed` flag, so
//! the JSON form is the report itself, pretty-printed.

use crate::batch::GenerationReport;
use crate::check::CheckReport;

/// Formats a [`GenerationReport`] as pretty-printed JSON.
///
/// # Panics
///
/// Panics if the report cannot be serialized (should not happen with valid data).
pub fn format_generation(report: &GenerationReport) -> String {
    serde_json::to_string_pretty(report).expect("JSON serialization failed")
}

/// Formats a [`CheckReport`] as pretty-printed JSON.
///
/// # Panics
///
/// Panics if the report cannot be serialized (should not happen with valid data).
pub fn format_check(report: &CheckReport) -> String {
    serde_json::to_string_pretty(report).expect("JSON serialization failed")
}
