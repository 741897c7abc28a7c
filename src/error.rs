//! Error types for page generation.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while parsing a single metadata record.
#[derive(Debug, Error)]
pub enum RecordError {
    /// The line does not split into the expected number of tab-separated fields.
    #[error("expected {expected} tab-separated fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    /// A field failed validation (bad identifier, unknown enum value, ...).
    #[error("invalid {field} value: {value:?}")]
    InvalidField { field: &'static str, value: String },
}

/// Errors raised while rendering one record into a wiki page.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The record line itself was malformed.
    #[error(transparent)]
    Record(#[from] RecordError),

    /// No example snippet exists at the derived path.
    #[error("example file not found: {0}")]
    MissingExample(PathBuf),

    /// The inline explanation field is empty and no sidecar file exists.
    #[error("no explanation for {0}: inline field is empty and no sidecar file exists")]
    MissingExplanation(String),

    /// I/O failure reading a source file or writing the output page.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
