//! Batch generation driver.
//!
//! Feeds a records file through a [`PageGenerator`] line by line and
//! collects per-record outcomes into a [`GenerationReport`]. One record's
//! failure never affects another record's output; whether it aborts the
//! rest of the batch is the caller's choice via `fail_fast`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::generator::PageGenerator;

/// Result of rendering one record line.
#[derive(Debug, serde::Serialize)]
pub struct RecordOutcome {
    /// 1-indexed line number in the records file.
    pub line: usize,
    /// Short name of the record, when it could be determined.
    pub short_name: Option<String>,
    /// Path of the written page on success.
    pub output: Option<PathBuf>,
    /// Error description on failure.
    pub error: Option<String>,
}

impl RecordOutcome {
    pub fn failed(&self) -> bool {
        self.error.is_some()
    }
}

/// Summary of one batch generation run.
#[derive(Debug, serde::Serialize)]
pub struct GenerationReport {
    pub records_file: String,
    pub generated_at: String,
    pub outcomes: Vec<RecordOutcome>,
    pub rendered: usize,
    pub failed: usize,
    pub passed: bool,
}

impl GenerationReport {
    pub fn from_outcomes(records_file: &Path, outcomes: Vec<RecordOutcome>) -> Self {
        // Single pass: count successes and failures together.
        let (rendered, failed) = outcomes.iter().fold((0, 0), |(ok, err), o| {
            if o.failed() {
                (ok, err + 1)
            } else {
                (ok + 1, err)
            }
        });

        GenerationReport {
            records_file: records_file.display().to_string(),
            generated_at: chrono::Utc::now().to_rfc3339(),
            outcomes,
            rendered,
            failed,
            passed: failed == 0,
        }
    }
}

/// Runs the generator over every record line in `records_path`.
///
/// Blank lines are skipped. With `fail_fast` set, processing stops at the
/// first failed record; otherwise failures are recorded and subsequent
/// lines are still rendered.
///
/// # Errors
///
/// Returns `Err` only when the records file itself cannot be read —
/// per-record failures are captured inside the report.
pub fn run_batch(
    records_path: &Path,
    generator: &PageGenerator,
    fail_fast: bool,
) -> Result<GenerationReport, std::io::Error> {
    let content = fs::read_to_string(records_path)?;

    let mut outcomes = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let line_no = idx + 1;

        match generator.render_line(line) {
            Ok(path) => {
                let short_name = path
                    .file_stem()
                    .map(|s| s.to_string_lossy().to_string());
                outcomes.push(RecordOutcome {
                    line: line_no,
                    short_name,
                    output: Some(path),
                    error: None,
                });
            }
            Err(e) => {
                // Best-effort label: the short-name field, when present.
                let short_name = line
                    .split('\t')
                    .nth(1)
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(String::from);
                outcomes.push(RecordOutcome {
                    line: line_no,
                    short_name,
                    output: None,
                    error: Some(e.to_string()),
                });
                if fail_fast {
                    break;
                }
            }
        }
    }

    Ok(GenerationReport::from_outcomes(records_path, outcomes))
}
