//! Read-only validation sweep over a records file and its source trees.
//!
//! `lintdoc check` runs every rule below without writing anything, so a CI
//! job can fail fast before a generation run would. Filesystem checks are
//! per-record and independent, so they run in parallel; the generator's
//! single-threaded rendering path is not involved here at all.
//!
//! # Rules
//!
//! | ID | Level | What it checks |
//! |----|-------|----------------|
//! | `records/malformed-record` | Error | Line parses into a valid record |
//! | `records/duplicate-short-name` | Error | No two records share an output file |
//! | `sources/missing-example` | Error | Example snippet exists at the derived path |
//! | `sources/missing-explanation` | Error | Inline field or sidecar provides an explanation |
//! | `sources/shadowed-sidecar` | Warning | Sidecar present but the inline field wins |
//! | `sources/orphan-sidecar` | Warning | Sidecar file not referenced by any record |

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use walkdir::WalkDir;

use crate::paths;
use crate::record::BugPatternRecord;

pub const RULE_MALFORMED_RECORD: &str = "records/malformed-record";
pub const RULE_DUPLICATE_SHORT_NAME: &str = "records/duplicate-short-name";
pub const RULE_MISSING_EXAMPLE: &str = "sources/missing-example";
pub const RULE_MISSING_EXPLANATION: &str = "sources/missing-explanation";
pub const RULE_SHADOWED_SIDECAR: &str = "sources/shadowed-sidecar";
pub const RULE_ORPHAN_SIDECAR: &str = "sources/orphan-sidecar";

/// Finding severity for the check sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Error,
    Warning,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
        }
    }
}

/// One problem found by the sweep.
#[derive(Debug, Clone, serde::Serialize)]
pub struct CheckFinding {
    pub rule_id: String,
    pub level: Level,
    pub message: String,
    /// 1-indexed line in the records file, when the finding is tied to a record.
    pub line: Option<usize>,
    /// Filesystem path involved, when there is one.
    pub path: Option<PathBuf>,
}

/// Summary of one check run.
#[derive(Debug, serde::Serialize)]
pub struct CheckReport {
    pub records_file: String,
    pub checked_at: String,
    /// Number of non-blank record lines examined.
    pub records: usize,
    pub findings: Vec<CheckFinding>,
    pub errors: usize,
    pub warnings: usize,
    pub passed: bool,
}

impl CheckReport {
    pub fn from_findings(
        records_file: &Path,
        records: usize,
        findings: Vec<CheckFinding>,
        strict: bool,
    ) -> Self {
        // Single pass over both counters.
        let (errors, warnings) = findings.iter().fold((0, 0), |(e, w), f| match f.level {
            Level::Error => (e + 1, w),
            Level::Warning => (e, w + 1),
        });

        let passed = errors == 0 && (!strict || warnings == 0);

        CheckReport {
            records_file: records_file.display().to_string(),
            checked_at: chrono::Utc::now().to_rfc3339(),
            records,
            findings,
            errors,
            warnings,
            passed,
        }
    }
}

fn emit(
    findings: &mut Vec<CheckFinding>,
    rule_id: &str,
    level: Level,
    message: String,
    line: Option<usize>,
    path: Option<PathBuf>,
) {
    findings.push(CheckFinding {
        rule_id: rule_id.to_string(),
        level,
        message,
        line,
        path,
    });
}

/// Runs the full validation sweep.
///
/// # Errors
///
/// Returns `Err` only when the records file itself cannot be read; every
/// per-record problem becomes a [`CheckFinding`] instead.
pub fn run_check(
    records_path: &Path,
    examples_dir: &Path,
    explanations_dir: &Path,
    strict: bool,
) -> Result<CheckReport, std::io::Error> {
    let content = fs::read_to_string(records_path)?;

    let mut findings = Vec::new();
    let mut parsed: Vec<(usize, BugPatternRecord)> = Vec::new();
    let mut examined = 0usize;

    for (idx, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        examined += 1;
        let line_no = idx + 1;
        match BugPatternRecord::parse(line) {
            Ok(record) => parsed.push((line_no, record)),
            Err(e) => emit(
                &mut findings,
                RULE_MALFORMED_RECORD,
                Level::Error,
                e.to_string(),
                Some(line_no),
                None,
            ),
        }
    }

    // Output collisions. Two records with the same short name would silently
    // overwrite each other's page.
    let mut first_seen: HashMap<&str, usize> = HashMap::new();
    for (line_no, record) in &parsed {
        if let Some(first) = first_seen.insert(record.short_name.as_str(), *line_no) {
            emit(
                &mut findings,
                RULE_DUPLICATE_SHORT_NAME,
                Level::Error,
                format!(
                    "short name {:?} already used on line {first}",
                    record.short_name
                ),
                Some(*line_no),
                None,
            );
        }
    }

    // Per-record filesystem checks are read-only and independent, so they
    // run in parallel. Collect preserves record order.
    let fs_findings: Vec<CheckFinding> = parsed
        .par_iter()
        .flat_map_iter(|(line_no, record)| check_record_sources(
            *line_no,
            record,
            examples_dir,
            explanations_dir,
        ))
        .collect();
    findings.extend(fs_findings);

    findings.extend(find_orphan_sidecars(explanations_dir, &parsed));

    Ok(CheckReport::from_findings(
        records_path,
        examined,
        findings,
        strict,
    ))
}

fn check_record_sources(
    line_no: usize,
    record: &BugPatternRecord,
    examples_dir: &Path,
    explanations_dir: &Path,
) -> Vec<CheckFinding> {
    let mut out = Vec::new();

    let example = paths::example_path(examples_dir, &record.qualified_name);
    if !example.is_file() {
        emit(
            &mut out,
            RULE_MISSING_EXAMPLE,
            Level::Error,
            format!("no example snippet for {}", record.short_name),
            Some(line_no),
            Some(example),
        );
    }

    let sidecar = paths::sidecar_path(explanations_dir, &record.short_name);
    let sidecar_usable = sidecar.is_file()
        && fs::read_to_string(&sidecar)
            .map(|c| !c.trim().is_empty())
            .unwrap_or(false);

    if record.explanation.is_empty() {
        if !sidecar_usable {
            emit(
                &mut out,
                RULE_MISSING_EXPLANATION,
                Level::Error,
                format!(
                    "no explanation for {}: inline field is empty and no sidecar file exists",
                    record.short_name
                ),
                Some(line_no),
                Some(sidecar),
            );
        }
    } else if sidecar.is_file() {
        emit(
            &mut out,
            RULE_SHADOWED_SIDECAR,
            Level::Warning,
            format!(
                "sidecar for {} is ignored because the inline explanation field is non-empty",
                record.short_name
            ),
            Some(line_no),
            Some(sidecar),
        );
    }

    out
}

/// Sidecar `.md` files that no record references.
fn find_orphan_sidecars(
    explanations_dir: &Path,
    parsed: &[(usize, BugPatternRecord)],
) -> Vec<CheckFinding> {
    if !explanations_dir.is_dir() {
        return vec![];
    }

    let referenced: HashSet<&str> = parsed
        .iter()
        .map(|(_, r)| r.short_name.as_str())
        .collect();

    let mut orphans: Vec<PathBuf> = WalkDir::new(explanations_dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path().to_path_buf())
        .filter(|p| {
            p.extension().map(|ext| ext == "md").unwrap_or(false)
                && p.file_stem()
                    .map(|stem| !referenced.contains(stem.to_string_lossy().as_ref()))
                    .unwrap_or(false)
        })
        .collect();

    // Directory iteration order is platform-dependent; sort for stable reports.
    orphans.sort();

    let mut findings = Vec::new();
    for path in orphans {
        emit(
            &mut findings,
            RULE_ORPHAN_SIDECAR,
            Level::Warning,
            "sidecar file is not referenced by any record".to_string(),
            None,
            Some(path),
        );
    }
    findings
}
