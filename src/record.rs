//! Bug-pattern metadata records.
//!
//! One record describes a single static-analysis rule and arrives as one
//! line of exactly [`RECORD_FIELD_COUNT`] tab-separated fields in a fixed
//! positional order. [`BugPatternRecord::parse`] is the only constructor:
//! it strips the record terminator, checks the arity once, and validates
//! the identifier fields before anything downstream touches the filesystem.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::error::RecordError;

/// Number of tab-separated fields in a record line.
pub const RECORD_FIELD_COUNT: usize = 10;

// Positional schema. The indices are the contract with the metadata
// emitter; parse() reads fields exclusively through these names.
const F_QUALIFIED_NAME: usize = 0;
const F_SHORT_NAME: usize = 1;
const F_ALT_NAMES: usize = 2;
const F_PROVIDER_GROUP: usize = 3;
const F_SEVERITY: usize = 4;
const F_MATURITY: usize = 5;
const F_SUPPRESSION_ANNOTATION: usize = 6;
const F_SUPPRESSION_POLICY: usize = 7;
const F_SUMMARY: usize = 8;
const F_EXPLANATION: usize = 9;

/// Dotted identifier with at least two segments (`com.acme.lint.DeadStore`).
static RE_QUALIFIED_NAME: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*(\.[A-Za-z_$][A-Za-z0-9_$]*)+$").unwrap()
});

/// Filename-safe display name. The short name becomes `<name>.md` in the
/// output directory, so path separators and dot-segments are rejected here.
static RE_SHORT_NAME: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^[A-Za-z0-9_-]+$").unwrap());

/// Rule severity, in the upper-case wire form used by the metadata emitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Error,
    Warning,
    Suggestion,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "ERROR"),
            Severity::Warning => write!(f, "WARNING"),
            Severity::Suggestion => write!(f, "SUGGESTION"),
        }
    }
}

impl FromStr for Severity {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ERROR" => Ok(Severity::Error),
            "WARNING" => Ok(Severity::Warning),
            "SUGGESTION" => Ok(Severity::Suggestion),
            other => Err(RecordError::InvalidField {
                field: "severity",
                value: other.to_string(),
            }),
        }
    }
}

/// Rule maturity, in the upper-case wire form used by the metadata emitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Maturity {
    Mature,
    Experimental,
}

impl fmt::Display for Maturity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Maturity::Mature => write!(f, "MATURE"),
            Maturity::Experimental => write!(f, "EXPERIMENTAL"),
        }
    }
}

impl FromStr for Maturity {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MATURE" => Ok(Maturity::Mature),
            "EXPERIMENTAL" => Ok(Maturity::Experimental),
            other => Err(RecordError::InvalidField {
                field: "maturity",
                value: other.to_string(),
            }),
        }
    }
}

/// Metadata for one bug-pattern rule, parsed from a single record line.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct BugPatternRecord {
    /// Dotted identifier of the rule's implementing class.
    pub qualified_name: String,
    /// Display name; also the output file stem.
    pub short_name: String,
    /// Alternate or legacy names, possibly empty.
    pub alt_names: Vec<String>,
    /// Originating tool or team.
    pub provider_group: String,
    pub severity: Severity,
    pub maturity: Maturity,
    /// Name of the suppression mechanism (e.g. `SUPPRESS_WARNINGS`).
    pub suppression_annotation: String,
    /// Fully-qualified suppression policy identifier.
    pub suppression_policy: String,
    /// One-line description.
    pub summary: String,
    /// Long-form description; empty means "look for a sidecar file".
    pub explanation: String,
}

impl BugPatternRecord {
    /// Parses one record line.
    ///
    /// The trailing record terminator (`\n` or `\r\n`) is stripped before
    /// splitting, so callers may feed lines straight from a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::FieldCount`] when the line does not split into
    /// exactly [`RECORD_FIELD_COUNT`] fields, and [`RecordError::InvalidField`]
    /// when the qualified name, short name, severity, or maturity fail
    /// validation.
    pub fn parse(line: &str) -> Result<BugPatternRecord, RecordError> {
        let line = line.trim_end_matches(['\r', '\n']);
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() != RECORD_FIELD_COUNT {
            return Err(RecordError::FieldCount {
                expected: RECORD_FIELD_COUNT,
                found: fields.len(),
            });
        }

        let qualified_name = fields[F_QUALIFIED_NAME];
        if !RE_QUALIFIED_NAME.is_match(qualified_name) {
            return Err(RecordError::InvalidField {
                field: "qualified name",
                value: qualified_name.to_string(),
            });
        }

        let short_name = fields[F_SHORT_NAME];
        if !RE_SHORT_NAME.is_match(short_name) {
            return Err(RecordError::InvalidField {
                field: "short name",
                value: short_name.to_string(),
            });
        }

        let alt_names: Vec<String> = fields[F_ALT_NAMES]
            .split(',')
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string)
            .collect();

        Ok(BugPatternRecord {
            qualified_name: qualified_name.to_string(),
            short_name: short_name.to_string(),
            alt_names,
            provider_group: fields[F_PROVIDER_GROUP].to_string(),
            severity: fields[F_SEVERITY].parse()?,
            maturity: fields[F_MATURITY].parse()?,
            suppression_annotation: fields[F_SUPPRESSION_ANNOTATION].to_string(),
            suppression_policy: fields[F_SUPPRESSION_POLICY].to_string(),
            summary: fields[F_SUMMARY].to_string(),
            explanation: fields[F_EXPLANATION].to_string(),
        })
    }
}
