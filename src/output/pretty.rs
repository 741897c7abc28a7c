//! Human-readable colored text formatters.
//!
//! Terminal-friendly reports with ANSI color codes: a header, one line per
//! record or finding, and a one-line summary with PASS/FAIL wording.

use crate::batch::GenerationReport;
use crate::check::{CheckReport, Level};
use colored::Colorize;

/// Formats a [`GenerationReport`] as human-readable, ANSI-colored text.
pub fn format_generation(report: &GenerationReport) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "\n{}\n",
        format!("  Page Generation: {}  ", report.records_file)
            .bold()
            .on_blue()
            .white()
    ));
    out.push_str(&format!("  Generated: {}\n\n", report.generated_at));

    out.push_str(&format!("{}\n", "Records".bold().underline()));
    for outcome in &report.outcomes {
        let icon = if outcome.failed() {
            "FAIL".red().bold().to_string()
        } else {
            "  OK".green().bold().to_string()
        };

        let name = outcome.short_name.as_deref().unwrap_or("<unparsed>");
        let detail = match (&outcome.output, &outcome.error) {
            (Some(path), _) => path.display().to_string().dimmed().to_string(),
            (None, Some(error)) => error.clone(),
            (None, None) => String::new(),
        };

        out.push_str(&format!(
            "  [{icon}] line {line:<4} {name:<24} {detail}\n",
            line = outcome.line,
        ));
    }
    out.push('\n');

    let status = if report.passed {
        "PASS".green().bold().to_string()
    } else {
        "FAIL".red().bold().to_string()
    };
    out.push_str(&format!(
        "  {status}  {} rendered, {} failed\n",
        report.rendered, report.failed,
    ));

    out
}

/// Formats a [`CheckReport`] as human-readable, ANSI-colored text.
pub fn format_check(report: &CheckReport) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "\n{}\n",
        format!("  Source Check: {}  ", report.records_file)
            .bold()
            .on_blue()
            .white()
    ));
    out.push_str(&format!(
        "  Checked: {}  ({} records)\n\n",
        report.checked_at, report.records
    ));

    if !report.findings.is_empty() {
        out.push_str(&format!("{}\n", "Findings".bold().underline()));
        for finding in &report.findings {
            let level = match finding.level {
                Level::Error => "ERROR".red().bold().to_string(),
                Level::Warning => " WARN".yellow().bold().to_string(),
            };

            out.push_str(&format!(
                "  [{level}] {rule:<30} {message}\n",
                rule = finding.rule_id.dimmed(),
                message = finding.message,
            ));

            let location = match (&finding.path, finding.line) {
                (Some(p), Some(l)) => format!("{} (record line {l})", p.display()),
                (Some(p), None) => format!("{}", p.display()),
                (None, Some(l)) => format!("record line {l}"),
                (None, None) => String::new(),
            };
            if !location.is_empty() {
                out.push_str(&format!("          {}\n", location.dimmed()));
            }
        }
        out.push('\n');
    }

    let status = if report.passed {
        "PASS".green().bold().to_string()
    } else {
        "FAIL".red().bold().to_string()
    };
    out.push_str(&format!(
        "  {status}  {} errors, {} warnings\n",
        report.errors, report.warnings,
    ));

    out
}
