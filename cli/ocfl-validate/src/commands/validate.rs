//! Validate an `ocfl-root-extensions` directory and print the report.

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use clap::ValueEnum;
use ocfl_registry::Report;

/// Output format of the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// `OCFL extension validation: PASS|FAIL` followed by one line per error
    Human,
    /// A single JSON document with `status` and `errors`
    Json,
}

/// Validate `root`, write the report to `out` and return the exit code.
pub fn run(root: &Path, format: Format, out: &mut impl Write) -> Result<i32> {
    let report = Report::run(root);

    match format {
        Format::Human => out.write_all(report.render_human().as_bytes())?,
        Format::Json => writeln!(out, "{}", report.render_json()?)?,
    }
    out.flush()?;

    if !report.passed() {
        tracing::info!(errors = report.errors().len(), "validation failed");
    }
    Ok(report.exit_code())
}
