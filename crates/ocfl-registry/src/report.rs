//! Rendering the outcome of a validation run.
//!
//! The human format is stable for CI log scraping:
//!
//! ```text
//! OCFL extension validation: FAIL
//! <location>: <message>
//! <location>: <message>
//! ```

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::root::{validate_root, RootNotFound};
use crate::validation::ValidationError;

/// Overall result of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Pass,
    Fail,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Pass => "PASS",
            Status::Fail => "FAIL",
        }
    }
}

/// The outcome of validating an `ocfl-root-extensions` directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    /// The root directory does not exist; no validator ran.
    RootMissing { root: PathBuf },
    /// Both validators ran.
    Completed { errors: Vec<ValidationError> },
}

#[derive(Serialize)]
struct JsonReport<'a> {
    status: Status,
    errors: &'a [ValidationError],
}

impl Report {
    /// Validate `root` and capture the outcome.
    pub fn run(root: &Path) -> Self {
        match validate_root(root) {
            Ok(errors) => Report::Completed { errors },
            Err(RootNotFound { root }) => Report::RootMissing { root },
        }
    }

    pub fn status(&self) -> Status {
        if self.passed() {
            Status::Pass
        } else {
            Status::Fail
        }
    }

    pub fn passed(&self) -> bool {
        matches!(self, Report::Completed { errors } if errors.is_empty())
    }

    /// Process exit code: 0 on PASS, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.passed() {
            0
        } else {
            1
        }
    }

    /// Errors found, empty when the root was missing.
    pub fn errors(&self) -> &[ValidationError] {
        match self {
            Report::Completed { errors } => errors,
            Report::RootMissing { .. } => &[],
        }
    }

    /// Render for the terminal, one line per error.
    pub fn render_human(&self) -> String {
        let mut out = format!("OCFL extension validation: {}\n", self.status().as_str());
        match self {
            Report::RootMissing { root } => {
                out.push_str(" - Could not locate ocfl-root-extensions directory at:\n");
                out.push_str(&format!("   - {}\n", root.display()));
                out.push_str("   You can pass --ocfl-extensions-root to override.\n");
            }
            Report::Completed { errors } => {
                for error in errors {
                    out.push_str(&format!("{error}\n"));
                }
            }
        }
        out
    }

    /// Render as a single JSON document.
    pub fn render_json(&self) -> serde_json::Result<String> {
        let missing;
        let errors = match self {
            Report::RootMissing { root } => {
                missing = [ValidationError::new(
                    root,
                    "Could not locate ocfl-root-extensions directory",
                )];
                &missing[..]
            }
            Report::Completed { errors } => errors.as_slice(),
        };
        serde_json::to_string_pretty(&JsonReport {
            status: self.status(),
            errors,
        })
    }
}
