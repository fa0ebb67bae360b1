//! The unit of validation output.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// A single problem found in a registry.
///
/// `location` is the file or directory the problem pertains to. Several
/// errors may share a location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub location: PathBuf,
    pub message: String,
}

impl ValidationError {
    pub fn new(location: impl AsRef<Path>, message: impl Into<String>) -> Self {
        ValidationError {
            location: location.as_ref().to_path_buf(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.location.display(), self.message)
    }
}
