//! Registry error types.

use std::path::PathBuf;

/// Errors raised by operations that need a usable registry.
///
/// Validation itself never returns these; see [`crate::ValidationError`].
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// The registry document is present but unusable.
    #[error("invalid registry at {}: {detail}", path.display())]
    InvalidRegistry { path: PathBuf, detail: String },

    /// JSON parse error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;
