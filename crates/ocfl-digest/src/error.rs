//! Digest error types.

/// Errors that can occur while computing a digest.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DigestError {
    /// The algorithm name is not one of the supported set.
    #[error("Unsupported digest algorithm: {0}")]
    UnsupportedAlgorithm(String),
}

/// Result type alias for digest operations.
pub type Result<T> = std::result::Result<T, DigestError>;
