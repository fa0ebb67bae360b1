//! Hex digests for OCFL extension registries.
//!
//! The registries name their digest algorithms in configuration
//! (`packagingFormatDigestAlgorithm`, `digestAlgorithm`). Only a fixed set of
//! four algorithms is accepted, looked up case-insensitively. An unknown name
//! is always an error and is never replaced by a default.

pub mod algorithm;
pub mod content;
pub mod error;

pub use algorithm::DigestAlgorithm;
pub use content::ContentDigest;
pub use error::{DigestError, Result};

/// Compute the lowercase hex digest of `data` under the algorithm called `name`.
///
/// `name` is matched case-insensitively against `md5`, `sha1`, `sha256` and
/// `sha512`.
pub fn hexdigest(name: &str, data: &[u8]) -> Result<String> {
    let algorithm: DigestAlgorithm = name.parse()?;
    Ok(algorithm.hexdigest(data))
}

/// Encode bytes as lowercase hex string.
pub(crate) fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hexdigest_by_name() {
        assert_eq!(
            hexdigest("md5", b"abc").unwrap(),
            "900150983cd24fb0d6963f7d28e17f72"
        );
        assert_eq!(
            hexdigest("SHA1", b"abc").unwrap(),
            "a9993e364706816aba3e25717850c26c9cd0d89d"
        );
    }

    #[test]
    fn hexdigest_lengths() {
        for (name, len) in [("md5", 32), ("sha1", 40), ("sha256", 64), ("sha512", 128)] {
            let hex = hexdigest(name, b"some bytes").unwrap();
            assert_eq!(hex.len(), len, "{name}");
            assert!(hex
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
        }
    }

    #[test]
    fn hexdigest_deterministic() {
        let h1 = hexdigest("sha512", b"hello world").unwrap();
        let h2 = hexdigest("sha512", b"hello world").unwrap();
        assert_eq!(h1, h2);
    }

    #[test]
    fn unsupported_algorithm_is_an_error() {
        let err = hexdigest("sha3-256", b"data").unwrap_err();
        assert!(matches!(err, DigestError::UnsupportedAlgorithm(ref n) if n == "sha3-256"));
        assert_eq!(err.to_string(), "Unsupported digest algorithm: sha3-256");
    }

    #[test]
    fn empty_name_is_not_defaulted() {
        assert!(hexdigest("", b"data").is_err());
    }
}
