//! A digest value tagged with the algorithm that produced it.

use crate::algorithm::DigestAlgorithm;

/// A lowercase hex digest together with its algorithm.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentDigest {
    algorithm: DigestAlgorithm,
    hex: String,
}

impl ContentDigest {
    /// Compute the digest of the given data.
    pub fn compute(algorithm: DigestAlgorithm, data: &[u8]) -> Self {
        ContentDigest {
            algorithm,
            hex: algorithm.hexdigest(data),
        }
    }

    /// The algorithm this digest was computed with.
    pub fn algorithm(&self) -> DigestAlgorithm {
        self.algorithm
    }

    /// Get the hex string representation.
    pub fn as_str(&self) -> &str {
        &self.hex
    }

    /// Verify that the given data matches this digest.
    pub fn verify(&self, data: &[u8]) -> bool {
        ContentDigest::compute(self.algorithm, data) == *self
    }

    /// Whether `token` is exactly this digest's hex string.
    ///
    /// Comparison is case-sensitive: sidecar files must carry lowercase hex.
    pub fn matches_hex(&self, token: &str) -> bool {
        self.hex == token
    }
}

impl std::fmt::Display for ContentDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.hex)
    }
}
