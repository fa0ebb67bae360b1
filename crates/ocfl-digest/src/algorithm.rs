//! The closed set of supported digest algorithms.

use std::fmt;
use std::str::FromStr;

use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha512};

use crate::error::DigestError;
use crate::hex_encode;

/// A digest algorithm accepted by the OCFL extension registries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DigestAlgorithm {
    Md5,
    Sha1,
    Sha256,
    Sha512,
}

impl DigestAlgorithm {
    /// Every supported algorithm, sorted by name.
    pub const ALL: [DigestAlgorithm; 4] = [
        DigestAlgorithm::Md5,
        DigestAlgorithm::Sha1,
        DigestAlgorithm::Sha256,
        DigestAlgorithm::Sha512,
    ];

    /// Algorithm used for packaging-format manifest keys when the config omits it.
    pub const PACKAGING_FORMAT_DEFAULT: DigestAlgorithm = DigestAlgorithm::Md5;

    /// Algorithm used for the inventory sidecar when the config omits it.
    pub const INVENTORY_DEFAULT: DigestAlgorithm = DigestAlgorithm::Sha512;

    /// Lowercase algorithm name, as used in sidecar file extensions.
    pub fn as_str(&self) -> &'static str {
        match self {
            DigestAlgorithm::Md5 => "md5",
            DigestAlgorithm::Sha1 => "sha1",
            DigestAlgorithm::Sha256 => "sha256",
            DigestAlgorithm::Sha512 => "sha512",
        }
    }

    /// Length of the hex encoding of a digest.
    pub fn hex_len(&self) -> usize {
        match self {
            DigestAlgorithm::Md5 => 32,
            DigestAlgorithm::Sha1 => 40,
            DigestAlgorithm::Sha256 => 64,
            DigestAlgorithm::Sha512 => 128,
        }
    }

    /// Compute the lowercase hex digest of `data`.
    pub fn hexdigest(&self, data: &[u8]) -> String {
        match self {
            DigestAlgorithm::Md5 => hex_encode(&Md5::digest(data)),
            DigestAlgorithm::Sha1 => hex_encode(&Sha1::digest(data)),
            DigestAlgorithm::Sha256 => hex_encode(&Sha256::digest(data)),
            DigestAlgorithm::Sha512 => hex_encode(&Sha512::digest(data)),
        }
    }
}

impl FromStr for DigestAlgorithm {
    type Err = DigestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "md5" => Ok(DigestAlgorithm::Md5),
            "sha1" => Ok(DigestAlgorithm::Sha1),
            "sha256" => Ok(DigestAlgorithm::Sha256),
            "sha512" => Ok(DigestAlgorithm::Sha512),
            _ => Err(DigestError::UnsupportedAlgorithm(s.to_string())),
        }
    }
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
