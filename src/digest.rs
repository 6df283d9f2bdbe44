//! Digest algorithms and validated expected digests.
//!
//! An archive source pins its payload under either MD5 (older releases) or
//! SHA-256. The algorithm is configuration, never a hardcoded default, so
//! archives pinned under the weaker algorithm remain verifiable without new
//! sources inheriting it.

use crate::error::{BootstrapError, Result};
use md5::Md5;
use serde::Deserialize;
use sha2::{Digest, Sha256};
use std::fmt;

/// The digest algorithm an archive source is pinned under.
///
/// # Examples
///
/// ```
/// use virtualenv_bootstrap::digest::DigestAlgorithm;
///
/// let hex = DigestAlgorithm::Sha256.hex_digest(b"abc");
/// assert_eq!(
///     hex,
///     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DigestAlgorithm {
    /// MD5, retained only to verify archives pinned under it.
    Md5,
    /// SHA-256.
    Sha256,
}

impl DigestAlgorithm {
    /// Expected length of a hex-encoded digest for this algorithm.
    #[must_use]
    pub fn hex_len(self) -> usize {
        match self {
            Self::Md5 => 32,
            Self::Sha256 => 64,
        }
    }

    /// Compute the lowercase hex digest of `bytes`.
    #[must_use]
    pub fn hex_digest(self, bytes: &[u8]) -> String {
        match self {
            Self::Md5 => format!("{:x}", Md5::digest(bytes)),
            Self::Sha256 => format!("{:x}", Sha256::digest(bytes)),
        }
    }
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Md5 => write!(f, "md5"),
            Self::Sha256 => write!(f, "sha256"),
        }
    }
}

/// A validated hex-encoded digest an archive source is pinned to.
///
/// The hex string is normalised to lowercase on construction, so comparison
/// against a computed digest is case-insensitive.
///
/// # Examples
///
/// ```
/// use virtualenv_bootstrap::digest::{DigestAlgorithm, ExpectedDigest};
///
/// let digest = ExpectedDigest::new(DigestAlgorithm::Md5, "900150983CD24FB0D6963F7D28E17F72")
///     .expect("valid digest");
/// assert!(digest.verify(b"abc").is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpectedDigest {
    algorithm: DigestAlgorithm,
    hex: String,
}

impl ExpectedDigest {
    /// Validate and normalise a hex digest string for `algorithm`.
    ///
    /// # Errors
    ///
    /// Returns [`BootstrapError::InvalidDigest`] if the string is not hex of
    /// the algorithm's expected length.
    pub fn new(algorithm: DigestAlgorithm, hex: &str) -> Result<Self> {
        if hex.len() != algorithm.hex_len() {
            return Err(BootstrapError::InvalidDigest {
                algorithm,
                reason: format!(
                    "expected {} hex characters, got {}",
                    algorithm.hex_len(),
                    hex.len()
                ),
            });
        }
        if let Some(bad) = hex.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(BootstrapError::InvalidDigest {
                algorithm,
                reason: format!("non-hex character '{bad}'"),
            });
        }
        Ok(Self {
            algorithm,
            hex: hex.to_ascii_lowercase(),
        })
    }

    /// Return the algorithm this digest was computed with.
    #[must_use]
    pub fn algorithm(&self) -> DigestAlgorithm {
        self.algorithm
    }

    /// Return the normalised hex digest string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.hex
    }

    /// Verify that `bytes` hash to this digest.
    ///
    /// # Errors
    ///
    /// Returns [`BootstrapError::DigestMismatch`] with both the computed and
    /// expected values when the digests differ.
    pub fn verify(&self, bytes: &[u8]) -> Result<()> {
        let computed = self.algorithm.hex_digest(bytes);
        if computed != self.hex {
            return Err(BootstrapError::DigestMismatch {
                algorithm: self.algorithm,
                computed,
                expected: self.hex.clone(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for ExpectedDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.algorithm, self.hex)
    }
}
