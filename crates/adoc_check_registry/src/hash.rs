//! SHA-256 digests for downloaded artifacts.

use sha2::{Digest, Sha256};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HashError {
    #[error("Hash mismatch: expected {expected}, actual {actual}")]
    Mismatch { expected: String, actual: String },

    #[error("Invalid SHA-256 digest: {0}")]
    InvalidFormat(String),
}

pub struct HashVerifier;

impl HashVerifier {
    /// Lowercase hex SHA-256 of `bytes`.
    pub fn compute(bytes: &[u8]) -> String {
        hex::encode(Sha256::digest(bytes))
    }

    /// Checks `bytes` against a hex digest, ignoring case.
    pub fn verify(bytes: &[u8], expected: &str) -> Result<(), HashError> {
        let expected = expected.trim();
        if expected.len() != 64 || !expected.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(HashError::InvalidFormat(expected.to_string()));
        }

        let actual = Self::compute(bytes);
        if !actual.eq_ignore_ascii_case(expected) {
            return Err(HashError::Mismatch {
                expected: expected.to_ascii_lowercase(),
                actual,
            });
        }
        Ok(())
    }
}
