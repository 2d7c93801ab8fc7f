//! Static service API key check.

use sha2::{Digest, Sha256};

use crate::error::AuthError;

/// Compares presented API keys against the configured one.
///
/// Both sides are reduced to SHA-256 digests before comparison so the
/// comparison time does not depend on how much of the key an attacker
/// guessed, nor on its length.
#[derive(Clone)]
pub struct ServiceKeyVerifier {
    expected: Option<[u8; 32]>,
}

impl std::fmt::Debug for ServiceKeyVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceKeyVerifier")
            .field("configured", &self.expected.is_some())
            .finish()
    }
}

impl ServiceKeyVerifier {
    /// An empty configured key disables the service credential entirely.
    pub fn new(configured_key: &str) -> Self {
        let expected = (!configured_key.is_empty()).then(|| digest(configured_key));
        Self { expected }
    }

    /// Succeeds only if `presented` equals the configured key.
    pub fn verify(&self, presented: &str) -> Result<(), AuthError> {
        let Some(expected) = self.expected else {
            return Err(AuthError::ServiceKeyMismatch);
        };
        let presented = digest(presented);
        let diff = expected
            .iter()
            .zip(presented.iter())
            .fold(0u8, |acc, (a, b)| acc | (a ^ b));
        if diff == 0 {
            Ok(())
        } else {
            Err(AuthError::ServiceKeyMismatch)
        }
    }
}

fn digest(value: &str) -> [u8; 32] {
    Sha256::digest(value.as_bytes()).into()
}
