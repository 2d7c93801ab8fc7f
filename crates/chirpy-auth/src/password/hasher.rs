//! Argon2id password hashing and verification.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher as ArgonHasher, PasswordVerifier, SaltString},
};
use rand::rngs::OsRng;

use crate::error::AuthError;

/// Handles password hashing and verification using Argon2id.
///
/// Uses the `argon2` crate defaults (Argon2id v19, 19 MiB, t=2, p=1) and
/// a fresh random salt per hash, stored inside the PHC string.
#[derive(Debug, Clone, Default)]
pub struct PasswordHasher;

impl PasswordHasher {
    /// Creates a new password hasher instance.
    pub fn new() -> Self {
        Self
    }

    /// Hashes a plaintext password with a random salt.
    pub fn hash(&self, plaintext: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);

        let hash = Argon2::default()
            .hash_password(plaintext.as_bytes(), &salt)
            .map_err(|e| AuthError::HashingFailure(e.to_string()))?;

        Ok(hash.to_string())
    }

    /// Verifies a candidate password against a stored PHC hash.
    ///
    /// Returns `Ok(false)` on mismatch. The digest comparison inside
    /// `argon2` is constant-time. A stored hash that cannot be parsed is a
    /// server fault, not a mismatch.
    pub fn verify(&self, hash: &str, candidate: &str) -> Result<bool, AuthError> {
        let parsed = PasswordHash::new(hash)
            .map_err(|e| AuthError::HashingFailure(format!("invalid stored hash: {e}")))?;

        match Argon2::default().verify_password(candidate.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AuthError::HashingFailure(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify() {
        let hasher = PasswordHasher::new();
        for password in ["password", "admin", "TestingPassword123", ""] {
            let hash = hasher.hash(password).unwrap();
            assert!(hasher.verify(&hash, password).unwrap());
            assert!(!hasher.verify(&hash, "wrongpassword").unwrap());
        }
    }

    #[test]
    fn test_same_input_different_salt() {
        let hasher = PasswordHasher::new();
        let a = hasher.hash("04234").unwrap();
        let b = hasher.hash("04234").unwrap();
        assert_ne!(a, b);
        assert!(a.starts_with("$argon2id$"));
    }

    #[test]
    fn test_prefix_of_password_rejected() {
        let hasher = PasswordHasher::new();
        let hash = hasher.hash("correct horse battery staple").unwrap();
        assert!(!hasher.verify(&hash, "correct horse").unwrap());
        assert!(!hasher.verify(&hash, "correct horse battery staple ").unwrap());
    }

    #[test]
    fn test_garbage_hash_is_server_fault() {
        let hasher = PasswordHasher::new();
        let err = hasher.verify("unset", "anything").unwrap_err();
        assert!(matches!(err, AuthError::HashingFailure(_)));
    }
}
