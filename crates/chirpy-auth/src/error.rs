//! Fine-grained authentication failures.
//!
//! Every credential or token variant collapses into the same external "Unauthorized"
//! signal when converted into an [`AppError`]. The distinction survives only
//! in logs. The remaining variants are server faults.

use thiserror::Error;
use tracing::{debug, error};

use chirpy_core::error::AppError;

use crate::credential::CredentialScheme;

/// Message returned to clients for every credential or token failure.
pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized";

/// Errors raised by the credential and session subsystem.
#[derive(Debug, Error)]
pub enum AuthError {
    /// No header value carried a well-formed credential of the requested scheme.
    #[error("no {0} credential in Authorization header")]
    CredentialAbsent(CredentialScheme),

    /// Login or refresh was refused. `reason` is for diagnostics only.
    #[error("authentication failed: {reason}")]
    AuthenticationFailed {
        /// Internal cause (unknown email, password mismatch, revoked token, ...).
        reason: &'static str,
    },

    /// The access token could not be parsed, failed its signature check,
    /// or named an unexpected algorithm or issuer.
    #[error("access token malformed: {0}")]
    TokenMalformed(String),

    /// The access token's `exp` is not in the future.
    #[error("access token expired")]
    TokenExpired,

    /// The access token's `sub` claim is not a user identifier.
    #[error("access token subject is not a valid user id")]
    TokenSubjectInvalid,

    /// The refresh token does not exist in the store.
    #[error("refresh token not found")]
    TokenNotFound,

    /// The presented service API key does not match the configured one.
    #[error("service API key mismatch")]
    ServiceKeyMismatch,

    /// Password hashing or hash parsing failed.
    #[error("password hashing failed: {0}")]
    HashingFailure(String),

    /// Access token signing failed.
    #[error("access token signing failed: {0}")]
    SigningFailure(String),

    /// The OS random number generator could not supply token bytes.
    #[error("randomness unavailable: {0}")]
    RandomnessUnavailable(String),

    /// The storage collaborator failed.
    #[error(transparent)]
    Store(#[from] AppError),
}

impl AuthError {
    /// Whether this failure is a client credential problem rather than a server fault.
    pub fn is_unauthorized(&self) -> bool {
        !matches!(
            self,
            Self::HashingFailure(_)
                | Self::SigningFailure(_)
                | Self::RandomnessUnavailable(_)
                | Self::Store(_)
        )
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Store(inner) => inner,
            rejected if rejected.is_unauthorized() => {
                debug!(reason = %rejected, "Credential rejected");
                AppError::authentication(UNAUTHORIZED_MESSAGE)
            }
            fault => {
                error!(error = %fault, "Credential processing failed");
                AppError::internal("Credential processing failed")
            }
        }
    }
}
