//! Access token issuance and verification (HMAC-SHA256).

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use tracing::debug;

use chirpy_core::types::UserId;

use crate::error::AuthError;

use super::claims::{AccessClaims, ISSUER};

/// Creates and verifies stateless access tokens with a process-wide secret.
///
/// Only `HS256` is accepted on verification. A token whose header names
/// any other algorithm is rejected outright, whatever its signature.
#[derive(Clone)]
pub struct AccessTokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for AccessTokenCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessTokenCodec")
            .field("validation", &self.validation)
            .finish()
    }
}

impl AccessTokenCodec {
    /// Creates a codec bound to `secret`.
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 0;
        validation.set_issuer(&[ISSUER]);
        validation.set_required_spec_claims(&["exp", "sub", "iss"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Issues a token for `subject` expiring `ttl` from now.
    ///
    /// No lifetime floor is applied here; callers pass an
    /// [`AccessTtl`](super::AccessTtl) when issuing for real sessions.
    pub fn issue(&self, subject: UserId, ttl: Duration) -> Result<String, AuthError> {
        let iat = Utc::now().timestamp();
        let claims = AccessClaims {
            iss: ISSUER.to_string(),
            sub: subject.to_string(),
            iat,
            exp: iat.saturating_add(ttl.num_seconds()),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AuthError::SigningFailure(e.to_string()))
    }

    /// Verifies signature, algorithm, issuer and expiry, then returns the subject.
    pub fn verify(&self, token: &str) -> Result<UserId, AuthError> {
        let claims = self.decode_claims(token)?;

        // The library accepts `exp == now`; a token is only valid strictly before it.
        if claims.is_expired_at(Utc::now()) {
            return Err(AuthError::TokenExpired);
        }

        claims
            .sub
            .parse::<UserId>()
            .map_err(|_| AuthError::TokenSubjectInvalid)
    }

    fn decode_claims(&self, token: &str) -> Result<AccessClaims, AuthError> {
        let data = decode::<AccessClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                JwtErrorKind::ExpiredSignature => AuthError::TokenExpired,
                JwtErrorKind::InvalidAlgorithm => {
                    debug!("Access token names an unexpected algorithm");
                    AuthError::TokenMalformed("unexpected algorithm".to_string())
                }
                _ => AuthError::TokenMalformed(format!("{:?}", e.kind())),
            })?;
        Ok(data.claims)
    }
}
