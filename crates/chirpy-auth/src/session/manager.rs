//! Session orchestration over the hasher, codec and refresh store.

use std::sync::Arc;

use chrono::Duration;
use http::HeaderMap;
use tracing::{debug, info, warn};

use chirpy_core::config::AuthConfig;
use chirpy_core::types::UserId;
use chirpy_database::traits::{RefreshTokenRepository, UserDirectory};
use chirpy_entity::session::RefreshToken;
use chirpy_entity::user::User;

use crate::credential::{ServiceKeyVerifier, extract_api_key, extract_bearer};
use crate::error::AuthError;
use crate::jwt::{AccessTokenCodec, AccessTtl};
use crate::password::PasswordHasher;
use crate::refresh::RefreshTokenStore;

/// Outcome of a successful login.
#[derive(Debug, Clone)]
pub struct LoginResult {
    /// The authenticated account.
    pub user: User,
    /// Signed access token.
    pub access_token: String,
    /// Newly persisted refresh token.
    pub refresh_token: RefreshToken,
}

/// Orchestrates authentication flows.
#[derive(Debug, Clone)]
pub struct SessionManager {
    users: Arc<dyn UserDirectory>,
    refresh_tokens: RefreshTokenStore,
    hasher: PasswordHasher,
    codec: AccessTokenCodec,
    service_key: ServiceKeyVerifier,
    access_ttl: AccessTtl,
    refresh_ttl: Duration,
}

impl SessionManager {
    /// Creates a session manager from auth configuration and its collaborators.
    pub fn new(
        config: &AuthConfig,
        users: Arc<dyn UserDirectory>,
        refresh_tokens: Arc<dyn RefreshTokenRepository>,
    ) -> Self {
        let refresh_days = i64::try_from(config.refresh_token_ttl_days).unwrap_or(i64::MAX);
        Self {
            users,
            refresh_tokens: RefreshTokenStore::new(refresh_tokens),
            hasher: PasswordHasher::new(),
            codec: AccessTokenCodec::new(config.jwt_secret.as_bytes()),
            service_key: ServiceKeyVerifier::new(&config.polka_api_key),
            access_ttl: AccessTtl::new(config.access_token_ttl_seconds),
            refresh_ttl: Duration::try_days(refresh_days).unwrap_or(Duration::MAX),
        }
    }

    /// Verifies email and password, then issues an access and refresh token.
    ///
    /// Unknown email and wrong password fail identically.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResult, AuthError> {
        let Some(user) = self.users.find_by_email(email).await? else {
            // Spend the same Argon2 work as the known-user path.
            let _ = self.hasher.hash(password)?;
            debug!("Login for unknown email");
            return Err(AuthError::AuthenticationFailed {
                reason: "unknown email",
            });
        };

        let matched = match self.hasher.verify(&user.hashed_password, password) {
            Ok(matched) => matched,
            Err(AuthError::HashingFailure(e)) => {
                warn!(user_id = %user.id, error = %e, "Stored password hash is unusable");
                false
            }
            Err(e) => return Err(e),
        };
        if !matched {
            debug!(user_id = %user.id, "Login password mismatch");
            return Err(AuthError::AuthenticationFailed {
                reason: "password mismatch",
            });
        }

        let access_token = self.codec.issue(user.id, self.access_ttl.as_duration())?;
        let refresh_token = self.refresh_tokens.issue(user.id, self.refresh_ttl).await?;

        info!(user_id = %user.id, "User logged in");

        Ok(LoginResult {
            user,
            access_token,
            refresh_token,
        })
    }

    /// Exchanges a live refresh token for a new access token.
    ///
    /// The refresh token itself is neither rotated nor extended. Missing,
    /// expired and revoked tokens fail identically.
    pub async fn refresh(&self, presented: &str) -> Result<String, AuthError> {
        let record = match self.refresh_tokens.lookup(presented).await {
            Ok(record) => record,
            Err(AuthError::TokenNotFound) => {
                debug!("Refresh with unknown token");
                return Err(AuthError::AuthenticationFailed {
                    reason: "refresh token not found",
                });
            }
            Err(e) => return Err(e),
        };

        if !RefreshTokenStore::is_live(&record, chrono::Utc::now()) {
            let reason = if record.is_revoked() {
                "refresh token revoked"
            } else {
                "refresh token expired"
            };
            debug!(user_id = %record.user_id, token_prefix = record.prefix(), reason, "Refresh refused");
            return Err(AuthError::AuthenticationFailed { reason });
        }

        let token = self
            .codec
            .issue(record.user_id, self.access_ttl.as_duration())?;
        debug!(user_id = %record.user_id, "Access token refreshed");
        Ok(token)
    }

    /// Revokes a refresh token. Succeeds whether or not the token existed.
    pub async fn revoke(&self, presented: &str) -> Result<(), AuthError> {
        self.refresh_tokens.revoke(presented).await
    }

    /// Verifies an access token and returns its subject.
    pub fn authenticate(&self, access_token: &str) -> Result<UserId, AuthError> {
        self.codec.verify(access_token)
    }

    /// Extracts the `Bearer` access token from `headers` and authenticates it.
    pub fn authenticate_headers(&self, headers: &HeaderMap) -> Result<UserId, AuthError> {
        let token = extract_bearer(headers)?;
        self.authenticate(&token)
    }

    /// Checks the `ApiKey` credential against the configured service key.
    pub fn authorize_service(&self, headers: &HeaderMap) -> Result<(), AuthError> {
        let key = extract_api_key(headers)?;
        self.service_key.verify(&key)
    }

    /// Hashes a plaintext password for storage.
    pub fn hash_password(&self, plaintext: &str) -> Result<String, AuthError> {
        self.hasher.hash(plaintext)
    }

    /// Hashes and stores a new password. Returns `false` if the user does not exist.
    pub async fn set_password(&self, user_id: UserId, plaintext: &str) -> Result<bool, AuthError> {
        let hash = self.hasher.hash(plaintext)?;
        let updated = self.users.set_password_hash(user_id, &hash).await?;
        if updated {
            info!(user_id = %user_id, "Password updated");
        }
        Ok(updated)
    }
}
