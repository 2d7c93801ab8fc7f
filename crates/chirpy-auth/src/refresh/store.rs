//! Refresh token lifecycle over the persistence collaborator.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info};

use chirpy_core::types::UserId;
use chirpy_database::traits::RefreshTokenRepository;
use chirpy_entity::session::RefreshToken;

use crate::error::AuthError;

use super::generator::generate_refresh_token;

/// Issues, looks up and revokes refresh tokens.
///
/// Holds no copy of any record. Every lookup goes back to the repository
/// so a revocation made by another instance is seen immediately.
#[derive(Debug, Clone)]
pub struct RefreshTokenStore {
    repo: Arc<dyn RefreshTokenRepository>,
}

impl RefreshTokenStore {
    /// Creates a store over the given repository.
    pub fn new(repo: Arc<dyn RefreshTokenRepository>) -> Self {
        Self { repo }
    }

    /// Generates and persists a new token for `owner` valid for `ttl`.
    pub async fn issue(&self, owner: UserId, ttl: Duration) -> Result<RefreshToken, AuthError> {
        let now = Utc::now();
        let record = RefreshToken {
            token: generate_refresh_token()?,
            user_id: owner,
            created_at: now,
            updated_at: now,
            expires_at: now.checked_add_signed(ttl).unwrap_or(DateTime::<Utc>::MAX_UTC),
            revoked_at: None,
        };

        self.repo.insert(&record).await?;

        info!(
            user_id = %owner,
            token_prefix = record.prefix(),
            expires_at = %record.expires_at,
            "Refresh token issued"
        );

        Ok(record)
    }

    /// Fetches the record for `token`.
    pub async fn lookup(&self, token: &str) -> Result<RefreshToken, AuthError> {
        self.repo
            .find_by_token(token)
            .await?
            .ok_or(AuthError::TokenNotFound)
    }

    /// Marks `token` revoked. Revoking twice, or revoking an unknown token,
    /// succeeds.
    pub async fn revoke(&self, token: &str) -> Result<(), AuthError> {
        let found = self.repo.revoke(token, Utc::now()).await?;
        if found {
            info!(token_prefix = token_prefix(token), "Refresh token revoked");
        } else {
            debug!(token_prefix = token_prefix(token), "Revoke of unknown refresh token");
        }
        Ok(())
    }

    /// Usable iff never revoked and `now` is strictly before expiry.
    pub fn is_live(record: &RefreshToken, now: DateTime<Utc>) -> bool {
        !record.is_revoked() && !record.is_expired_at(now)
    }
}

fn token_prefix(token: &str) -> &str {
    token.get(..8).unwrap_or("")
}
