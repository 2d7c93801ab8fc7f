//! Refresh token repository implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use chirpy_core::error::{AppError, ErrorKind};
use chirpy_core::result::AppResult;
use chirpy_entity::session::RefreshToken;

use crate::traits::RefreshTokenRepository;

/// Repository for refresh-token records.
#[derive(Debug, Clone)]
pub struct PgRefreshTokenRepository {
    pool: PgPool,
}

impl PgRefreshTokenRepository {
    /// Create a new refresh token repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RefreshTokenRepository for PgRefreshTokenRepository {
    async fn insert(&self, token: &RefreshToken) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO refresh_tokens (token, created_at, updated_at, user_id, expires_at, revoked_at) \
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(&token.token)
        .bind(token.created_at)
        .bind(token.updated_at)
        .bind(token.user_id)
        .bind(token.expires_at)
        .bind(token.revoked_at)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to insert refresh token", e))?;
        Ok(())
    }

    async fn find_by_token(&self, token: &str) -> AppResult<Option<RefreshToken>> {
        sqlx::query_as::<_, RefreshToken>("SELECT * FROM refresh_tokens WHERE token = $1")
            .bind(token)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find refresh token", e)
            })
    }

    async fn revoke(&self, token: &str, at: DateTime<Utc>) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE refresh_tokens SET revoked_at = COALESCE(revoked_at, $1), updated_at = $1 \
             WHERE token = $2",
        )
        .bind(at)
        .bind(token)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to revoke refresh token", e))?;
        Ok(result.rows_affected() > 0)
    }
}
