//! User repository implementation.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;

use chirpy_core::error::{AppError, ErrorKind};
use chirpy_core::result::AppResult;
use chirpy_core::types::UserId;
use chirpy_entity::user::{NewUser, User};

use crate::traits::UserDirectory;

/// Repository for user accounts.
#[derive(Debug, Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_write_error(e: sqlx::Error, context: &str) -> AppError {
    let duplicate = e
        .as_database_error()
        .is_some_and(|db| db.is_unique_violation());
    if duplicate {
        AppError::conflict("Email is already registered")
    } else {
        AppError::with_source(ErrorKind::Database, context.to_string(), e)
    }
}

#[async_trait]
impl UserDirectory for PgUserRepository {
    async fn create(&self, new_user: NewUser) -> AppResult<User> {
        let user = User::from_new(new_user, Utc::now());
        sqlx::query_as::<_, User>(
            "INSERT INTO users (id, created_at, updated_at, email, hashed_password) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(user.id)
        .bind(user.created_at)
        .bind(user.updated_at)
        .bind(&user.email)
        .bind(&user.hashed_password)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "Failed to create user"))
    }

    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user by id", e))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE LOWER(email) = LOWER($1)")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user by email", e)
            })
    }

    async fn set_password_hash(&self, id: UserId, hashed_password: &str) -> AppResult<bool> {
        let result =
            sqlx::query("UPDATE users SET hashed_password = $1, updated_at = $2 WHERE id = $3")
                .bind(hashed_password)
                .bind(Utc::now())
                .bind(id)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to set password hash", e)
                })?;
        Ok(result.rows_affected() > 0)
    }

    async fn update_credentials(
        &self,
        id: UserId,
        email: &str,
        hashed_password: &str,
    ) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>(
            "UPDATE users SET email = $1, hashed_password = $2, updated_at = $3 \
             WHERE id = $4 RETURNING *",
        )
        .bind(email)
        .bind(hashed_password)
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "Failed to update user"))
    }

    async fn upgrade(&self, id: UserId) -> AppResult<bool> {
        let result =
            sqlx::query("UPDATE users SET is_chirpy_red = TRUE, updated_at = $1 WHERE id = $2")
                .bind(Utc::now())
                .bind(id)
                .execute(&self.pool)
                .await
                .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to upgrade user", e))?;
        Ok(result.rows_affected() > 0)
    }

    async fn reset(&self) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM users")
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to reset users", e))?;
        Ok(result.rows_affected())
    }
}
