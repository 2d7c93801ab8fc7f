//! Contracts for the persistence collaborators.
//!
//! Each operation is atomic at the single-record level; nothing in the
//! auth core needs a multi-record transaction.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use chirpy_core::result::AppResult;
use chirpy_core::types::UserId;
use chirpy_entity::session::RefreshToken;
use chirpy_entity::user::{NewUser, User};

/// User accounts as seen by the auth core and the account endpoints.
#[async_trait]
pub trait UserDirectory: Send + Sync + std::fmt::Debug + 'static {
    /// Insert a new user. Fails with a conflict error if the email is taken.
    async fn create(&self, new_user: NewUser) -> AppResult<User>;

    /// Find a user by primary key.
    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>>;

    /// Find a user by email (case-insensitive).
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Replace the stored password hash. Returns `false` if the user does not exist.
    async fn set_password_hash(&self, id: UserId, hashed_password: &str) -> AppResult<bool>;

    /// Replace email and password hash together.
    async fn update_credentials(
        &self,
        id: UserId,
        email: &str,
        hashed_password: &str,
    ) -> AppResult<Option<User>>;

    /// Mark the user as Chirpy Red. Returns `false` if the user does not exist.
    async fn upgrade(&self, id: UserId) -> AppResult<bool>;

    /// Delete every user (and, by cascade, their refresh tokens).
    async fn reset(&self) -> AppResult<u64>;
}

/// Durable refresh-token records.
#[async_trait]
pub trait RefreshTokenRepository: Send + Sync + std::fmt::Debug + 'static {
    /// Persist a freshly issued token.
    async fn insert(&self, token: &RefreshToken) -> AppResult<()>;

    /// Look up a token by its value.
    async fn find_by_token(&self, token: &str) -> AppResult<Option<RefreshToken>>;

    /// Set `revoked_at` if unset and always bump `updated_at`.
    ///
    /// Returns `false` if no such token exists.
    async fn revoke(&self, token: &str, at: DateTime<Utc>) -> AppResult<bool>;
}
