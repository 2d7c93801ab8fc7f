//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use chirpy_core::types::UserId;

/// A registered Chirpy account.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: UserId,
    /// Login email address.
    pub email: String,
    /// Argon2 PHC-format password hash.
    #[serde(skip_serializing)]
    pub hashed_password: String,
    /// Whether the account has been upgraded to Chirpy Red.
    pub is_chirpy_red: bool,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    /// Login email address.
    pub email: String,
    /// Pre-hashed password.
    pub hashed_password: String,
}

impl User {
    /// Builds a fresh user from creation data, stamping both timestamps with `now`.
    pub fn from_new(new: NewUser, now: DateTime<Utc>) -> Self {
        Self {
            id: UserId::new(),
            email: new.email,
            hashed_password: new.hashed_password,
            is_chirpy_red: false,
            created_at: now,
            updated_at: now,
        }
    }
}
