//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use chirpy_entity::user::User;

/// Public view of an account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// User ID.
    pub id: Uuid,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last update time.
    pub updated_at: DateTime<Utc>,
    /// Login email.
    pub email: String,
    /// Chirpy Red membership.
    pub is_chirpy_red: bool,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.into_uuid(),
            created_at: user.created_at,
            updated_at: user.updated_at,
            email: user.email,
            is_chirpy_red: user.is_chirpy_red,
        }
    }
}

/// Login response: the user view plus both tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// User info.
    #[serde(flatten)]
    pub user: UserResponse,
    /// Access token.
    pub token: String,
    /// Refresh token.
    pub refresh_token: String,
}

/// Refresh response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    /// New access token.
    pub token: String,
}
