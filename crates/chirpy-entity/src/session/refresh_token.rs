//! Refresh token record persisted by the storage collaborator.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use chirpy_core::types::UserId;

/// A long-lived, revocable refresh token.
///
/// Records are created at login, mutated only to set `revoked_at`
/// (bumping `updated_at`), and never deleted by the auth layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct RefreshToken {
    /// 64 lowercase hex characters (256 bits of randomness).
    pub token: String,
    /// Owning user.
    pub user_id: UserId,
    /// When the token was issued.
    pub created_at: DateTime<Utc>,
    /// When the record last changed.
    pub updated_at: DateTime<Utc>,
    /// Hard expiry.
    pub expires_at: DateTime<Utc>,
    /// Set once the token has been revoked.
    pub revoked_at: Option<DateTime<Utc>>,
}

impl RefreshToken {
    /// Whether the token has been revoked.
    pub fn is_revoked(&self) -> bool {
        self.revoked_at.is_some()
    }

    /// Whether the token is past its expiry at `now`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Shortened token for log fields.
    pub fn prefix(&self) -> &str {
        self.token.get(..8).unwrap_or(&self.token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn record(expires_in: Duration) -> RefreshToken {
        let now = Utc::now();
        RefreshToken {
            token: "ab".repeat(32),
            user_id: UserId::new(),
            created_at: now,
            updated_at: now,
            expires_at: now + expires_in,
            revoked_at: None,
        }
    }

    #[test]
    fn test_expiry_boundary_is_exclusive() {
        let token = record(Duration::days(60));
        assert!(!token.is_expired_at(token.expires_at - Duration::seconds(1)));
        assert!(token.is_expired_at(token.expires_at));
    }

    #[test]
    fn test_prefix() {
        let token = record(Duration::days(1));
        assert_eq!(token.prefix(), "abababab");
        assert!(!token.is_revoked());
    }
}
