//! Claims carried by every access token.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fixed issuer stamped on, and required of, every access token.
pub const ISSUER: &str = "chirpy";

/// JWT claims payload of an access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Issuer, always [`ISSUER`].
    pub iss: String,
    /// Subject, the user id in string form.
    pub sub: String,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl AccessClaims {
    /// A token is usable strictly before its `exp`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() >= self.exp
    }
}
