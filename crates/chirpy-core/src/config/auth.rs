//! Authentication configuration.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Authentication and credential configuration.
///
/// The signing secret and the service API key are process-wide and
/// immutable after startup.
#[derive(Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for access-token signing (HMAC-SHA256).
    #[serde(default)]
    pub jwt_secret: String,
    /// Access token TTL in seconds. Clamped up to one hour when lower.
    #[serde(default = "default_access_ttl")]
    pub access_token_ttl_seconds: u64,
    /// Refresh token TTL in days.
    #[serde(default = "default_refresh_ttl")]
    pub refresh_token_ttl_days: u64,
    /// Static API key presented by the Polka payment webhook (`ApiKey <key>`).
    #[serde(default)]
    pub polka_api_key: String,
}

impl AuthConfig {
    /// Creates a configuration with the given secret and default lifetimes.
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            access_token_ttl_seconds: default_access_ttl(),
            refresh_token_ttl_days: default_refresh_ttl(),
            polka_api_key: String::new(),
        }
    }

    /// Rejects configurations that would leave tokens unsigned or immortal.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.jwt_secret.trim().is_empty() {
            return Err(AppError::configuration("auth.jwt_secret must be set"));
        }
        if self.refresh_token_ttl_days == 0 {
            return Err(AppError::configuration(
                "auth.refresh_token_ttl_days must be positive",
            ));
        }
        Ok(())
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"<redacted>")
            .field("access_token_ttl_seconds", &self.access_token_ttl_seconds)
            .field("refresh_token_ttl_days", &self.refresh_token_ttl_days)
            .field("polka_api_key", &"<redacted>")
            .finish()
    }
}

fn default_access_ttl() -> u64 {
    3600
}

fn default_refresh_ttl() -> u64 {
    60
}
