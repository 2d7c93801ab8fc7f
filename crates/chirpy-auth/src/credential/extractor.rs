//! Parses `Authorization` header values into typed credentials.
//!
//! A header line is presumed to carry exactly one scheme. A value is
//! accepted only when it splits on whitespace into exactly two fields and
//! the first field equals the scheme word case-sensitively. Anything else,
//! including the scheme word with no token after it, fails closed.

use std::fmt;

use http::HeaderMap;
use http::header::AUTHORIZATION;

use crate::error::AuthError;

/// The two credential schemes the API understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CredentialScheme {
    /// Session access or refresh token: `Bearer <token>`.
    Bearer,
    /// Static service key used by the payment webhook: `ApiKey <key>`.
    ApiKey,
}

impl CredentialScheme {
    /// The literal scheme word expected as the first header field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bearer => "Bearer",
            Self::ApiKey => "ApiKey",
        }
    }
}

impl fmt::Display for CredentialScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request-scoped credential. Absence is modelled as `None` by callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credential {
    /// A bearer session token.
    Bearer(String),
    /// A service API key.
    ApiKey(String),
}

impl Credential {
    /// The scheme this credential was presented under.
    pub fn scheme(&self) -> CredentialScheme {
        match self {
            Self::Bearer(_) => CredentialScheme::Bearer,
            Self::ApiKey(_) => CredentialScheme::ApiKey,
        }
    }

    /// The raw token or key.
    pub fn value(&self) -> &str {
        match self {
            Self::Bearer(v) | Self::ApiKey(v) => v,
        }
    }

    /// Returns the first header value that parses as any known scheme.
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        authorization_values(headers).find_map(|value| {
            [CredentialScheme::Bearer, CredentialScheme::ApiKey]
                .into_iter()
                .find_map(|scheme| {
                    parse_value(value, scheme).map(|token| match scheme {
                        CredentialScheme::Bearer => Self::Bearer(token.to_string()),
                        CredentialScheme::ApiKey => Self::ApiKey(token.to_string()),
                    })
                })
        })
    }
}

/// Extracts the token of the first `Authorization` value using `scheme`.
pub fn extract(headers: &HeaderMap, scheme: CredentialScheme) -> Result<String, AuthError> {
    authorization_values(headers)
        .find_map(|value| parse_value(value, scheme))
        .map(str::to_string)
        .ok_or(AuthError::CredentialAbsent(scheme))
}

/// Extracts a `Bearer` token.
pub fn extract_bearer(headers: &HeaderMap) -> Result<String, AuthError> {
    extract(headers, CredentialScheme::Bearer)
}

/// Extracts an `ApiKey` key.
pub fn extract_api_key(headers: &HeaderMap) -> Result<String, AuthError> {
    extract(headers, CredentialScheme::ApiKey)
}

/// All `Authorization` values that are valid visible ASCII.
fn authorization_values(headers: &HeaderMap) -> impl Iterator<Item = &str> {
    headers
        .get_all(AUTHORIZATION)
        .iter()
        .filter_map(|v| v.to_str().ok())
}

fn parse_value(value: &str, scheme: CredentialScheme) -> Option<&str> {
    let mut fields = value.split_whitespace();
    let (Some(first), Some(second), None) = (fields.next(), fields.next(), fields.next()) else {
        return None;
    };
    (first == scheme.as_str()).then_some(second)
}
