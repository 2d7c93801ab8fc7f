//! # chirpy-auth
//!
//! Credential and session subsystem for Chirpy, independent of the HTTP
//! transport.
//!
//! ## Modules
//!
//! - `password`: Argon2id password hashing and verification
//! - `credential`: `Authorization` header parsing for `Bearer` and `ApiKey` schemes
//! - `jwt`: short-lived signed access tokens
//! - `refresh`: long-lived, revocable refresh tokens
//! - `session`: login, refresh, revoke, and authenticate flows

pub mod credential;
pub mod error;
pub mod jwt;
pub mod password;
pub mod refresh;
pub mod session;

pub use credential::{Credential, CredentialScheme, ServiceKeyVerifier};
pub use error::AuthError;
pub use jwt::{AccessClaims, AccessTokenCodec};
pub use password::PasswordHasher;
pub use refresh::RefreshTokenStore;
pub use session::{LoginResult, SessionManager};
