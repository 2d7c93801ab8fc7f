//! Long-lived, revocable refresh tokens.

pub mod generator;
pub mod store;

pub use generator::{REFRESH_TOKEN_BYTES, generate_refresh_token};
pub use store::RefreshTokenStore;
