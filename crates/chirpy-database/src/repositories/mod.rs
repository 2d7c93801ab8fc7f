//! PostgreSQL implementations of the storage collaborators.

pub mod refresh_token;
pub mod user;

pub use refresh_token::PgRefreshTokenRepository;
pub use user::PgUserRepository;
