//! # chirpy-database
//!
//! Storage collaborators consumed by the auth core. The [`traits`] module
//! defines the contracts; [`repositories`] implements them on PostgreSQL
//! and [`memory`] implements them on process-local maps.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod provider;
pub mod repositories;
pub mod traits;

pub use connection::DatabasePool;
pub use memory::MemoryDatabase;
pub use provider::Repositories;
pub use traits::{RefreshTokenRepository, UserDirectory};
