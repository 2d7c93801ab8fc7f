//! Selects the storage backend from configuration.

use std::sync::Arc;

use tracing::info;

use chirpy_core::config::{DatabaseConfig, DatabaseProvider};
use chirpy_core::error::AppError;

use crate::connection::DatabasePool;
use crate::memory::MemoryDatabase;
use crate::migration::run_migrations;
use crate::repositories::{PgRefreshTokenRepository, PgUserRepository};
use crate::traits::{RefreshTokenRepository, UserDirectory};

/// The pair of collaborators the auth core and handlers depend on.
#[derive(Debug, Clone)]
pub struct Repositories {
    /// User accounts.
    pub users: Arc<dyn UserDirectory>,
    /// Refresh-token records.
    pub refresh_tokens: Arc<dyn RefreshTokenRepository>,
    /// Present only for the PostgreSQL backend.
    pub pool: Option<DatabasePool>,
}

impl Repositories {
    /// Builds the configured backend, running migrations for PostgreSQL.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, AppError> {
        match config.provider {
            DatabaseProvider::Postgres => {
                let pool = DatabasePool::connect(config).await?;
                run_migrations(pool.pool()).await?;
                Ok(Self {
                    users: Arc::new(PgUserRepository::new(pool.pool().clone())),
                    refresh_tokens: Arc::new(PgRefreshTokenRepository::new(pool.pool().clone())),
                    pool: Some(pool),
                })
            }
            DatabaseProvider::Memory => {
                info!("Using in-memory storage; data will not survive a restart");
                Ok(Self::in_memory())
            }
        }
    }

    /// Both collaborators backed by one shared [`MemoryDatabase`].
    pub fn in_memory() -> Self {
        let db = MemoryDatabase::new();
        Self {
            users: Arc::new(db.clone()),
            refresh_tokens: Arc::new(db),
            pool: None,
        }
    }
}
