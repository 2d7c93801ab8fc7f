//! Database migration command.

use chirpy_core::config::{AppConfig, DatabaseProvider};
use chirpy_core::error::AppError;
use chirpy_database::DatabasePool;
use chirpy_database::migration::run_migrations;

/// Apply pending migrations against the configured PostgreSQL database.
pub async fn execute(config: &AppConfig) -> Result<(), AppError> {
    if config.database.provider != DatabaseProvider::Postgres {
        return Err(AppError::configuration(
            "migrate requires database.provider = \"postgres\"",
        ));
    }

    let pool = DatabasePool::connect(&config.database).await?;
    let result = run_migrations(pool.pool()).await;
    pool.close().await;
    result
}
