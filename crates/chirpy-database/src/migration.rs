//! Embedded schema for the `users` and `refresh_tokens` tables.

use sqlx::PgPool;
use sqlx::migrate::Migrator;
use tracing::info;

use chirpy_core::error::{AppError, ErrorKind};

static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Brings the schema up to the newest embedded migration.
pub async fn run_migrations(pool: &PgPool) -> Result<(), AppError> {
    let target = MIGRATOR.iter().map(|m| m.version).max().unwrap_or_default();
    info!(target_version = target, "Applying schema migrations");

    MIGRATOR.run(pool).await.map_err(|e| {
        AppError::with_source(ErrorKind::Database, format!("Schema migration failed: {e}"), e)
    })?;

    info!(version = target, "Schema is current");
    Ok(())
}
