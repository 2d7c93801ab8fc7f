//! Start the Chirpy server.

use tracing::info;

use chirpy_api::{AppState, run_server};
use chirpy_core::config::AppConfig;
use chirpy_core::error::AppError;
use chirpy_database::Repositories;

/// Builds collaborators for the configured provider and serves until Ctrl-C.
pub async fn execute(config: AppConfig) -> Result<(), AppError> {
    info!(
        version = env!("CARGO_PKG_VERSION"),
        provider = ?config.database.provider,
        platform = %config.server.platform,
        "Starting Chirpy"
    );

    let repos = Repositories::connect(&config.database).await?;
    let pool = repos.pool.clone();
    let state = AppState::new(config, &repos);

    let result = run_server(state).await;

    if let Some(pool) = pool {
        pool.close().await;
    }
    result
}
