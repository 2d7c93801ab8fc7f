//! Application state shared across all handlers and middleware.

use std::sync::Arc;
use std::sync::atomic::AtomicU64;

use chirpy_auth::SessionManager;
use chirpy_core::config::AppConfig;
use chirpy_database::{Repositories, UserDirectory};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration, read-only after startup.
    pub config: Arc<AppConfig>,
    /// Login, refresh, revoke and authenticate flows.
    pub sessions: Arc<SessionManager>,
    /// User accounts.
    pub users: Arc<dyn UserDirectory>,
    /// Requests served under `/app` since start or last reset.
    pub hits: Arc<AtomicU64>,
}

impl AppState {
    /// Wires the session manager over the given collaborators.
    pub fn new(config: AppConfig, repos: &Repositories) -> Self {
        let sessions = SessionManager::new(
            &config.auth,
            Arc::clone(&repos.users),
            Arc::clone(&repos.refresh_tokens),
        );

        Self {
            config: Arc::new(config),
            sessions: Arc::new(sessions),
            users: Arc::clone(&repos.users),
            hits: Arc::new(AtomicU64::new(0)),
        }
    }
}
