//! User maintenance commands.

use clap::Args;
use tracing::info;

use chirpy_auth::SessionManager;
use chirpy_core::config::AppConfig;
use chirpy_core::error::AppError;
use chirpy_database::Repositories;

/// Arguments for `set-password`
#[derive(Debug, Args)]
pub struct SetPasswordArgs {
    /// Email of the account to update
    #[arg(long)]
    pub email: String,

    /// New plaintext password
    #[arg(long, env = "CHIRPY_NEW_PASSWORD", hide_env_values = true)]
    pub password: String,
}

/// Hash and store a new password for an existing account.
pub async fn set_password(args: &SetPasswordArgs, config: &AppConfig) -> Result<(), AppError> {
    let repos = Repositories::connect(&config.database).await?;
    let sessions = SessionManager::new(
        &config.auth,
        repos.users.clone(),
        repos.refresh_tokens.clone(),
    );

    let user = repos
        .users
        .find_by_email(&args.email)
        .await?
        .ok_or_else(|| AppError::not_found(format!("No user with email {}", args.email)))?;

    if !sessions.set_password(user.id, &args.password).await? {
        return Err(AppError::not_found("User disappeared before update"));
    }

    info!(user_id = %user.id, "Password set");

    if let Some(pool) = repos.pool {
        pool.close().await;
    }
    Ok(())
}
