//! CLI command definitions and dispatch.

pub mod migrate;
pub mod serve;
pub mod user;

use clap::{Parser, Subcommand};

use chirpy_core::config::AppConfig;
use chirpy_core::error::AppError;

/// Chirpy social posting backend
#[derive(Debug, Parser)]
#[command(name = "chirpy-server", version, about, long_about = None)]
pub struct Cli {
    /// Directory holding `default.toml` and per-environment overlays
    #[arg(long, default_value = "config")]
    pub config_dir: String,

    /// Environment overlay to load (`{config_dir}/{env}.toml`)
    #[arg(long, env = "CHIRPY_ENV", default_value = "development")]
    pub env: String,

    /// Subcommand to execute; defaults to `serve`
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    Serve,
    /// Apply pending database migrations and exit
    Migrate,
    /// Set a user's password from the command line
    SetPassword(user::SetPasswordArgs),
}

impl Cli {
    /// Execute the selected command
    pub async fn execute(&self, config: AppConfig) -> Result<(), AppError> {
        match &self.command {
            None | Some(Commands::Serve) => serve::execute(config).await,
            Some(Commands::Migrate) => migrate::execute(&config).await,
            Some(Commands::SetPassword(args)) => user::set_password(args, &config).await,
        }
    }
}
