//! HTTP server configuration.

use serde::{Deserialize, Serialize};

/// Platform name that unlocks destructive admin operations.
pub const DEV_PLATFORM: &str = "dev";

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address.
    #[serde(default = "default_host")]
    pub host: String,
    /// Bind port.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Deployment platform; `"dev"` enables `POST /admin/reset` to wipe users.
    #[serde(default = "default_platform")]
    pub platform: String,
    /// Directory served under `/app`. Keep it apart from `config/`.
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

impl ServerConfig {
    /// Socket address string suitable for `TcpListener::bind`.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Whether the server runs on the development platform.
    pub fn is_dev(&self) -> bool {
        self.platform == DEV_PLATFORM
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            platform: default_platform(),
            static_dir: default_static_dir(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_platform() -> String {
    "production".to_string()
}

fn default_static_dir() -> String {
    "public".to_string()
}
