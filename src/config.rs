//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_STATIC_DIR: &str = "public";

/// Manifest section holding the Leptos site options.
pub const LEPTOS_METADATA_SECTION: &str = "[[workspace.metadata.leptos]]";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// `PORT` was set but is not a valid port number.
    #[error("invalid PORT value: {0:?}")]
    InvalidPort(String),

    /// The `[[workspace.metadata.leptos]]` options could not be loaded.
    #[error("leptos configuration ([[workspace.metadata.leptos]]): {0}")]
    Leptos(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    pub static_dir: PathBuf,
}

impl HostConfig {
    /// Build host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `QUERYSAGE_STATIC_DIR`: default `public`; its `output/` subdirectory
    ///   is served at `/output`
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match std::env::var("PORT") {
            Ok(raw) => parse_port(&raw)?,
            Err(_) => DEFAULT_PORT,
        };
        let static_dir = std::env::var("QUERYSAGE_STATIC_DIR")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR), PathBuf::from);

        Ok(Self { port, static_dir })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }

    /// Directory mounted at `/output`.
    pub fn output_dir(&self) -> PathBuf {
        self.static_dir.join("output")
    }
}

fn parse_port(raw: &str) -> Result<u16, ConfigError> {
    raw.trim()
        .parse::<u16>()
        .map_err(|_| ConfigError::InvalidPort(raw.to_owned()))
}
