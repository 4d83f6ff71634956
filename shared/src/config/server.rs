//! Server configuration module

use serde::{Deserialize, Serialize};

use super::{parse_env, ConfigError};

/// Endpoint server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server host address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Worker threads (0 = number of CPU cores)
    #[serde(default)]
    pub workers: usize,

    /// Keep-alive timeout in seconds
    #[serde(default = "default_keep_alive")]
    pub keep_alive: u64,

    /// Seconds to wait for in-flight calls on shutdown
    #[serde(default = "default_shutdown_timeout")]
    pub shutdown_timeout: u64,

    /// Maximum request body size in bytes
    #[serde(default = "default_max_payload_size")]
    pub max_payload_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("127.0.0.1"),
            port: 50051,
            workers: 0,  // Use all CPU cores
            keep_alive: default_keep_alive(),
            shutdown_timeout: default_shutdown_timeout(),
            max_payload_size: default_max_payload_size(),
        }
    }
}

impl ServerConfig {
    /// Create a new server configuration
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            host: std::env::var("SERVER_HOST").unwrap_or(defaults.host),
            port: parse_env("SERVER_PORT")?.unwrap_or(defaults.port),
            workers: parse_env("SERVER_WORKERS")?.unwrap_or(defaults.workers),
            max_payload_size: parse_env("SERVER_MAX_PAYLOAD_SIZE")?.unwrap_or(defaults.max_payload_size),
            ..defaults
        })
    }

    /// Get the bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn default_keep_alive() -> u64 {
    75  // 75 seconds
}

fn default_shutdown_timeout() -> u64 {
    30
}

/// Request bodies only carry an email address
pub const DEFAULT_MAX_PAYLOAD_SIZE: usize = 64 * 1024;

fn default_max_payload_size() -> usize {
    DEFAULT_MAX_PAYLOAD_SIZE
}
