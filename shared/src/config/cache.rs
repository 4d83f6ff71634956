//! Cache configuration module

use serde::{Deserialize, Serialize};

use super::{parse_env, ConfigError};

/// Backing store used by the cache gateway
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheBackend {
    Redis,
    Memory,  // Process-local store, for development and tests
}

impl std::str::FromStr for CacheBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "redis" => Ok(CacheBackend::Redis),
            "memory" | "in-memory" => Ok(CacheBackend::Memory),
            _ => Err(format!("Invalid cache backend: {}", s)),
        }
    }
}

/// Redis cache configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Which store backs the cache gateway
    #[serde(default = "default_backend")]
    pub backend: CacheBackend,

    /// Redis connection URL
    pub url: String,

    /// Connection attempts made at startup before giving up
    #[serde(default = "default_connect_retries")]
    pub connect_retries: u32,

    /// Base delay between startup connection attempts in milliseconds
    #[serde(default = "default_connect_retry_delay_ms")]
    pub connect_retry_delay_ms: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            url: String::from("redis://localhost:6379"),
            connect_retries: default_connect_retries(),
            connect_retry_delay_ms: default_connect_retry_delay_ms(),
        }
    }
}

impl CacheConfig {
    /// Create from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            backend: parse_env("CACHE_BACKEND")?.unwrap_or(defaults.backend),
            url: std::env::var("REDIS_URL").unwrap_or(defaults.url),
            connect_retries: parse_env("REDIS_CONNECT_RETRIES")?.unwrap_or(defaults.connect_retries),
            ..defaults
        })
    }

    /// Create a new cache configuration with URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Use the process-local store instead of Redis
    pub fn in_memory() -> Self {
        Self {
            backend: CacheBackend::Memory,
            ..Default::default()
        }
    }
}

fn default_backend() -> CacheBackend {
    CacheBackend::Redis
}

fn default_connect_retries() -> u32 {
    3
}

fn default_connect_retry_delay_ms() -> u64 {
    100
}
