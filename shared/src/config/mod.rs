//! Configuration module with per-concern sub-modules
//!
//! - `cache` - Cache backend and Redis connection configuration
//! - `environment` - Environment detection and logging configuration
//! - `mail` - Mail delivery provider configuration
//! - `server` - Endpoint server configuration
//! - `verification` - Issuance strategy and delivery policy

pub mod cache;
pub mod environment;
pub mod mail;
pub mod server;
pub mod verification;

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

// Re-export commonly used types
pub use cache::{CacheBackend, CacheConfig};
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use mail::{MailConfig, MailProvider, SmtpSecurity};
pub use server::{ServerConfig, DEFAULT_MAX_PAYLOAD_SIZE};
pub use verification::{DeliveryPolicy, IssuanceStrategy, VerificationConfig};

/// A configuration value that cannot be used
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{name}={value:?} is invalid: {reason}")]
    InvalidValue {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// Parse the environment variable `name`
///
/// Unset yields `Ok(None)`. A value that is set but does not parse is an
/// error rather than a silent fallback to the default.
pub fn parse_env<T>(name: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    let Ok(value) = std::env::var(name) else {
        return Ok(None);
    };
    match value.parse::<T>() {
        Ok(parsed) => Ok(Some(parsed)),
        Err(e) => Err(ConfigError::InvalidValue {
            name,
            reason: e.to_string(),
            value,
        }),
    }
}

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Cache configuration
    pub cache: CacheConfig,

    /// Mail delivery configuration
    pub mail: MailConfig,

    /// Issuance policy
    #[serde(default)]
    pub verification: VerificationConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            server: ServerConfig::default(),
            cache: CacheConfig::default(),
            mail: MailConfig::default(),
            verification: VerificationConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Fails on the first variable whose value does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = Environment::from_env()?;
        Ok(Self {
            environment,
            server: ServerConfig::from_env()?,
            cache: CacheConfig::from_env()?,
            mail: MailConfig::from_env()?,
            verification: VerificationConfig::from_env()?,
            logging: LoggingConfig::from_env(environment)?,
        })
    }

    /// Configuration for local development: in-memory cache, mock mail
    pub fn development() -> Self {
        Self {
            environment: Environment::Development,
            cache: CacheConfig::in_memory(),
            mail: MailConfig::default(),
            ..Default::default()
        }
    }
}
