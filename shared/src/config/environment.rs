//! Deployment environment and the logging defaults derived from it

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{parse_env, ConfigError};

/// Where the server is deployed, read from `ENVIRONMENT`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    pub fn as_str(self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }

    pub fn is_production(self) -> bool {
        self == Environment::Production
    }

    /// `ENVIRONMENT`, or development when unset
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(parse_env("ENVIRONMENT")?.unwrap_or_default())
    }

    /// Dotenv file loaded ahead of the plain `.env`
    pub fn env_file(self) -> String {
        format!(".env.{}", self.as_str())
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "staging" | "stage" => Ok(Environment::Staging),
            "production" | "prod" => Ok(Environment::Production),
            other => Err(format!("expected development, staging or production, got {:?}", other)),
        }
    }
}

/// Output layout of the log subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Pretty,
    Compact,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            "compact" => Ok(LogFormat::Compact),
            other => Err(format!("expected json, pretty or compact, got {:?}", other)),
        }
    }
}

/// Log subscriber settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info` or `vs_core=debug,info`
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: LogFormat,

    /// Attach file and line to each event
    #[serde(default)]
    pub source_location: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self::for_environment(Environment::default())
    }
}

impl LoggingConfig {
    /// Verbose human-readable output in development, JSON elsewhere
    pub fn for_environment(env: Environment) -> Self {
        let (level, format) = match env {
            Environment::Development => ("debug", LogFormat::Pretty),
            Environment::Staging | Environment::Production => ("info", LogFormat::Json),
        };
        Self {
            level: level.to_string(),
            format,
            source_location: env == Environment::Development,
        }
    }

    /// Environment defaults, overridden by `LOG_LEVEL` and `LOG_FORMAT`
    pub fn from_env(env: Environment) -> Result<Self, ConfigError> {
        let defaults = Self::for_environment(env);
        Ok(Self {
            level: std::env::var("LOG_LEVEL").unwrap_or(defaults.level),
            format: parse_env("LOG_FORMAT")?.unwrap_or(defaults.format),
            source_location: defaults.source_location,
        })
    }
}

fn default_log_format() -> LogFormat {
    LogFormat::Pretty
}
