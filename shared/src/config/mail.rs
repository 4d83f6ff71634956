//! Mail delivery configuration module

use serde::{Deserialize, Serialize};

use super::{parse_env, ConfigError};

/// Mail delivery provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MailProvider {
    Smtp,
    Mock,
}

impl std::str::FromStr for MailProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "smtp" => Ok(MailProvider::Smtp),
            "mock" => Ok(MailProvider::Mock),
            _ => Err(format!("Invalid mail provider: {}", s)),
        }
    }
}

/// How the SMTP session is protected
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SmtpSecurity {
    /// TLS from the first byte (SMTPS, usually port 465)
    Tls,
    /// Plain connect upgraded with STARTTLS, which the relay must offer
    #[default]
    StartTls,
    /// No encryption; local relays and test sinks only
    Plain,
}

impl SmtpSecurity {
    pub fn default_port(self) -> u16 {
        match self {
            SmtpSecurity::Tls => 465,
            SmtpSecurity::StartTls => 587,
            SmtpSecurity::Plain => 25,
        }
    }
}

impl std::str::FromStr for SmtpSecurity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tls" | "smtps" => Ok(SmtpSecurity::Tls),
            "starttls" => Ok(SmtpSecurity::StartTls),
            "plain" | "none" => Ok(SmtpSecurity::Plain),
            _ => Err(format!("Invalid SMTP security mode: {}", s)),
        }
    }
}

/// Mail service configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MailConfig {
    /// Delivery provider
    pub provider: MailProvider,

    /// SMTP relay host
    #[serde(default)]
    pub smtp_host: String,

    /// Transport security towards the relay
    #[serde(default)]
    pub smtp_security: SmtpSecurity,

    /// SMTP relay port
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,

    /// SMTP username, if the relay requires authentication
    #[serde(default)]
    pub smtp_username: Option<String>,

    /// SMTP password
    #[serde(default)]
    pub smtp_password: Option<String>,

    /// Fixed sender address for every verification mail
    pub from_address: String,

    /// SMTP command timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            provider: MailProvider::Mock,
            smtp_host: String::new(),
            smtp_security: SmtpSecurity::default(),
            smtp_port: default_smtp_port(),
            smtp_username: None,
            smtp_password: None,
            from_address: String::from("no-reply@localhost"),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl MailConfig {
    /// Create from environment variables
    ///
    /// `SMTP_PORT` defaults to the usual port of `SMTP_SECURITY`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let smtp_security: SmtpSecurity = parse_env("SMTP_SECURITY")?.unwrap_or(defaults.smtp_security);
        Ok(Self {
            provider: parse_env("MAIL_PROVIDER")?.unwrap_or(defaults.provider),
            smtp_host: std::env::var("SMTP_HOST").unwrap_or_default(),
            smtp_security,
            smtp_port: parse_env("SMTP_PORT")?.unwrap_or_else(|| smtp_security.default_port()),
            smtp_username: std::env::var("SMTP_USERNAME").ok(),
            smtp_password: std::env::var("SMTP_PASSWORD").ok(),
            from_address: std::env::var("MAIL_FROM").unwrap_or(defaults.from_address),
            timeout_secs: parse_env("SMTP_TIMEOUT_SECS")?.unwrap_or(defaults.timeout_secs),
        })
    }

    /// Whether enough is set to talk to an SMTP relay
    pub fn has_smtp_relay(&self) -> bool {
        !self.smtp_host.is_empty() && !self.from_address.is_empty()
    }
}

fn default_smtp_port() -> u16 {
    SmtpSecurity::default().default_port()
}

fn default_timeout_secs() -> u64 {
    30
}
