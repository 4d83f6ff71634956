//! Shared utilities and common types for the VerifyServer workspace
//!
//! This crate provides functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - Utility functions (email masking for logs)

pub mod config;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, CacheBackend, CacheConfig, DeliveryPolicy, Environment, IssuanceStrategy,
    LogFormat, LoggingConfig, MailConfig, MailProvider, ServerConfig, VerificationConfig,
};
pub use utils::email::mask_email;
