//! # Infrastructure Layer
//!
//! Concrete implementations of the gateways consumed by the issuance
//! coordinator in `vs_core`.
//!
//! ## Architecture
//!
//! - **Cache**: Redis client and cache gateway, plus an in-memory gateway
//! - **Mail**: SMTP delivery via `lettre` and a mock implementation
//!
//! ## Features
//!
//! - `redis-cache`: Enable the Redis cache backend (default)
//! - `smtp-mail`: Enable SMTP mail delivery (default)

// Re-export core types for convenience
pub use vs_core::errors::{CacheError, DeliveryError};

/// Cache module - Redis client and in-memory store
pub mod cache;

/// Mail module - verification mail delivery
pub mod mail;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Redis cache error
    #[cfg(feature = "redis-cache")]
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Mail service error
    #[error("Mail service error: {0}")]
    Mail(String),

    /// Cache store returned something it should not have
    #[error("Unexpected cache reply: {0}")]
    UnexpectedReply(String),
}

impl From<InfrastructureError> for CacheError {
    fn from(error: InfrastructureError) -> Self {
        CacheError::new(error.to_string())
    }
}
