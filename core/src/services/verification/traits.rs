//! Traits for the cache, mail and code-generation collaborators

use async_trait::async_trait;

use crate::errors::{CacheError, DeliveryError, GeneratorError};

/// Result of an atomic "set if absent" write
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreOutcome {
    /// The key was free and now holds the offered value
    Inserted,
    /// The key already held a live value, returned unchanged
    Existing(String),
}

/// Cache gateway over the key-value store
///
/// Every method is a single round-trip with no local retry; a failure is
/// surfaced as [`CacheError`] immediately.
#[async_trait]
pub trait CacheServiceTrait: Send + Sync {
    /// Read a value; `Ok(None)` is a miss, not an error
    async fn lookup(&self, key: &str) -> Result<Option<String>, CacheError>;
    /// Write a value that expires after `ttl_seconds`
    async fn store_with_ttl(&self, key: &str, value: &str, ttl_seconds: u64) -> Result<(), CacheError>;
    /// Check whether a live value exists
    async fn exists(&self, key: &str) -> Result<bool, CacheError>;
    /// Write with expiry only if no live value exists, as one atomic step
    async fn store_if_absent(&self, key: &str, value: &str, ttl_seconds: u64) -> Result<StoreOutcome, CacheError>;
    /// Remaining lifetime in seconds, `None` if the key is absent
    async fn ttl(&self, key: &str) -> Result<Option<u64>, CacheError>;

    /// Check that the backing store is reachable
    ///
    /// Default implementation always returns true.
    async fn health_check(&self) -> Result<bool, CacheError> {
        Ok(true)
    }
}

/// Delivery gateway over the mail channel
#[async_trait]
pub trait MailServiceTrait: Send + Sync {
    /// Send the verification mail carrying `code` to `recipient`
    ///
    /// Returns the provider's message id.
    async fn send_verification_code(&self, recipient: &str, code: &str) -> Result<String, DeliveryError>;
}

/// Source of fresh verification codes
pub trait CodeGenerator: Send + Sync {
    fn new_code(&self) -> Result<String, GeneratorError>;
}
