//! Redis-backed cache gateway for verification codes
//!
//! Records live under `code_{email}` as plain strings with a server-side
//! expiry. Redis evicts them on its own; nothing here deletes a record.

use async_trait::async_trait;
use tracing::{debug, error};

use vs_core::domain::masked_key;
use vs_core::errors::CacheError;
use vs_core::services::verification::{CacheServiceTrait, StoreOutcome};

use crate::cache::RedisClient;
use crate::InfrastructureError;

/// Verification cache backed by Redis
///
/// Every call is exactly one Redis command. A failed command surfaces as a
/// [`CacheError`] and is never retried here.
#[derive(Clone)]
pub struct RedisVerificationCache {
    /// Redis client for cache operations
    redis_client: RedisClient,
}

impl RedisVerificationCache {
    /// Create a new verification cache over `redis_client`
    ///
    /// # Example
    /// ```no_run
    /// use vs_infra::cache::{RedisClient, RedisVerificationCache};
    ///
    /// async fn create_cache(redis_client: RedisClient) {
    ///     let cache = RedisVerificationCache::new(redis_client);
    /// }
    /// ```
    pub fn new(redis_client: RedisClient) -> Self {
        Self { redis_client }
    }

    /// Access the underlying client
    pub fn client(&self) -> &RedisClient {
        &self.redis_client
    }
}

pub(crate) fn to_cache_error(operation: &str, key: &str, error: InfrastructureError) -> CacheError {
    error!(
        key = %masked_key(key),
        operation = operation,
        error = %error,
        event = "cache_operation_failed",
        "Redis cache operation failed"
    );
    CacheError::from(error)
}

#[async_trait]
impl CacheServiceTrait for RedisVerificationCache {
    async fn lookup(&self, key: &str) -> Result<Option<String>, CacheError> {
        self.redis_client
            .get(key)
            .await
            .map_err(|e| to_cache_error("get", key, e))
    }

    async fn store_with_ttl(&self, key: &str, value: &str, ttl_seconds: u64) -> Result<(), CacheError> {
        self.redis_client
            .set_with_expiry(key, value, ttl_seconds)
            .await
            .map_err(|e| to_cache_error("set_ex", key, e))
    }

    async fn exists(&self, key: &str) -> Result<bool, CacheError> {
        self.redis_client
            .exists(key)
            .await
            .map_err(|e| to_cache_error("exists", key, e))
    }

    async fn store_if_absent(&self, key: &str, value: &str, ttl_seconds: u64) -> Result<StoreOutcome, CacheError> {
        let previous = self
            .redis_client
            .set_nx_with_expiry(key, value, ttl_seconds)
            .await
            .map_err(|e| to_cache_error("set_nx", key, e))?;

        match previous {
            Some(existing) => {
                debug!(key = %masked_key(key), "Record already present, keeping it");
                Ok(StoreOutcome::Existing(existing))
            }
            None => Ok(StoreOutcome::Inserted),
        }
    }

    async fn ttl(&self, key: &str) -> Result<Option<u64>, CacheError> {
        let ttl = self
            .redis_client
            .ttl(key)
            .await
            .map_err(|e| to_cache_error("ttl", key, e))?;
        Ok(ttl.and_then(|seconds| u64::try_from(seconds).ok()))
    }

    async fn health_check(&self) -> Result<bool, CacheError> {
        self.redis_client
            .health_check()
            .await
            .map_err(|e| to_cache_error("ping", "", e))
    }
}
