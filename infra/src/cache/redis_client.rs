//! Redis cache client implementation
//!
//! Thin async client over a multiplexed Redis connection. Connecting retries
//! with exponential backoff at startup; every command afterwards is a single
//! round-trip and a failure is returned to the caller immediately.

use redis::{aio::MultiplexedConnection, AsyncCommands, Client};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, error, info, warn};

use vs_core::domain::masked_key;
use vs_shared::config::CacheConfig;

use crate::InfrastructureError;

/// Redis cache client
///
/// Cloning is cheap: clones share the same multiplexed connection.
#[derive(Clone)]
pub struct RedisClient {
    /// Redis multiplexed connection for async operations
    connection: MultiplexedConnection,
}

impl RedisClient {
    /// Connect to Redis using the configured URL and retry settings
    ///
    /// # Arguments
    /// * `config` - Cache configuration settings
    ///
    /// # Returns
    /// * `Result<Self, InfrastructureError>` - Redis client or error
    ///
    /// # Example
    /// ```no_run
    /// use vs_shared::config::CacheConfig;
    /// use vs_infra::cache::RedisClient;
    ///
    /// async fn create_client() -> Result<RedisClient, Box<dyn std::error::Error>> {
    ///     let config = CacheConfig::new("redis://localhost:6379");
    ///     let client = RedisClient::new(&config).await?;
    ///     Ok(client)
    /// }
    /// ```
    pub async fn new(config: &CacheConfig) -> Result<Self, InfrastructureError> {
        info!("Creating Redis client with URL: {}", mask_url(&config.url));

        let client = Client::open(config.url.as_str()).map_err(|e| {
            error!("Failed to parse Redis URL: {}", e);
            InfrastructureError::Config(format!("Invalid Redis URL: {}", e))
        })?;

        let connection = Self::create_connection_with_retry(
            client,
            config.connect_retries.max(1),
            config.connect_retry_delay_ms,
        )
        .await?;

        info!("Redis client created successfully");

        Ok(Self { connection })
    }

    /// Create multiplexed connection with retry logic
    async fn create_connection_with_retry(
        client: Client,
        max_retries: u32,
        retry_delay_ms: u64,
    ) -> Result<MultiplexedConnection, InfrastructureError> {
        let mut attempts = 0;
        let mut delay = retry_delay_ms;

        loop {
            attempts += 1;
            debug!("Attempting to connect to Redis (attempt {})", attempts);

            match client.get_multiplexed_async_connection().await {
                Ok(connection) => {
                    info!("Successfully connected to Redis");
                    return Ok(connection);
                }
                Err(e) if attempts < max_retries => {
                    warn!(
                        "Failed to connect to Redis (attempt {}/{}): {}. Retrying in {}ms...",
                        attempts, max_retries, e, delay
                    );
                    sleep(Duration::from_millis(delay)).await;
                    // Exponential backoff with cap at 5 seconds
                    delay = (delay * 2).min(5000);
                }
                Err(e) => {
                    error!(
                        "Failed to connect to Redis after {} attempts: {}",
                        attempts, e
                    );
                    return Err(InfrastructureError::Cache(e));
                }
            }
        }
    }

    /// Set a value with expiration time
    ///
    /// # Arguments
    /// * `key` - Cache key
    /// * `value` - Value to cache
    /// * `expiry_seconds` - Time to live in seconds
    pub async fn set_with_expiry(
        &self,
        key: &str,
        value: &str,
        expiry_seconds: u64,
    ) -> Result<(), InfrastructureError> {
        debug!("Setting key '{}' with expiry {}s", masked_key(key), expiry_seconds);

        let mut conn = self.connection.clone();
        conn.set_ex::<_, _, ()>(key, value, expiry_seconds)
            .await
            .map_err(|e| {
                error!("Failed to set key '{}': {}", masked_key(key), e);
                InfrastructureError::Cache(e)
            })
    }

    /// Set a value with expiration only if the key is absent
    ///
    /// Issues `SET key value NX GET EX ttl` (Redis 7+) so the check and the
    /// write happen in one atomic command.
    ///
    /// # Returns
    /// * `Ok(None)` - The key was free and now holds `value`
    /// * `Ok(Some(existing))` - The key already held `existing`; nothing written
    pub async fn set_nx_with_expiry(
        &self,
        key: &str,
        value: &str,
        expiry_seconds: u64,
    ) -> Result<Option<String>, InfrastructureError> {
        debug!("Setting key '{}' if absent with expiry {}s", masked_key(key), expiry_seconds);

        let mut conn = self.connection.clone();
        let previous: Option<String> = redis::cmd("SET")
            .arg(key)
            .arg(value)
            .arg("NX")
            .arg("GET")
            .arg("EX")
            .arg(expiry_seconds)
            .query_async(&mut conn)
            .await
            .map_err(|e| {
                error!("Failed to set key '{}' if absent: {}", masked_key(key), e);
                InfrastructureError::Cache(e)
            })?;

        if previous.is_some() {
            debug!("Key '{}' already present, left unchanged", masked_key(key));
        }
        Ok(previous)
    }

    /// Get a value from cache
    ///
    /// # Returns
    /// * `Result<Option<String>, InfrastructureError>` - Cached value or None if not found
    ///
    /// # Example
    /// ```no_run
    /// use vs_infra::cache::RedisClient;
    ///
    /// async fn get_verification_code(client: &RedisClient, email: &str) {
    ///     let key = format!("code_{}", email);
    ///
    ///     match client.get(&key).await {
    ///         Ok(Some(code)) => println!("Found code: {}", code),
    ///         Ok(None) => println!("Code not found or expired"),
    ///         Err(e) => println!("Error: {}", e),
    ///     }
    /// }
    /// ```
    pub async fn get(&self, key: &str) -> Result<Option<String>, InfrastructureError> {
        debug!("Getting key '{}'", masked_key(key));

        let mut conn = self.connection.clone();
        match conn.get::<_, Option<String>>(key).await {
            Ok(value) => {
                if value.is_some() {
                    debug!("Successfully retrieved key '{}'", masked_key(key));
                } else {
                    debug!("Key '{}' not found", masked_key(key));
                }
                Ok(value)
            }
            Err(e) => {
                error!("Failed to get key '{}': {}", masked_key(key), e);
                Err(InfrastructureError::Cache(e))
            }
        }
    }

    /// Delete a key from cache
    ///
    /// # Returns
    /// * `Result<bool, InfrastructureError>` - True if key was deleted, false if not found
    pub async fn delete(&self, key: &str) -> Result<bool, InfrastructureError> {
        debug!("Deleting key '{}'", masked_key(key));

        let mut conn = self.connection.clone();
        match conn.del::<_, u32>(key).await {
            Ok(deleted_count) => Ok(deleted_count > 0),
            Err(e) => {
                error!("Failed to delete key '{}': {}", masked_key(key), e);
                Err(InfrastructureError::Cache(e))
            }
        }
    }

    /// Check if the Redis connection is healthy
    ///
    /// Performs a PING command to verify connectivity.
    pub async fn health_check(&self) -> Result<bool, InfrastructureError> {
        debug!("Performing Redis health check");

        let mut conn = self.connection.clone();
        match redis::cmd("PING").query_async::<_, String>(&mut conn).await {
            Ok(response) if response == "PONG" => {
                debug!("Redis health check passed");
                Ok(true)
            }
            Ok(response) => {
                warn!("Redis health check returned unexpected response: {}", response);
                Ok(false)
            }
            Err(e) => {
                error!("Redis health check failed: {}", e);
                Err(InfrastructureError::Cache(e))
            }
        }
    }

    /// Check if a key exists in cache
    pub async fn exists(&self, key: &str) -> Result<bool, InfrastructureError> {
        debug!("Checking if key '{}' exists", masked_key(key));

        let mut conn = self.connection.clone();
        match conn.exists::<_, bool>(key).await {
            Ok(exists) => {
                debug!("Key '{}' exists: {}", masked_key(key), exists);
                Ok(exists)
            }
            Err(e) => {
                error!("Failed to check key '{}' existence: {}", masked_key(key), e);
                Err(InfrastructureError::Cache(e))
            }
        }
    }

    /// Get time-to-live for a key
    ///
    /// # Returns
    /// * `Result<Option<i64>, InfrastructureError>` - TTL in seconds, None if key doesn't exist or has no expiry
    pub async fn ttl(&self, key: &str) -> Result<Option<i64>, InfrastructureError> {
        debug!("Getting TTL for key '{}'", masked_key(key));

        let mut conn = self.connection.clone();
        match conn.ttl::<_, i64>(key).await {
            Ok(ttl) if ttl >= 0 => {
                debug!("Key '{}' has TTL: {}s", masked_key(key), ttl);
                Ok(Some(ttl))
            }
            Ok(-1) => {
                debug!("Key '{}' exists but has no expiry", masked_key(key));
                Ok(None)
            }
            Ok(_) => {
                debug!("Key '{}' does not exist", masked_key(key));
                Ok(None)
            }
            Err(e) => {
                error!("Failed to get TTL for key '{}': {}", masked_key(key), e);
                Err(InfrastructureError::Cache(e))
            }
        }
    }
}

/// Mask sensitive parts of Redis URL for logging
pub(crate) fn mask_url(url: &str) -> String {
    if let Some(at_pos) = url.find('@') {
        if let Some(proto_end) = url.find("://") {
            let proto = &url[..proto_end + 3];
            let host_part = &url[at_pos..];
            return format!("{}****{}", proto, host_part);
        }
    }
    url.to_string()
}
