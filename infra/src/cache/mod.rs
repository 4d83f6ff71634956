//! Cache module for verification code storage
//!
//! This module provides the Redis client with connection retry, the Redis
//! cache gateway and an in-memory gateway for development.

pub mod memory_cache;
#[cfg(feature = "redis-cache")]
pub mod redis_client;
#[cfg(feature = "redis-cache")]
pub mod verification_cache;

#[cfg(test)]
mod tests;

pub use memory_cache::MemoryCache;
#[cfg(feature = "redis-cache")]
pub use redis_client::RedisClient;
#[cfg(feature = "redis-cache")]
pub use verification_cache::RedisVerificationCache;

// Re-export commonly used types
pub use vs_shared::config::CacheConfig;
