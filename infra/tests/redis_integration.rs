//! Integration tests for the Redis cache client and gateway
//!
//! These tests require a running Redis 7+ instance to execute.
//! Run with: cargo test -p vs_infra --test redis_integration -- --ignored

use std::sync::Arc;

use vs_core::domain::value_objects::ErrorCode;
use vs_core::services::verification::{
    CacheServiceTrait, IssuanceStrategy, StoreOutcome, VerificationService,
    VerificationServiceConfig,
};
use vs_infra::cache::{CacheConfig, RedisClient, RedisVerificationCache};
use vs_infra::mail::{MailServiceAdapter, MockMailService};

fn test_config() -> CacheConfig {
    CacheConfig::new(
        std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379".to_string()),
    )
}

fn unique_email(tag: &str) -> String {
    format!("{}-{}@integration.test", tag, uuid::Uuid::new_v4())
}

#[tokio::test]
#[ignore] // Requires Redis server
async fn test_redis_connection() {
    let client = RedisClient::new(&test_config()).await;
    assert!(client.is_ok(), "Failed to connect to Redis");
    assert!(client.unwrap().health_check().await.unwrap());
}

#[tokio::test]
#[ignore] // Requires Redis server
async fn test_set_get_and_ttl() {
    let client = RedisClient::new(&test_config()).await.unwrap();
    let key = format!("code_{}", unique_email("ttl"));

    client.set_with_expiry(&key, "abc123", 600).await.unwrap();

    assert_eq!(client.get(&key).await.unwrap(), Some("abc123".to_string()));
    assert!(client.exists(&key).await.unwrap());
    let ttl = client.ttl(&key).await.unwrap().unwrap();
    assert!(ttl > 590 && ttl <= 600);

    assert!(client.delete(&key).await.unwrap());
    assert_eq!(client.get(&key).await.unwrap(), None);
}

#[tokio::test]
#[ignore] // Requires Redis server
async fn test_set_if_absent_returns_existing_value() {
    let cache = RedisVerificationCache::new(RedisClient::new(&test_config()).await.unwrap());
    let key = format!("code_{}", unique_email("nx"));

    let first = cache.store_if_absent(&key, "winner", 600).await.unwrap();
    let second = cache.store_if_absent(&key, "loser", 600).await.unwrap();

    assert_eq!(first, StoreOutcome::Inserted);
    assert_eq!(second, StoreOutcome::Existing("winner".to_string()));
    assert_eq!(cache.lookup(&key).await.unwrap(), Some("winner".to_string()));

    cache.client().delete(&key).await.unwrap();
}

#[tokio::test]
#[ignore] // Requires Redis server
async fn test_concurrent_first_requests_converge_with_set_if_absent() {
    let cache = Arc::new(RedisVerificationCache::new(
        RedisClient::new(&test_config()).await.unwrap(),
    ));
    let mock = MockMailService::new();
    let mail = Arc::new(MailServiceAdapter::new(Box::new(mock.clone())));
    let config = VerificationServiceConfig {
        strategy: IssuanceStrategy::SetIfAbsent,
        ..Default::default()
    };
    let service = Arc::new(VerificationService::new(cache.clone(), mail, config));
    let email = unique_email("race");

    let mut handles = Vec::new();
    for _ in 0..8 {
        let service = service.clone();
        let email = email.clone();
        handles.push(tokio::spawn(async move { service.issue(&email).await }));
    }
    for handle in handles {
        assert_eq!(handle.await.unwrap().error_code, ErrorCode::Success);
    }

    let stored = cache.lookup(&format!("code_{}", email)).await.unwrap().unwrap();
    let sent = mock.sent();
    assert_eq!(sent.len(), 8);
    assert!(sent.iter().all(|mail| mail.body.contains(&stored)));

    cache.client().delete(&format!("code_{}", email)).await.unwrap();
}
