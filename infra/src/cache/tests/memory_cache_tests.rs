//! Unit tests for the in-memory cache gateway

use std::time::Duration;

use vs_core::services::verification::{CacheServiceTrait, StoreOutcome};

use crate::cache::memory_cache::SWEEP_INTERVAL;
use crate::cache::MemoryCache;

use super::LogBuffer;

#[tokio::test]
async fn test_store_and_lookup() {
    let cache = MemoryCache::new();

    assert_eq!(cache.lookup("code_a@example.com").await.unwrap(), None);

    cache.store_with_ttl("code_a@example.com", "abc", 600).await.unwrap();

    assert_eq!(
        cache.lookup("code_a@example.com").await.unwrap(),
        Some("abc".to_string())
    );
    assert!(cache.exists("code_a@example.com").await.unwrap());
    assert_eq!(cache.len().unwrap(), 1);
}

#[tokio::test]
async fn test_store_overwrites_existing_value() {
    let cache = MemoryCache::new();

    cache.store_with_ttl("key", "first", 600).await.unwrap();
    cache.store_with_ttl("key", "second", 600).await.unwrap();

    assert_eq!(cache.lookup("key").await.unwrap(), Some("second".to_string()));
}

#[tokio::test(start_paused = true)]
async fn test_entries_expire_after_ttl() {
    let cache = MemoryCache::new();
    cache.store_with_ttl("key", "value", 600).await.unwrap();

    tokio::time::advance(Duration::from_secs(599)).await;
    assert_eq!(cache.ttl("key").await.unwrap(), Some(1));
    assert!(cache.exists("key").await.unwrap());

    tokio::time::advance(Duration::from_secs(1)).await;
    assert_eq!(cache.lookup("key").await.unwrap(), None);
    assert!(!cache.exists("key").await.unwrap());
    assert_eq!(cache.ttl("key").await.unwrap(), None);
    assert!(cache.is_empty().unwrap());
}

#[tokio::test]
async fn test_store_if_absent_keeps_first_value() {
    let cache = MemoryCache::new();

    let first = cache.store_if_absent("key", "winner", 600).await.unwrap();
    let second = cache.store_if_absent("key", "loser", 600).await.unwrap();

    assert_eq!(first, StoreOutcome::Inserted);
    assert_eq!(second, StoreOutcome::Existing("winner".to_string()));
    assert_eq!(cache.lookup("key").await.unwrap(), Some("winner".to_string()));
}

#[tokio::test(start_paused = true)]
async fn test_store_if_absent_replaces_expired_value() {
    let cache = MemoryCache::new();
    cache.store_with_ttl("key", "stale", 10).await.unwrap();

    tokio::time::advance(Duration::from_secs(11)).await;

    let outcome = cache.store_if_absent("key", "fresh", 600).await.unwrap();
    assert_eq!(outcome, StoreOutcome::Inserted);
    assert_eq!(cache.lookup("key").await.unwrap(), Some("fresh".to_string()));
}

#[tokio::test(start_paused = true)]
async fn test_unread_expired_entries_are_swept_on_write() {
    let cache = MemoryCache::new();
    for i in 0..1000 {
        cache
            .store_with_ttl(&format!("code_user{}@example.com", i), "abc", 600)
            .await
            .unwrap();
    }
    assert_eq!(cache.held().unwrap(), 1000);

    tokio::time::advance(Duration::from_secs(601)).await;
    assert_eq!(cache.len().unwrap(), 0);

    for i in 0..SWEEP_INTERVAL {
        cache
            .store_with_ttl(&format!("code_late{}@example.com", i), "def", 600)
            .await
            .unwrap();
    }

    assert_eq!(cache.held().unwrap(), SWEEP_INTERVAL as usize);
    assert_eq!(cache.len().unwrap(), SWEEP_INTERVAL as usize);
}

#[tokio::test(start_paused = true)]
async fn test_purge_expired_keeps_live_entries() {
    let cache = MemoryCache::new();
    cache.store_with_ttl("short", "a", 10).await.unwrap();
    cache.store_with_ttl("long", "b", 600).await.unwrap();

    tokio::time::advance(Duration::from_secs(11)).await;

    assert_eq!(cache.purge_expired().unwrap(), 1);
    assert_eq!(cache.held().unwrap(), 1);
    assert_eq!(cache.lookup("long").await.unwrap(), Some("b".to_string()));
}

#[tokio::test(start_paused = true)]
async fn test_eviction_log_masks_the_address() {
    let logs = LogBuffer::default();
    let _guard = logs.install();

    let cache = MemoryCache::new();
    cache.store_with_ttl("code_john@example.com", "abc", 1).await.unwrap();
    tokio::time::advance(Duration::from_secs(2)).await;
    assert_eq!(cache.lookup("code_john@example.com").await.unwrap(), None);

    let output = logs.contents();
    assert!(output.contains("code_j***@example.com"), "{}", output);
    assert!(!output.contains("john@example.com"), "{}", output);
}
