//! In-process cache gateway
//!
//! Used for local development and tests when no Redis server is around.
//! State is lost on restart and is not shared between processes.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;

use vs_core::domain::masked_key;
use vs_core::errors::CacheError;
use vs_core::services::verification::{CacheServiceTrait, StoreOutcome};

/// Writes between two sweeps of expired entries
pub const SWEEP_INTERVAL: u64 = 64;

#[derive(Default)]
struct Store {
    entries: HashMap<String, (String, Instant)>,
    writes: u64,
}

impl Store {
    /// Live value and expiry for `key`, evicting it if it has expired
    fn live_entry(&mut self, key: &str) -> Option<(String, Instant)> {
        match self.entries.get(key) {
            Some((_, expires_at)) if *expires_at <= Instant::now() => {
                debug!(key = %masked_key(key), "Evicting expired entry");
                self.entries.remove(key);
                None
            }
            Some(entry) => Some(entry.clone()),
            None => None,
        }
    }

    fn insert(&mut self, key: &str, value: &str, ttl_seconds: u64) {
        let expires_at = Instant::now() + Duration::from_secs(ttl_seconds);
        self.entries.insert(key.to_string(), (value.to_string(), expires_at));

        self.writes += 1;
        if self.writes % SWEEP_INTERVAL == 0 {
            self.sweep();
        }
    }

    /// Drop every expired entry, returning how many went
    fn sweep(&mut self) -> usize {
        let now = Instant::now();
        let before = self.entries.len();
        self.entries.retain(|_, (_, expires_at)| *expires_at > now);
        let removed = before - self.entries.len();
        if removed > 0 {
            debug!(removed, remaining = self.entries.len(), "Swept expired entries");
        }
        removed
    }
}

/// Expiring key/value store held in memory
///
/// An expired entry is dropped on the next access to its key. Every
/// [`SWEEP_INTERVAL`] writes the whole map is swept as well, so keys that are
/// never read again do not pile up.
#[derive(Default)]
pub struct MemoryCache {
    store: Mutex<Store>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live entries
    pub fn len(&self) -> Result<usize, CacheError> {
        let now = Instant::now();
        let store = self.lock()?;
        Ok(store
            .entries
            .values()
            .filter(|(_, expires_at)| *expires_at > now)
            .count())
    }

    pub fn is_empty(&self) -> Result<bool, CacheError> {
        Ok(self.len()? == 0)
    }

    /// Number of entries held in memory, expired ones included
    pub fn held(&self) -> Result<usize, CacheError> {
        Ok(self.lock()?.entries.len())
    }

    /// Drop every expired entry now
    pub fn purge_expired(&self) -> Result<usize, CacheError> {
        Ok(self.lock()?.sweep())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Store>, CacheError> {
        self.store
            .lock()
            .map_err(|_| CacheError::new("memory cache lock poisoned"))
    }
}

#[async_trait]
impl CacheServiceTrait for MemoryCache {
    async fn lookup(&self, key: &str) -> Result<Option<String>, CacheError> {
        Ok(self.lock()?.live_entry(key).map(|(value, _)| value))
    }

    async fn store_with_ttl(&self, key: &str, value: &str, ttl_seconds: u64) -> Result<(), CacheError> {
        self.lock()?.insert(key, value, ttl_seconds);
        Ok(())
    }

    async fn exists(&self, key: &str) -> Result<bool, CacheError> {
        Ok(self.lock()?.live_entry(key).is_some())
    }

    async fn store_if_absent(&self, key: &str, value: &str, ttl_seconds: u64) -> Result<StoreOutcome, CacheError> {
        let mut store = self.lock()?;
        if let Some((existing, _)) = store.live_entry(key) {
            return Ok(StoreOutcome::Existing(existing));
        }
        store.insert(key, value, ttl_seconds);
        Ok(StoreOutcome::Inserted)
    }

    async fn ttl(&self, key: &str) -> Result<Option<u64>, CacheError> {
        Ok(self
            .lock()?
            .live_entry(key)
            .map(|(_, expires_at)| expires_at.saturating_duration_since(Instant::now()).as_secs()))
    }
}
