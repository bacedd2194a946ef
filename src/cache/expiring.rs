//! Expiring Cache Module
//!
//! Thread-safe handle combining the entry store, its lock, and the sweeper lifecycle.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::warn;

use crate::cache::{CacheEntry, CacheStore, Expiration};
use crate::error::{CacheError, Result};
use crate::tasks::spawn_sweeper;

// == Expiring Cache ==
/// Concurrent key-value cache with per-entry expiration.
///
/// Lookups share a read lock; inserts, deletes and sweeps take the write lock.
/// Values are copied in and out, so no caller ever holds a reference into the map.
///
/// When built with a non-zero sweep interval, a background task removes
/// expired entries. Call [`ExpiringCache::stop`] to shut it down and wait for
/// it; dropping the cache cancels it without waiting.
pub struct ExpiringCache {
    store: Arc<RwLock<CacheStore>>,
    shutdown: CancellationToken,
    sweeper: Mutex<Option<JoinHandle<()>>>,
}

impl ExpiringCache {
    // == Constructors ==
    /// Creates a cache whose entries never expire unless told otherwise.
    ///
    /// A zero `sweep_interval` disables the sweeper; expired entries are then
    /// only hidden from reads, never removed.
    ///
    /// # Panics
    /// Panics if `sweep_interval` is non-zero and no Tokio runtime is running.
    pub fn new(sweep_interval: Duration) -> Self {
        Self::with_default_expiration(Expiration::Never, sweep_interval)
    }

    /// Creates a cache that applies `default_expiration` to `Expiration::Default` inserts.
    pub fn with_default_expiration(default_expiration: Expiration, sweep_interval: Duration) -> Self {
        let store = Arc::new(RwLock::new(CacheStore::new(default_expiration)));
        let shutdown = CancellationToken::new();

        let sweeper = if sweep_interval.is_zero() {
            None
        } else {
            Some(spawn_sweeper(store.clone(), sweep_interval, shutdown.clone()))
        };

        Self {
            store,
            shutdown,
            sweeper: Mutex::new(sweeper),
        }
    }

    // == Insert ==
    /// Stores `value` under `key`, replacing any previous entry.
    pub async fn insert(&self, key: impl Into<String>, value: impl Into<String>, expiration: Expiration) {
        let (key, value) = (key.into(), value.into());
        let now = Instant::now();
        self.store.write().await.insert(key, value, expiration, now);
    }

    /// Stores `value` under `key` with the cache's default expiration.
    pub async fn insert_default(&self, key: impl Into<String>, value: impl Into<String>) {
        self.insert(key, value, Expiration::Default).await;
    }

    // == Add ==
    /// Stores `value` only if `key` is absent or expired.
    ///
    /// Fails with `KeyExists` when a live entry is already present.
    pub async fn add(
        &self,
        key: impl Into<String>,
        value: impl Into<String>,
        expiration: Expiration,
    ) -> Result<()> {
        let (key, value) = (key.into(), value.into());
        let now = Instant::now();
        let mut store = self.store.write().await;

        if store.add(key.clone(), value, expiration, now) {
            Ok(())
        } else {
            Err(CacheError::KeyExists(key))
        }
    }

    // == Get ==
    /// Returns the live value for `key`.
    ///
    /// Fails with `KeyNotFound` if the key is absent or expired.
    pub async fn get(&self, key: &str) -> Result<String> {
        self.try_get(key)
            .await
            .ok_or_else(|| CacheError::KeyNotFound(key.to_string()))
    }

    /// Returns the live value for `key`, or None if absent or expired.
    pub async fn try_get(&self, key: &str) -> Option<String> {
        let now = Instant::now();
        let store = self.store.read().await;
        store.lookup(key, now).map(|entry| entry.value.clone())
    }

    // == Key Exists ==
    /// Returns true if `key` holds a live value.
    pub async fn key_exists(&self, key: &str) -> bool {
        let now = Instant::now();
        self.store.read().await.lookup(key, now).is_some()
    }

    // == Delete ==
    /// Removes `key`. Returns true if an entry was removed.
    pub async fn delete(&self, key: &str) -> bool {
        self.store.write().await.remove(key)
    }

    /// Removes every expired entry now. Returns how many were removed.
    pub async fn delete_expired(&self) -> usize {
        let now = Instant::now();
        self.store.write().await.remove_expired(now)
    }

    // == Inspection ==
    /// Copies all live entries.
    pub async fn items(&self) -> HashMap<String, CacheEntry> {
        let now = Instant::now();
        self.store.read().await.snapshot(now)
    }

    /// Number of stored entries, including expired ones not yet swept.
    pub async fn item_count(&self) -> usize {
        self.store.read().await.len()
    }

    /// Removes every entry.
    pub async fn flush(&self) {
        self.store.write().await.clear();
    }

    // == Lifecycle ==
    /// Returns true while the background sweeper is running.
    pub async fn is_sweeping(&self) -> bool {
        self.sweeper
            .lock()
            .await
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Stops the sweeper and waits for it to exit.
    ///
    /// Safe to call more than once; later calls return immediately. The cache
    /// stays fully usable afterwards, it just no longer sweeps.
    pub async fn stop(&self) {
        self.shutdown.cancel();

        let handle = self.sweeper.lock().await.take();
        if let Some(handle) = handle {
            if let Err(err) = handle.await {
                warn!(error = %err, "Sweeper task ended abnormally");
            }
        }
    }
}

impl Drop for ExpiringCache {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

impl std::fmt::Debug for ExpiringCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExpiringCache")
            .field("stopped", &self.shutdown.is_cancelled())
            .finish_non_exhaustive()
    }
}
