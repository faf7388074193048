//! Expiring Cache Module
//!
//! The shareable cache handle: a mutex-guarded [`CacheStore`] plus the
//! background reaper that keeps it trimmed.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;
use tracing::debug;

use crate::cache::{CacheStats, CacheStore};
use crate::error::{CacheError, CacheResult};
use crate::tasks::spawn_reaper_task;

// == Expiring Cache ==
/// Thread-safe map from string keys to byte payloads whose entries are
/// removed by a background sweep once they reach the configured interval.
///
/// Every `get`, `put` and sweep takes the same lock, so a `get` that starts
/// after a `put` returned always observes that `put` (unless a sweep removed
/// the entry in between).
///
/// The reaper runs until the cache is dropped (which closes its stop channel)
/// or [`ExpiringCache::shutdown`] is awaited. Share the cache between callers
/// with an `Arc`.
#[derive(Debug)]
pub struct ExpiringCache {
    store: Arc<Mutex<CacheStore>>,
    interval: Duration,
    stop: watch::Sender<()>,
    reaper: JoinHandle<()>,
}

impl ExpiringCache {
    // == Constructor ==
    /// Creates an empty cache and starts its reaper.
    ///
    /// Must be called from within a tokio runtime.
    ///
    /// # Errors
    /// Returns [`CacheError::InvalidInterval`] if `interval` is zero.
    pub fn new(interval: Duration) -> CacheResult<Self> {
        if interval.is_zero() {
            return Err(CacheError::InvalidInterval(interval));
        }

        let store = Arc::new(Mutex::new(CacheStore::new(interval)));
        let (stop, stop_rx) = watch::channel(());
        let reaper = spawn_reaper_task(store.clone(), interval, stop_rx);

        debug!(interval_ms = interval.as_millis() as u64, "Expiring cache created");

        Ok(Self {
            store,
            interval,
            stop,
            reaper,
        })
    }

    // == Put ==
    /// Inserts or overwrites the entry for `key`, stamped with the current time.
    pub async fn put(&self, key: impl Into<String>, value: impl Into<Vec<u8>>) {
        let key = key.into();
        let value = value.into();
        debug!(key = %key, bytes = value.len(), "cache put");
        self.store.lock().await.put(key, value);
    }

    // == Get ==
    /// Returns a copy of the value for `key` if it is present and not yet reaped.
    pub async fn get(&self, key: &str) -> Option<Vec<u8>> {
        let value = self.store.lock().await.get(key);
        debug!(key = %key, hit = value.is_some(), "cache get");
        value
    }

    /// Returns the entry lifetime and sweep period.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub async fn len(&self) -> usize {
        self.store.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.store.lock().await.is_empty()
    }

    pub async fn stats(&self) -> CacheStats {
        self.store.lock().await.stats()
    }

    // == Shutdown ==
    /// Stops the reaper and waits for it to finish.
    ///
    /// Entries are dropped with the cache.
    pub async fn shutdown(self) {
        let Self { stop, reaper, .. } = self;
        drop(stop);
        if let Err(err) = reaper.await {
            debug!(error = %err, "Cache reaper ended abnormally");
        }
    }
}
