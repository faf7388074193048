//! Cache Store Module
//!
//! The unsynchronized entry map. [`ExpiringCache`](super::ExpiringCache) wraps
//! it in a mutex and drives [`CacheStore::reap_expired`] from a background task.

use std::collections::HashMap;
use std::time::Duration;

use tokio::time::Instant;

use crate::cache::{CacheEntry, CacheStats};

// == Cache Store ==
/// Key-value storage of raw response bodies with a fixed expiry interval.
#[derive(Debug)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Age past which an entry may be reaped
    interval: Duration,
    /// Lookup and sweep statistics
    stats: CacheStats,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store whose entries expire after `interval`.
    pub fn new(interval: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            interval,
            stats: CacheStats::new(),
        }
    }

    // == Put ==
    /// Stores `value` under `key` with a fresh creation timestamp.
    ///
    /// An existing entry is replaced entirely, timestamp included.
    pub fn put(&mut self, key: String, value: Vec<u8>) {
        self.entries.insert(key, CacheEntry::new(value));
        self.stats.set_total_entries(self.entries.len());
    }

    // == Get ==
    /// Returns a copy of the value stored under `key`, if any.
    ///
    /// Age is not checked here: an entry stays visible until a sweep removes it.
    pub fn get(&mut self, key: &str) -> Option<Vec<u8>> {
        match self.entries.get(key) {
            Some(entry) => {
                self.stats.record_hit();
                Some(entry.value.clone())
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Reap Expired ==
    /// Removes every entry that is at least `interval` old at `now`.
    ///
    /// Returns the number of entries removed.
    pub fn reap_expired(&mut self, now: Instant) -> usize {
        let interval = self.interval;
        let before = self.entries.len();

        self.entries
            .retain(|_, entry| !entry.is_expired_at(now, interval));

        let removed = before - self.entries.len();
        self.stats.record_reaped(removed);
        self.stats.set_total_entries(self.entries.len());
        removed
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
