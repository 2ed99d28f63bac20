//! Cache Store Module
//!
//! Keyed storage of weather readings gated by a TTL check on read.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};

use crate::cache::{CacheEntry, CacheStats};
use crate::models::WeatherReading;

// == Cache Store ==
/// Map of readings keyed by coordinate.
///
/// Stale entries are never removed; they are skipped on read and replaced on
/// the next write for the same key.
#[derive(Debug)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Lookup statistics
    stats: CacheStats,
    /// How long an entry stays fresh
    ttl: Duration,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store whose entries stay fresh for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            ttl,
        }
    }

    // == Get ==
    /// Returns the reading stored under `key` if it is fresh at `now`.
    ///
    /// Records a hit or a miss.
    pub fn get(&mut self, key: &str, now: DateTime<Utc>) -> Option<WeatherReading> {
        let fresh = self
            .entries
            .get(key)
            .filter(|entry| entry.is_fresh(now, self.ttl))
            .map(|entry| entry.data);
        self.stats.record_lookup(fresh.is_some());
        fresh
    }

    // == Insert ==
    /// Stores `data` under `key`, stamped with `now`.
    ///
    /// Any prior entry for the key is overwritten.
    pub fn insert(&mut self, key: String, data: WeatherReading, now: DateTime<Utc>) {
        let entry = CacheEntry::new(key.clone(), data, now);
        self.entries.insert(key, entry);
        self.stats.set_total_entries(self.entries.len());
    }

    /// Raw entry for `key`, fresh or not.
    pub fn entry(&self, key: &str) -> Option<&CacheEntry> {
        self.entries.get(key)
    }

    // == Stats ==
    /// Returns current cache statistics.
    ///
    /// `total_entries` counts stale entries too, since none are removed.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }
}
