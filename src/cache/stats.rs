//! Cache Statistics Module
//!
//! Counts weather reads answered from the cache against those that went to
//! the remote service.

// == Cache Stats ==
/// Read counters of a weather cache.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CacheStats {
    /// Reads answered from a fresh entry
    pub hits: u64,
    /// Reads that found no entry or a stale one
    pub misses: u64,
    /// Coordinates stored, stale ones included
    pub total_entries: usize,
}

impl CacheStats {
    // == Constructor ==
    /// Zeroed counters for an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one read; `fresh` tells whether it was served from the cache.
    pub fn record_lookup(&mut self, fresh: bool) {
        if fresh {
            self.hits += 1;
        } else {
            self.misses += 1;
        }
    }

    pub fn lookups(&self) -> u64 {
        self.hits + self.misses
    }

    // == Hit Rate ==
    /// Share of reads served without a fetch, 0.0 before the first read.
    pub fn hit_rate(&self) -> f64 {
        match self.lookups() {
            0 => 0.0,
            reads => self.hits as f64 / reads as f64,
        }
    }

    pub(crate) fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }
}
