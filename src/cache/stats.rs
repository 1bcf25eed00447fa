//! Cache Statistics Module
//!
//! Tracks cache performance counters: hits, misses, evictions, expirations
//! and inserts, plus a usage snapshot of the byte budget.

use serde::Serialize;

// == Cache Stats ==
/// Cache performance counters and usage snapshot.
///
/// Counters are monotone for the store's lifetime; `clear()` on the store
/// does not reset them. The usage fields (entry count and byte figures) are
/// filled in when a snapshot is taken.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    /// Number of successful cache retrievals
    pub hits: u64,
    /// Number of failed cache retrievals (key not found or expired)
    pub misses: u64,
    /// Number of entries evicted under byte-budget pressure
    pub evictions: u64,
    /// Number of entries removed because their TTL elapsed
    pub expirations: u64,
    /// Number of entries stored
    pub inserts: u64,
    /// Current number of live entries
    pub entry_count: usize,
    /// Sum of live entry sizes in bytes
    pub current_bytes: usize,
    /// Configured byte-budget ceiling
    pub max_bytes: usize,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no requests have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    // == Record Hit ==
    /// Increments the hit counter.
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    // == Record Miss ==
    /// Increments the miss counter.
    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    // == Record Eviction ==
    /// Increments the eviction counter.
    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    // == Record Expiration ==
    /// Increments the expiration counter.
    pub fn record_expiration(&mut self) {
        self.expirations += 1;
    }

    // == Record Insert ==
    /// Increments the insert counter.
    pub fn record_insert(&mut self) {
        self.inserts += 1;
    }

    // == Update Usage ==
    /// Fills in the usage snapshot fields.
    pub fn set_usage(&mut self, entry_count: usize, current_bytes: usize, max_bytes: usize) {
        self.entry_count = entry_count;
        self.current_bytes = current_bytes;
        self.max_bytes = max_bytes;
    }
}
