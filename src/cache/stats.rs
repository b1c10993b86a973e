//! Store Statistics Module
//!
//! Running counters live inside the store's locked state. Callers only ever
//! see a [`CacheStats`] snapshot taken under that same lock, so the counters
//! and the entry count in one snapshot always agree.

use serde::Serialize;

// == Counters ==
/// Monotonic counters, mutated only while the store lock is held.
#[derive(Debug, Default)]
pub(crate) struct Counters {
    hits: u64,
    misses: u64,
    evictions: u64,
}

impl Counters {
    pub(crate) fn hit(&mut self) {
        self.hits += 1;
    }

    pub(crate) fn miss(&mut self) {
        self.misses += 1;
    }

    pub(crate) fn eviction(&mut self) {
        self.evictions += 1;
    }

    // == Snapshot ==
    /// Freezes the counters together with the store's current shape.
    pub(crate) fn snapshot(&self, entries: usize, capacity: usize) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            evictions: self.evictions,
            total_entries: entries,
            capacity,
        }
    }
}

// == Cache Stats ==
/// Point-in-time view of a store's activity and occupancy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Lookups that found their key
    pub hits: u64,
    /// Lookups for a key that was not present
    pub misses: u64,
    /// Entries dropped from the tail to make room for a new key
    pub evictions: u64,
    /// Live entries when the snapshot was taken
    pub total_entries: usize,
    /// Maximum number of entries the store holds
    pub capacity: usize,
}

impl CacheStats {
    /// Total number of lookups, hits and misses alike.
    pub fn lookups(&self) -> u64 {
        self.hits + self.misses
    }

    /// Fraction of lookups that hit, or 0.0 before the first lookup.
    pub fn hit_rate(&self) -> f64 {
        match self.lookups() {
            0 => 0.0,
            total => self.hits as f64 / total as f64,
        }
    }

    /// Returns true if the next new key will evict an entry.
    pub fn is_full(&self) -> bool {
        self.total_entries >= self.capacity
    }
}
