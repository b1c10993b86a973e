//! Cache Module
//!
//! Provides a fixed-capacity, thread-safe key-value store with LRU eviction.

mod entry;
mod lru;
mod stats;
mod store;


use std::sync::Arc;

use crate::error::Result;

// Re-export public types
pub use entry::Entry;
pub use lru::RecencyList;
pub use stats::CacheStats;
pub use store::LruStore;

// == Cache Trait ==
/// A shareable key-value cache.
///
/// `get` counts as a use of the key, so implementations mutate internal
/// state on reads and must synchronize them like writes.
pub trait Cache: Send + Sync {
    /// Inserts or updates a key.
    fn put(&self, key: String, value: String);

    /// Looks up a key, returning `None` if it is not present.
    fn get(&self, key: &str) -> Option<String>;

    /// Number of entries currently held.
    fn len(&self) -> usize;

    /// Returns true if the cache holds no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum number of entries.
    fn capacity(&self) -> usize;

    /// Snapshot of the cache statistics.
    fn stats(&self) -> CacheStats;
}

// == Constructor ==
/// Creates an LRU cache behind the [`Cache`] trait.
///
/// # Errors
/// Returns [`crate::error::CacheError::InvalidCapacity`] if `capacity` is not positive.
pub fn new_cache(capacity: i64) -> Result<Arc<dyn Cache>> {
    Ok(Arc::new(LruStore::new(capacity)?))
}
