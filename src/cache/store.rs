//! LRU Store Module
//!
//! Main cache engine: a key index and a recency list guarded by one lock.

use std::collections::HashMap;

use parking_lot::Mutex;
use tracing::debug;

use super::stats::Counters;
use crate::cache::{Cache, CacheStats, RecencyList};
use crate::error::{CacheError, Result};

/// Upper bound on the up-front allocation; larger stores grow on demand.
const PREALLOC_LIMIT: usize = 1024;

// == Store Inner ==
/// State that must only ever change as one unit.
#[derive(Debug)]
struct StoreInner {
    /// Key -> handle into `list`
    index: HashMap<String, usize>,
    /// Entries ordered from most to least recently used
    list: RecencyList,
    /// Hit, miss and eviction counters
    counters: Counters,
}

// == LRU Store ==
/// Fixed-capacity, thread-safe key-value store with LRU eviction.
///
/// Both [`LruStore::put`] and [`LruStore::get`] run in O(1) and hold the
/// store's single lock for their whole duration, so concurrent callers
/// observe a linearizable sequence of operations. Share it across threads
/// with an `Arc`.
#[derive(Debug)]
pub struct LruStore {
    capacity: usize,
    inner: Mutex<StoreInner>,
}

impl LruStore {
    // == Constructor ==
    /// Creates an empty store holding at most `capacity` entries.
    ///
    /// Memory is reserved for at most 1024 entries up front, whatever the
    /// capacity; beyond that the index and list grow as keys arrive.
    ///
    /// # Errors
    /// Returns [`CacheError::InvalidCapacity`] if `capacity` is zero or
    /// negative, or does not fit in `usize` on the target platform.
    pub fn new(capacity: i64) -> Result<Self> {
        let capacity = match usize::try_from(capacity) {
            Ok(c) if c > 0 => c,
            _ => return Err(CacheError::InvalidCapacity(capacity)),
        };

        let prealloc = capacity.min(PREALLOC_LIMIT);
        debug!(capacity, prealloc, "creating LRU store");

        Ok(Self {
            capacity,
            inner: Mutex::new(StoreInner {
                index: HashMap::with_capacity(prealloc),
                list: RecencyList::with_capacity(prealloc),
                counters: Counters::default(),
            }),
        })
    }

    // == Put ==
    /// Inserts or updates `key`, marking it most recently used.
    ///
    /// Updating an existing key never evicts. Inserting a new key into a
    /// full store evicts exactly one entry, the least recently used one.
    pub fn put(&self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        let mut inner = self.inner.lock();
        let StoreInner {
            index,
            list,
            counters,
        } = &mut *inner;

        if let Some(&handle) = index.get(&key) {
            list.touch(handle).value = value;
            return;
        }

        let handle = list.push_front(key.clone(), value);
        index.insert(key, handle);

        if list.len() > self.capacity {
            if let Some(evicted) = list.pop_back() {
                index.remove(&evicted.key);
                counters.eviction();
                debug!(key = %evicted.key, "evicted least recently used entry");
            }
        }
    }

    // == Get ==
    /// Returns the value for `key` and marks it most recently used.
    ///
    /// Returns `None` if the key is not present. A stored empty string
    /// comes back as `Some("")`.
    pub fn get(&self, key: &str) -> Option<String> {
        let mut inner = self.inner.lock();
        let StoreInner {
            index,
            list,
            counters,
        } = &mut *inner;

        match index.get(key) {
            Some(&handle) => {
                counters.hit();
                Some(list.touch(handle).value.clone())
            }
            None => {
                counters.miss();
                None
            }
        }
    }

    // == Contains ==
    /// Checks whether `key` is present without touching its recency.
    pub fn contains(&self, key: &str) -> bool {
        self.inner.lock().index.contains_key(key)
    }

    // == Keys ==
    /// Returns a snapshot of all keys, most recently used first.
    pub fn keys(&self) -> Vec<String> {
        let inner = self.inner.lock();
        inner.list.iter().map(|entry| entry.key.clone()).collect()
    }

    // == Stats ==
    /// Returns counters and occupancy captured under one lock acquisition.
    pub fn stats(&self) -> CacheStats {
        let inner = self.inner.lock();
        inner.counters.snapshot(inner.list.len(), self.capacity)
    }

    // == Length ==
    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.inner.lock().list.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // == Capacity ==
    /// Returns the maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Cache for LruStore {
    fn put(&self, key: String, value: String) {
        LruStore::put(self, key, value);
    }

    fn get(&self, key: &str) -> Option<String> {
        LruStore::get(self, key)
    }

    fn len(&self) -> usize {
        LruStore::len(self)
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn stats(&self) -> CacheStats {
        LruStore::stats(self)
    }
}
