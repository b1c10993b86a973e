//! LRU Store - A fixed-capacity, thread-safe key-value cache
//!
//! Provides O(1) insert/update and lookup with least-recently-used eviction,
//! plus a small HTTP service embedding one store.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;

pub use api::AppState;
pub use cache::{new_cache, Cache, LruStore};
pub use config::Config;
pub use error::{CacheError, Result};
