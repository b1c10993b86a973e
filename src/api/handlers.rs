//! API Handlers
//!
//! HTTP request handlers for each endpoint of the LRU store service.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::debug;

use crate::cache::{new_cache, Cache};
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::models::{GetResponse, HealthResponse, PutRequest, PutResponse, StatsResponse};

/// Application state shared across all handlers.
///
/// The cache synchronizes internally, so handlers share it through a plain `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe LRU cache
    pub cache: Arc<dyn Cache>,
}

impl AppState {
    /// Creates a new AppState around an existing cache.
    pub fn new(cache: Arc<dyn Cache>) -> Self {
        Self { cache }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Fails if the configured capacity is not a positive integer.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(new_cache(config.capacity)?))
    }
}

/// Handler for PUT /put
///
/// Inserts or updates a key-value pair.
pub async fn put_handler(
    State(state): State<AppState>,
    Json(req): Json<PutRequest>,
) -> Result<Json<PutResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    state.cache.put(req.key.clone(), req.value);
    debug!(key = %req.key, "stored key");

    Ok(Json(PutResponse::new(req.key)))
}

/// Handler for GET /get/:key
///
/// Retrieves a value by key, marking the key as recently used.
pub async fn get_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<GetResponse>> {
    match state.cache.get(&key) {
        Some(value) => Ok(Json(GetResponse::new(key, value))),
        None => Err(CacheError::NotFound(key)),
    }
}

/// Handler for GET /stats
///
/// Returns current cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse::new(&state.cache.stats()))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
