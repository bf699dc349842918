//! API Handlers
//!
//! HTTP request handlers for each cache endpoint.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;

use crate::cache::Cache;
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::models::requests::validate_collection;
use crate::models::{
    ClearPrefixResponse, ClearResponse, GetResponse, HealthResponse, KeyRequest, PrefixRequest,
    SetRequest, SetResponse,
};

/// Application state shared across all handlers.
///
/// The cache does its own locking, so handlers share it through a plain Arc.
#[derive(Clone)]
pub struct AppState {
    /// Shared cache holding JSON values
    pub cache: Arc<Cache>,
    /// TTL in seconds applied when a request names none
    pub default_ttl: u64,
}

impl AppState {
    /// Creates a new AppState with the given cache.
    pub fn new(cache: Cache, default_ttl: u64) -> Self {
        Self {
            cache: Arc::new(cache),
            default_ttl,
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &Config) -> Self {
        let cache = Cache::new().with_test_mode(config.test_mode());
        Self::new(cache, config.default_ttl)
    }
}

fn checked_collection(collection: &str) -> Result<()> {
    match validate_collection(collection) {
        Some(error_msg) => Err(CacheError::InvalidRequest(error_msg)),
        None => Ok(()),
    }
}

/// Handler for PUT /collections/:collection
///
/// Stores a JSON value under a JSON key with optional TTL.
pub async fn set_handler(
    State(state): State<AppState>,
    Path(collection): Path<String>,
    Json(req): Json<SetRequest>,
) -> Result<Json<SetResponse>> {
    checked_collection(&collection)?;

    let ttl = req.ttl.unwrap_or(state.default_ttl);
    state
        .cache
        .set(&collection, &req.key, req.value, Duration::from_secs(ttl))?;

    Ok(Json(SetResponse::new(collection, req.key, ttl)))
}

/// Handler for POST /collections/:collection/get
///
/// Looks a key up; misses and expired entries are both 404.
pub async fn get_handler(
    State(state): State<AppState>,
    Path(collection): Path<String>,
    Json(req): Json<KeyRequest>,
) -> Result<Json<GetResponse>> {
    checked_collection(&collection)?;

    let value = state
        .cache
        .get::<Value, _>(&collection, &req.key)
        .ok_or_else(|| CacheError::NotFound(format!("{}/{}", collection, req.key)))?;

    Ok(Json(GetResponse::new(collection, req.key, (*value).clone())))
}

/// Handler for POST /collections/:collection/clear
///
/// Removes one key. Clearing a missing key succeeds.
pub async fn clear_handler(
    State(state): State<AppState>,
    Path(collection): Path<String>,
    Json(req): Json<KeyRequest>,
) -> Result<Json<ClearResponse>> {
    checked_collection(&collection)?;

    state.cache.clear(&collection, &req.key)?;

    Ok(Json(ClearResponse::new(collection, req.key)))
}

/// Handler for POST /collections/:collection/clear-prefix
///
/// Removes every string key starting with the given prefix.
pub async fn clear_prefix_handler(
    State(state): State<AppState>,
    Path(collection): Path<String>,
    Json(req): Json<PrefixRequest>,
) -> Result<Json<ClearPrefixResponse>> {
    checked_collection(&collection)?;

    state.cache.clear_prefix(&collection, &req.prefix)?;

    Ok(Json(ClearPrefixResponse::new(collection, req.prefix)))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
