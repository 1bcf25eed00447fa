//! API Handlers
//!
//! HTTP request handlers for the admin endpoints. These are a thin layer
//! over the CacheHandle facade; authorization happens upstream in the host
//! application.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::cache::ManagerStats;
use crate::error::{CacheError, Result};
use crate::handle::CacheHandle;
use crate::models::{ClearResponse, DeleteResponse, GetResponse, HealthResponse};

/// Handler for GET /admin/cache/:strategy/:key
///
/// Inspects a cached entry. Absent entries (missing, expired, or under a
/// disabled strategy) map to 404.
pub async fn get_entry_handler(
    State(cache): State<CacheHandle>,
    Path((strategy, key)): Path<(String, String)>,
) -> Result<Json<GetResponse>> {
    match cache.get(&strategy, &key).await {
        Some(value) => Ok(Json(GetResponse::new(strategy, key, value))),
        None => Err(CacheError::NotFound(format!("{strategy}:{key}"))),
    }
}

/// Handler for DELETE /admin/cache/:strategy/:key
///
/// Removes a cached entry; 404 if nothing was removed.
pub async fn delete_entry_handler(
    State(cache): State<CacheHandle>,
    Path((strategy, key)): Path<(String, String)>,
) -> Result<Json<DeleteResponse>> {
    if cache.delete(&strategy, &key).await {
        Ok(Json(DeleteResponse::new(strategy, key)))
    } else {
        Err(CacheError::NotFound(format!("{strategy}:{key}")))
    }
}

/// Handler for GET /admin/cache/stats
///
/// Returns the aggregate snapshot with per-strategy breakdown, verbatim.
pub async fn stats_handler(State(cache): State<CacheHandle>) -> Json<ManagerStats> {
    Json(cache.stats().await)
}

/// Handler for POST /admin/cache/clear
///
/// Drops all entries across all strategies; 503 when the cache is disabled.
pub async fn clear_handler(State(cache): State<CacheHandle>) -> Result<Json<ClearResponse>> {
    if !cache.is_enabled().await {
        return Err(CacheError::Disabled);
    }
    cache.clear().await;
    Ok(Json(ClearResponse::new()))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
