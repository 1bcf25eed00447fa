//! API Routes
//!
//! Configures the Axum router for the admin surface.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    clear_handler, delete_entry_handler, get_entry_handler, health_handler, stats_handler,
};
use crate::handle::CacheHandle;

/// Creates the admin router.
///
/// # Endpoints
/// - `GET /admin/cache/stats` - Aggregate statistics snapshot
/// - `POST /admin/cache/clear` - Drop all cached entries
/// - `GET /admin/cache/:strategy/:key` - Inspect a cached entry
/// - `DELETE /admin/cache/:strategy/:key` - Remove a cached entry
/// - `GET /health` - Health check endpoint
///
/// Authentication and authorization are enforced upstream by the host
/// application; the cache performs no access control of its own.
///
/// # Middleware
/// - CORS: Allows any origin (restricted by the host in production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(cache: CacheHandle) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/admin/cache/stats", get(stats_handler))
        .route("/admin/cache/clear", post(clear_handler))
        .route(
            "/admin/cache/:strategy/:key",
            get(get_entry_handler).delete(delete_entry_handler),
        )
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(cache)
}
