//! API Module
//!
//! HTTP handlers and routing for the admin surface.
//!
//! # Endpoints
//! - `GET /admin/cache/stats` - Aggregate statistics snapshot
//! - `POST /admin/cache/clear` - Drop all cached entries
//! - `GET /admin/cache/:strategy/:key` - Inspect a cached entry
//! - `DELETE /admin/cache/:strategy/:key` - Remove a cached entry
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
