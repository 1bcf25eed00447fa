//! Bingo Cache - In-process cache engine with an admin HTTP surface
//!
//! Standalone entry point: builds the shared cache from environment
//! configuration and serves the admin endpoints.

use std::net::SocketAddr;

use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bingo_cache::{api::create_router, CacheConfig, CacheHandle};

/// Main entry point.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Initialize the shared cache and its expiry sweep task
/// 4. Create the Axum router with the admin endpoints
/// 5. Serve on the configured port
/// 6. On SIGINT/SIGTERM, stop serving and destroy the cache
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bingo_cache=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting bingo cache service");

    // Load configuration from environment variables
    let config = CacheConfig::from_env();
    info!(
        "Configuration loaded: enabled={}, max_size_mb={}, default_ttl={}s, cleanup_interval={}s, port={}",
        config.enabled, config.max_size_mb, config.default_ttl, config.cleanup_interval, config.server_port
    );

    // Build the shared cache; spawns the sweep task when enabled
    let cache = CacheHandle::initialize(&config);
    info!("Cache initialized");

    // Create router with the admin endpoints
    let app = create_router(cache.clone());

    // Bind to configured port
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server listening on http://{}", addr);

    // Start server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Stop the sweep task and tear the cache down
    cache.destroy().await;
    info!("Server shutdown complete");

    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }
}
