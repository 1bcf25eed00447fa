//! Expiry Sweep Task
//!
//! Background task that periodically removes expired cache entries, so
//! memory is reclaimed even for entries that are never read again.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::CacheManager;

/// Spawns the periodic expiry sweep.
///
/// The task sleeps for the configured interval, takes the write lock, and
/// runs one sweep pass. Removal work per pass is bounded by the store's
/// sweep batch limit; leftovers are collected on the next pass. The
/// returned JoinHandle is aborted during shutdown.
///
/// # Arguments
/// * `manager` - Shared reference to the cache manager
/// * `interval_secs` - Seconds between sweep passes
pub fn spawn_sweep_task(manager: Arc<RwLock<CacheManager>>, interval_secs: u64) -> JoinHandle<()> {
    let interval = Duration::from_secs(interval_secs);

    tokio::spawn(async move {
        info!("starting expiry sweep task with interval of {}s", interval_secs);

        loop {
            tokio::time::sleep(interval).await;

            let removed = {
                let mut manager_guard = manager.write().await;
                manager_guard.sweep_expired()
            };

            if removed > 0 {
                info!("expiry sweep removed {} entries", removed);
            } else {
                debug!("expiry sweep found no expired entries");
            }
        }
    })
}
