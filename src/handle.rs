//! Cache Handle Module
//!
//! The process-wide shared cache: one CacheManager behind a lock, plus the
//! expiry sweep task's handle. Constructed once at startup and passed by
//! injection to every consumer; cloning shares the same underlying cache.

use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;

use crate::cache::{CacheManager, CacheValue, ManagerStats};
use crate::config::CacheConfig;
use crate::tasks::spawn_sweep_task;

// == Cache Handle ==
/// Cloneable handle to the shared cache.
///
/// All operations serialize on one `RwLock`; `get`/`set`/`delete`/`clear`
/// take the write lock (recency promotion and counters mutate even on
/// reads), `stats`/`is_enabled` take the read lock.
#[derive(Clone)]
pub struct CacheHandle {
    /// Shared manager state
    manager: Arc<RwLock<CacheManager>>,
    /// Sweep task handle; taken and aborted on destroy
    sweeper: Arc<Mutex<Option<JoinHandle<()>>>>,
}

impl CacheHandle {
    // == Constructor ==
    /// Wraps an existing manager without spawning a sweep task.
    pub fn new(manager: CacheManager) -> Self {
        Self {
            manager: Arc::new(RwLock::new(manager)),
            sweeper: Arc::new(Mutex::new(None)),
        }
    }

    // == Initialize ==
    /// Builds the shared cache from configuration.
    ///
    /// Spawns the periodic expiry sweep when the cache is enabled. Must be
    /// called from within a tokio runtime.
    pub fn initialize(config: &CacheConfig) -> Self {
        let manager = CacheManager::from_config(config);
        let enabled = manager.is_enabled();
        let manager = Arc::new(RwLock::new(manager));

        let sweeper = enabled.then(|| spawn_sweep_task(manager.clone(), config.cleanup_interval));

        Self {
            manager,
            sweeper: Arc::new(Mutex::new(sweeper)),
        }
    }

    // == Get ==
    /// Retrieves a value from a strategy's namespace.
    pub async fn get(&self, strategy: &str, key: &str) -> Option<CacheValue> {
        self.manager.write().await.get(strategy, key)
    }

    // == Set ==
    /// Stores a value in a strategy's namespace with optional TTL.
    pub async fn set(&self, strategy: &str, key: &str, value: CacheValue, ttl: Option<u64>) -> bool {
        self.manager.write().await.set(strategy, key, value, ttl)
    }

    // == Delete ==
    /// Removes a key from a strategy's namespace.
    pub async fn delete(&self, strategy: &str, key: &str) -> bool {
        self.manager.write().await.delete(strategy, key)
    }

    // == Clear ==
    /// Drops all entries across all strategies.
    pub async fn clear(&self) {
        self.manager.write().await.clear();
    }

    // == Stats ==
    /// Returns the aggregate statistics snapshot.
    pub async fn stats(&self) -> ManagerStats {
        self.manager.read().await.stats()
    }

    // == Is Enabled ==
    pub async fn is_enabled(&self) -> bool {
        self.manager.read().await.is_enabled()
    }

    // == Destroy ==
    /// Stops the sweep task and tears down the manager.
    ///
    /// Every clone of this handle observes the destroyed state; operations
    /// become no-ops afterwards.
    pub async fn destroy(&self) {
        if let Some(handle) = self.sweeper.lock().await.take() {
            handle.abort();
        }
        self.manager.write().await.destroy();
    }
}
