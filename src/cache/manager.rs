//! Cache Manager Module
//!
//! Partitions one CacheStore into named strategies, each with its own
//! default TTL and enabled flag, by namespacing keys as `strategy:key`.

use std::collections::HashMap;

use serde::Serialize;

use crate::cache::{CacheStats, CacheStore, CacheValue};
use crate::config::CacheConfig;

// == Strategy Config ==
/// Resolved configuration for one cache strategy.
#[derive(Debug, Clone)]
pub struct StrategyConfig {
    /// TTL applied to entries stored without an explicit TTL
    pub default_ttl: u64,
    /// Disabled strategies turn every operation into a no-op
    pub enabled: bool,
}

// == Cache Manager ==
/// Strategy-partitioned view over one shared CacheStore.
///
/// Built once from configuration. If the cache is globally disabled or no
/// strategy is enabled, no store is constructed and every operation is a
/// no-op. `destroy()` drops the store and strategy table for good; a new
/// manager must be built to reconfigure.
#[derive(Debug)]
pub struct CacheManager {
    /// Shared store; None when disabled or destroyed
    store: Option<CacheStore>,
    /// Strategy table, fixed at configuration time
    strategies: HashMap<String, StrategyConfig>,
}

impl CacheManager {
    // == Constructor ==
    /// Builds a manager from configuration.
    ///
    /// Per-strategy TTLs fall back to the global `default_ttl`. The store
    /// is constructed only if the cache is enabled globally and at least
    /// one strategy is enabled.
    pub fn from_config(config: &CacheConfig) -> Self {
        let strategies: HashMap<String, StrategyConfig> = config
            .strategies
            .iter()
            .map(|(name, settings)| {
                (
                    name.clone(),
                    StrategyConfig {
                        default_ttl: settings.ttl.unwrap_or(config.default_ttl),
                        enabled: settings.enabled,
                    },
                )
            })
            .collect();

        let any_enabled = config.enabled && strategies.values().any(|s| s.enabled);
        let store = any_enabled.then(|| CacheStore::new(config.max_bytes()));

        Self { store, strategies }
    }

    // == Is Enabled ==
    /// Returns true if the manager holds a live store.
    pub fn is_enabled(&self) -> bool {
        self.store.is_some()
    }

    // == Get ==
    /// Retrieves a value from a strategy's namespace.
    ///
    /// An unknown or disabled strategy, or a disabled manager, returns
    /// absent without touching the store.
    pub fn get(&mut self, strategy: &str, key: &str) -> Option<CacheValue> {
        let namespaced = self.namespaced(strategy, key)?;
        self.store.as_mut()?.get(&namespaced)
    }

    // == Set ==
    /// Stores a value in a strategy's namespace with optional TTL.
    ///
    /// The effective TTL is the explicit one if given, else the strategy's
    /// default. Returns false when the value was not stored (disabled
    /// strategy or manager, or the store declined the insert).
    pub fn set(&mut self, strategy: &str, key: &str, value: CacheValue, ttl: Option<u64>) -> bool {
        let Some(config) = self.strategies.get(strategy) else {
            return false;
        };
        if !config.enabled {
            return false;
        }
        let effective_ttl = ttl.unwrap_or(config.default_ttl);
        let namespaced = format!("{strategy}:{key}");

        match self.store.as_mut() {
            Some(store) => store.set(namespaced, value, Some(effective_ttl)),
            None => false,
        }
    }

    // == Delete ==
    /// Removes a key from a strategy's namespace.
    ///
    /// Returns false if nothing was removed.
    pub fn delete(&mut self, strategy: &str, key: &str) -> bool {
        let Some(namespaced) = self.namespaced(strategy, key) else {
            return false;
        };
        match self.store.as_mut() {
            Some(store) => store.delete(&namespaced),
            None => false,
        }
    }

    // == Clear ==
    /// Drops all entries across all strategies. No-op when disabled.
    pub fn clear(&mut self) {
        if let Some(store) = self.store.as_mut() {
            store.clear();
        }
    }

    // == Sweep Expired ==
    /// Runs one expiry sweep pass on the underlying store.
    pub fn sweep_expired(&mut self) -> usize {
        self.store.as_mut().map_or(0, |store| store.sweep_expired())
    }

    // == Stats ==
    /// Returns the aggregate snapshot plus a per-strategy breakdown.
    pub fn stats(&self) -> ManagerStats {
        let store_stats = self.store.as_ref().map(|s| s.stats());
        let hit_rate = store_stats.as_ref().map_or(0.0, |s| s.hit_rate());

        let mut strategies: Vec<StrategyStats> = self
            .strategies
            .iter()
            .map(|(name, config)| StrategyStats {
                name: name.clone(),
                enabled: config.enabled,
                default_ttl: config.default_ttl,
                live_keys: self
                    .store
                    .as_ref()
                    .map_or(0, |s| s.count_prefix(&format!("{name}:"))),
            })
            .collect();
        strategies.sort_by(|a, b| a.name.cmp(&b.name));

        ManagerStats {
            enabled: self.is_enabled(),
            hit_rate,
            store: store_stats,
            strategies,
        }
    }

    // == Destroy ==
    /// Tears down the store and strategy table.
    ///
    /// The manager behaves as disabled afterwards; there is no way back.
    pub fn destroy(&mut self) {
        self.store = None;
        self.strategies.clear();
    }

    /// Resolves a strategy-qualified key, or None for unknown/disabled
    /// strategies.
    fn namespaced(&self, strategy: &str, key: &str) -> Option<String> {
        let config = self.strategies.get(strategy)?;
        config.enabled.then(|| format!("{strategy}:{key}"))
    }
}

// == Manager Stats ==
/// Aggregate statistics snapshot with per-strategy breakdown.
#[derive(Debug, Clone, Serialize)]
pub struct ManagerStats {
    /// Whether the manager holds a live store
    pub enabled: bool,
    /// hits / (hits + misses), 0.0 with no accesses
    pub hit_rate: f64,
    /// Store snapshot; None when disabled
    pub store: Option<CacheStats>,
    /// Per-strategy breakdown, sorted by name
    pub strategies: Vec<StrategyStats>,
}

// == Strategy Stats ==
/// Reporting view of one strategy.
#[derive(Debug, Clone, Serialize)]
pub struct StrategyStats {
    pub name: String,
    pub enabled: bool,
    pub default_ttl: u64,
    /// Live keys under this strategy's namespace prefix
    pub live_keys: usize,
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StrategySettings;

    fn test_config() -> CacheConfig {
        let mut config = CacheConfig::default();
        config.max_size_mb = 1;
        config.default_ttl = 300;
        config
    }

    #[test]
    fn test_manager_from_config() {
        let manager = CacheManager::from_config(&test_config());
        assert!(manager.is_enabled());
    }

    #[test]
    fn test_manager_globally_disabled() {
        let mut config = test_config();
        config.enabled = false;

        let mut manager = CacheManager::from_config(&config);
        assert!(!manager.is_enabled());
        assert!(!manager.set("boards", "b1", CacheValue::from("payload"), None));
        assert!(manager.get("boards", "b1").is_none());
    }

    #[test]
    fn test_manager_disabled_when_no_strategy_enabled() {
        let mut config = test_config();
        for settings in config.strategies.values_mut() {
            settings.enabled = false;
        }

        let manager = CacheManager::from_config(&config);
        assert!(!manager.is_enabled());
    }

    #[test]
    fn test_manager_set_and_get() {
        let mut manager = CacheManager::from_config(&test_config());

        assert!(manager.set("boards", "b1", CacheValue::from("payload"), None));
        assert_eq!(
            manager.get("boards", "b1"),
            Some(CacheValue::from("payload"))
        );
    }

    #[test]
    fn test_manager_strategy_isolation() {
        let mut manager = CacheManager::from_config(&test_config());

        manager.set("boards", "k", CacheValue::from("board_value"), None);
        manager.set("sessions", "k", CacheValue::from("session_value"), None);

        assert_eq!(
            manager.get("boards", "k"),
            Some(CacheValue::from("board_value"))
        );
        assert_eq!(
            manager.get("sessions", "k"),
            Some(CacheValue::from("session_value"))
        );

        // Deleting under one strategy leaves the other untouched
        assert!(manager.delete("boards", "k"));
        assert!(manager.get("boards", "k").is_none());
        assert!(manager.get("sessions", "k").is_some());
    }

    #[test]
    fn test_manager_unknown_strategy_is_noop() {
        let mut manager = CacheManager::from_config(&test_config());

        assert!(!manager.set("unknown", "k", CacheValue::from("v"), None));
        assert!(manager.get("unknown", "k").is_none());
        assert!(!manager.delete("unknown", "k"));

        // No counters moved: the store was never consulted
        let stats = manager.stats();
        let store = stats.store.unwrap();
        assert_eq!(store.hits + store.misses, 0);
        assert_eq!(store.current_bytes, 0);
    }

    #[test]
    fn test_manager_disabled_strategy_is_noop() {
        let mut config = test_config();
        config.strategies.get_mut("static").unwrap().enabled = false;

        let mut manager = CacheManager::from_config(&config);

        assert!(!manager.set("static", "logo", CacheValue::from("png"), None));
        assert!(manager.get("static", "logo").is_none());

        let stats = manager.stats();
        let store = stats.store.unwrap();
        assert_eq!(store.hits + store.misses, 0);
        assert_eq!(store.current_bytes, 0);
    }

    #[test]
    fn test_manager_strategy_default_ttl_resolution() {
        let mut config = test_config();
        config.default_ttl = 120;
        config.strategies.insert(
            "feed".to_string(),
            StrategySettings {
                enabled: true,
                ttl: None,
            },
        );

        let manager = CacheManager::from_config(&config);
        let stats = manager.stats();
        let feed = stats.strategies.iter().find(|s| s.name == "feed").unwrap();
        assert_eq!(feed.default_ttl, 120);

        // A strategy with its own TTL keeps it
        let boards = stats
            .strategies
            .iter()
            .find(|s| s.name == "boards")
            .unwrap();
        assert_eq!(boards.default_ttl, 30);
    }

    #[test]
    fn test_manager_stats_breakdown() {
        let mut manager = CacheManager::from_config(&test_config());

        manager.set("boards", "b1", CacheValue::from("v1"), None);
        manager.set("boards", "b2", CacheValue::from("v2"), None);
        manager.set("sessions", "s1", CacheValue::from("v3"), None);
        manager.get("boards", "b1");
        manager.get("boards", "missing");

        let stats = manager.stats();
        assert!(stats.enabled);
        assert_eq!(stats.hit_rate, 0.5);

        let boards = stats
            .strategies
            .iter()
            .find(|s| s.name == "boards")
            .unwrap();
        assert_eq!(boards.live_keys, 2);
        let sessions = stats
            .strategies
            .iter()
            .find(|s| s.name == "sessions")
            .unwrap();
        assert_eq!(sessions.live_keys, 1);
    }

    #[test]
    fn test_manager_clear() {
        let mut manager = CacheManager::from_config(&test_config());

        manager.set("boards", "b1", CacheValue::from("v1"), None);
        manager.clear();

        assert!(manager.get("boards", "b1").is_none());
        let stats = manager.stats();
        // Counters survive clear; the miss above is visible
        assert_eq!(stats.store.unwrap().misses, 1);
    }

    #[test]
    fn test_manager_destroy() {
        let mut manager = CacheManager::from_config(&test_config());

        manager.set("boards", "b1", CacheValue::from("v1"), None);
        manager.destroy();

        assert!(!manager.is_enabled());
        assert!(manager.get("boards", "b1").is_none());
        assert!(!manager.set("boards", "b1", CacheValue::from("v1"), None));

        let stats = manager.stats();
        assert!(!stats.enabled);
        assert!(stats.store.is_none());
        assert!(stats.strategies.is_empty());
    }
}
