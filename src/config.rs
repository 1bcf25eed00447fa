//! Configuration Module
//!
//! Cache tuning parameters, deserializable from the host application's
//! configuration with environment-variable overrides for standalone runs.

use std::collections::HashMap;
use std::env;

use serde::Deserialize;

/// Cache engine configuration.
///
/// The host's config loader can deserialize this directly; any field left
/// out takes its default. `from_env` covers the scalar knobs when running
/// the admin binary on its own.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Globally disables the cache when false; all operations become no-ops
    pub enabled: bool,
    /// Byte-budget ceiling in megabytes
    pub max_size_mb: usize,
    /// Fallback TTL in seconds for strategies without their own
    pub default_ttl: u64,
    /// Expiry sweep cadence in seconds
    pub cleanup_interval: u64,
    /// Admin HTTP server port
    pub server_port: u16,
    /// Strategy table: name -> settings
    pub strategies: HashMap<String, StrategySettings>,
}

/// Per-strategy settings as they appear in configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct StrategySettings {
    /// Enabled unless explicitly turned off
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Default TTL in seconds; None inherits the global default_ttl
    #[serde(default)]
    pub ttl: Option<u64>,
}

fn default_true() -> bool {
    true
}

impl CacheConfig {
    /// Creates a new CacheConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_ENABLED` - Globally enable/disable the cache (default: true)
    /// - `CACHE_MAX_SIZE_MB` - Byte budget in megabytes (default: 100)
    /// - `CACHE_DEFAULT_TTL` - Fallback TTL in seconds (default: 300)
    /// - `CACHE_CLEANUP_INTERVAL` - Sweep cadence in seconds (default: 60)
    /// - `SERVER_PORT` - Admin HTTP server port (default: 3000)
    ///
    /// Unparseable values fall back to defaults rather than aborting startup.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            enabled: env::var("CACHE_ENABLED")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enabled),
            max_size_mb: env::var("CACHE_MAX_SIZE_MB")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_size_mb),
            default_ttl: env::var("CACHE_DEFAULT_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.default_ttl),
            cleanup_interval: env::var("CACHE_CLEANUP_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.cleanup_interval),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),
            strategies: defaults.strategies,
        }
    }

    /// Byte-budget ceiling converted from megabytes.
    pub fn max_bytes(&self) -> usize {
        self.max_size_mb * 1024 * 1024
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_size_mb: 100,
            default_ttl: 300,
            cleanup_interval: 60,
            server_port: 3000,
            strategies: default_strategies(),
        }
    }
}

/// The four standard partitions the board server caches into.
fn default_strategies() -> HashMap<String, StrategySettings> {
    let mut strategies = HashMap::new();
    strategies.insert(
        "database".to_string(),
        StrategySettings {
            enabled: true,
            ttl: Some(60),
        },
    );
    strategies.insert(
        "sessions".to_string(),
        StrategySettings {
            enabled: true,
            ttl: Some(1800),
        },
    );
    strategies.insert(
        "boards".to_string(),
        StrategySettings {
            enabled: true,
            ttl: Some(30),
        },
    );
    strategies.insert(
        "static".to_string(),
        StrategySettings {
            enabled: true,
            ttl: Some(3600),
        },
    );
    strategies
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = CacheConfig::default();
        assert!(config.enabled);
        assert_eq!(config.max_size_mb, 100);
        assert_eq!(config.default_ttl, 300);
        assert_eq!(config.cleanup_interval, 60);
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.strategies.len(), 4);
        assert_eq!(config.strategies["boards"].ttl, Some(30));
    }

    #[test]
    fn test_config_max_bytes() {
        let mut config = CacheConfig::default();
        config.max_size_mb = 2;
        assert_eq!(config.max_bytes(), 2 * 1024 * 1024);
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("CACHE_ENABLED");
        env::remove_var("CACHE_MAX_SIZE_MB");
        env::remove_var("CACHE_DEFAULT_TTL");
        env::remove_var("CACHE_CLEANUP_INTERVAL");
        env::remove_var("SERVER_PORT");

        let config = CacheConfig::from_env();
        assert!(config.enabled);
        assert_eq!(config.max_size_mb, 100);
        assert_eq!(config.default_ttl, 300);
        assert_eq!(config.cleanup_interval, 60);
        assert_eq!(config.server_port, 3000);
    }

    #[test]
    fn test_config_deserialize() {
        let json = r#"{
            "max_size_mb": 10,
            "cleanup_interval": 5,
            "strategies": {
                "boards": {"ttl": 15},
                "reports": {"enabled": false}
            }
        }"#;

        let config: CacheConfig = serde_json::from_str(json).unwrap();
        assert!(config.enabled);
        assert_eq!(config.max_size_mb, 10);
        assert_eq!(config.cleanup_interval, 5);
        // default_ttl untouched by the partial document
        assert_eq!(config.default_ttl, 300);
        assert_eq!(config.strategies["boards"].ttl, Some(15));
        assert!(config.strategies["boards"].enabled);
        assert!(!config.strategies["reports"].enabled);
        assert_eq!(config.strategies["reports"].ttl, None);
    }
}
