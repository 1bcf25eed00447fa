//! Response DTOs for the admin API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::CacheValue;

/// Response body for entry inspection (GET /admin/cache/:strategy/:key)
#[derive(Debug, Clone, Serialize)]
pub struct GetResponse {
    /// The strategy the entry lives under
    pub strategy: String,
    /// The raw (un-namespaced) key
    pub key: String,
    /// The stored value
    pub value: CacheValue,
}

impl GetResponse {
    /// Creates a new GetResponse
    pub fn new(strategy: impl Into<String>, key: impl Into<String>, value: CacheValue) -> Self {
        Self {
            strategy: strategy.into(),
            key: key.into(),
            value,
        }
    }
}

/// Response body for entry deletion (DELETE /admin/cache/:strategy/:key)
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    /// Success message
    pub message: String,
    pub strategy: String,
    pub key: String,
}

impl DeleteResponse {
    /// Creates a new DeleteResponse
    pub fn new(strategy: impl Into<String>, key: impl Into<String>) -> Self {
        let strategy = strategy.into();
        let key = key.into();
        Self {
            message: format!("Key '{}' deleted from strategy '{}'", key, strategy),
            strategy,
            key,
        }
    }
}

/// Response body for the clear operation (POST /admin/cache/clear)
#[derive(Debug, Clone, Serialize)]
pub struct ClearResponse {
    /// Success message
    pub message: String,
}

impl ClearResponse {
    /// Creates a new ClearResponse
    pub fn new() -> Self {
        Self {
            message: "Cache cleared".to_string(),
        }
    }
}

impl Default for ClearResponse {
    fn default() -> Self {
        Self::new()
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_response_serialize() {
        let resp = GetResponse::new("boards", "b1", CacheValue::from("payload"));
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["strategy"], "boards");
        assert_eq!(json["key"], "b1");
        // Untagged value serializes as the bare payload
        assert_eq!(json["value"], "payload");
    }

    #[test]
    fn test_delete_response_serialize() {
        let resp = DeleteResponse::new("sessions", "s1");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("s1"));
        assert!(json.contains("deleted"));
    }

    #[test]
    fn test_clear_response_serialize() {
        let resp = ClearResponse::new();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("cleared"));
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }
}
