//! Cache Entry Module
//!
//! Defines cache values with their sizing policy and the entry metadata
//! wrapper with TTL support.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;

use crate::cache::{list::NIL, FALLBACK_VALUE_SIZE};

// == Cache Value ==
/// A value stored in the cache.
///
/// Values are opaque to the engine except for size accounting. Each variant
/// carries its own sizing rule:
/// - `Bool`: 1 byte
/// - `Number`: 8 bytes
/// - `Text`: UTF-16-equivalent byte length (2 bytes per code unit)
/// - `Bytes`: native byte length
/// - `Json`: serialized to JSON text and measured like `Text`; falls back
///   to [`FALLBACK_VALUE_SIZE`] if serialization fails
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CacheValue {
    /// Boolean flag
    Bool(bool),
    /// Numeric value
    Number(f64),
    /// UTF-8 string
    Text(String),
    /// Raw binary blob
    Bytes(Vec<u8>),
    /// Structured JSON document
    Json(serde_json::Value),
}

impl CacheValue {
    // == Size ==
    /// Computes the byte size charged against the cache budget.
    pub fn size_bytes(&self) -> usize {
        match self {
            CacheValue::Bool(_) => 1,
            CacheValue::Number(_) => 8,
            CacheValue::Text(s) => utf16_byte_len(s),
            CacheValue::Bytes(b) => b.len(),
            CacheValue::Json(v) => serde_json::to_string(v)
                .map(|s| utf16_byte_len(&s))
                .unwrap_or(FALLBACK_VALUE_SIZE),
        }
    }
}

/// UTF-16-equivalent byte length: 2 bytes per UTF-16 code unit.
fn utf16_byte_len(s: &str) -> usize {
    s.encode_utf16().count() * 2
}

impl From<&str> for CacheValue {
    fn from(s: &str) -> Self {
        CacheValue::Text(s.to_string())
    }
}

impl From<String> for CacheValue {
    fn from(s: String) -> Self {
        CacheValue::Text(s)
    }
}

impl From<bool> for CacheValue {
    fn from(b: bool) -> Self {
        CacheValue::Bool(b)
    }
}

impl From<f64> for CacheValue {
    fn from(n: f64) -> Self {
        CacheValue::Number(n)
    }
}

impl From<i64> for CacheValue {
    fn from(n: i64) -> Self {
        CacheValue::Number(n as f64)
    }
}

impl From<Vec<u8>> for CacheValue {
    fn from(b: Vec<u8>) -> Self {
        CacheValue::Bytes(b)
    }
}

impl From<serde_json::Value> for CacheValue {
    fn from(v: serde_json::Value) -> Self {
        CacheValue::Json(v)
    }
}

// == Cache Entry ==
/// A single cache entry: the stored value plus its metadata.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored value
    pub value: CacheValue,
    /// Byte size computed at insertion time; immutable for the entry's lifetime
    pub size_bytes: usize,
    /// Creation timestamp (Unix milliseconds)
    pub created_at: u64,
    /// Expiration timestamp (Unix milliseconds), None = never expires by time
    pub expires_at: Option<u64>,
    /// Index of this entry's slot in the recency list
    pub(crate) slot: usize,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry with optional TTL.
    ///
    /// The byte size is computed here and fixed for the entry's lifetime.
    /// The recency slot is assigned by the store when the entry is linked.
    pub fn new(value: CacheValue, ttl_seconds: Option<u64>) -> Self {
        let now = current_timestamp_ms();
        Self {
            size_bytes: value.size_bytes(),
            value,
            created_at: now,
            expires_at: ttl_seconds.map(|ttl| now + ttl * 1000),
            slot: NIL,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// An entry is expired once the current time is greater than or equal to
    /// its expiration time. Entries without a TTL never expire by time.
    pub fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(expires) => current_timestamp_ms() >= expires,
            None => false,
        }
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}
