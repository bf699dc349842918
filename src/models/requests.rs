//! Request DTOs for the cache HTTP API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;
use serde_json::Value;

/// Maximum allowed collection name length in bytes
pub const MAX_COLLECTION_LENGTH: usize = 256;

/// Request body for storing a value (PUT /collections/:collection)
///
/// # Fields
/// - `key`: Any JSON value; a missing key is the `null` key
/// - `value`: The JSON value to store
/// - `ttl`: Optional TTL in seconds (uses the server default if not specified)
#[derive(Debug, Clone, Deserialize)]
pub struct SetRequest {
    /// The cache key
    #[serde(default)]
    pub key: Value,
    /// The value to store
    pub value: Value,
    /// Optional TTL in seconds
    #[serde(default)]
    pub ttl: Option<u64>,
}

/// Request body addressing a single key (lookup and clear)
#[derive(Debug, Clone, Deserialize)]
pub struct KeyRequest {
    #[serde(default)]
    pub key: Value,
}

/// Request body for prefix invalidation
#[derive(Debug, Clone, Deserialize)]
pub struct PrefixRequest {
    pub prefix: String,
}

/// Validates a collection name taken from the request path.
///
/// Returns an error message if validation fails, None if valid.
pub fn validate_collection(collection: &str) -> Option<String> {
    if collection.trim().is_empty() {
        return Some("Collection cannot be empty".to_string());
    }
    if collection.len() > MAX_COLLECTION_LENGTH {
        return Some(format!(
            "Collection exceeds maximum length of {} bytes",
            MAX_COLLECTION_LENGTH
        ));
    }
    None
}
