//! Response DTOs for the cache HTTP API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;
use serde_json::Value;

/// Response body for a lookup (POST /collections/:collection/get)
#[derive(Debug, Clone, Serialize)]
pub struct GetResponse {
    /// The collection searched
    pub collection: String,
    /// The requested key
    pub key: Value,
    /// The stored value
    pub value: Value,
}

impl GetResponse {
    /// Creates a new GetResponse
    pub fn new(collection: impl Into<String>, key: Value, value: Value) -> Self {
        Self {
            collection: collection.into(),
            key,
            value,
        }
    }
}

/// Response body for a store (PUT /collections/:collection)
#[derive(Debug, Clone, Serialize)]
pub struct SetResponse {
    /// Success message
    pub message: String,
    /// The collection written to
    pub collection: String,
    /// The key that was set
    pub key: Value,
    /// TTL applied, in seconds
    pub ttl: u64,
}

impl SetResponse {
    /// Creates a new SetResponse
    pub fn new(collection: impl Into<String>, key: Value, ttl: u64) -> Self {
        let collection = collection.into();
        Self {
            message: format!("Key {} set in '{}'", key, collection),
            collection,
            key,
            ttl,
        }
    }
}

/// Response body for an exact clear (POST /collections/:collection/clear)
#[derive(Debug, Clone, Serialize)]
pub struct ClearResponse {
    pub message: String,
    pub collection: String,
    pub key: Value,
}

impl ClearResponse {
    /// Creates a new ClearResponse
    pub fn new(collection: impl Into<String>, key: Value) -> Self {
        let collection = collection.into();
        Self {
            message: format!("Key {} cleared from '{}'", key, collection),
            collection,
            key,
        }
    }
}

/// Response body for a prefix clear (POST /collections/:collection/clear-prefix)
#[derive(Debug, Clone, Serialize)]
pub struct ClearPrefixResponse {
    pub message: String,
    pub collection: String,
    pub prefix: String,
}

impl ClearPrefixResponse {
    /// Creates a new ClearPrefixResponse
    pub fn new(collection: impl Into<String>, prefix: impl Into<String>) -> Self {
        let collection = collection.into();
        let prefix = prefix.into();
        Self {
            message: format!("Keys with prefix '{}' cleared from '{}'", prefix, collection),
            collection,
            prefix,
        }
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

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
