//! Response DTOs for the cache server API
//!
//! Defines the structure of outgoing JSON response bodies.

use serde::Serialize;

/// Response body for a successful insert (POST /cache/:key)
#[derive(Debug, Clone, Serialize)]
pub struct InsertResponse {
    /// Success message
    pub message: String,
    /// The key that was stored
    pub key: String,
    /// TTL applied to the entry in minutes, None if it never expires
    pub ttl_minutes: Option<i64>,
}

impl InsertResponse {
    /// Creates a new InsertResponse
    pub fn new(key: impl Into<String>, ttl_minutes: i64) -> Self {
        let key = key.into();
        Self {
            message: format!("Key '{}' stored successfully", key),
            key,
            ttl_minutes: (ttl_minutes > 0).then_some(ttl_minutes),
        }
    }
}

/// Response body for the heartbeat endpoint (GET /status)
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
