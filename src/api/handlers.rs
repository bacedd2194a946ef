//! API Handlers
//!
//! HTTP request handlers that forward to a [`CacheHandler`] backend.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::debug;

use crate::cache::{CacheHandler, Expiration, ExpiringCache};
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::models::{HealthResponse, InsertResponse};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Cache backend
    pub cache: Arc<dyn CacheHandler>,
    /// TTL in minutes applied to inserted values
    pub default_ttl_minutes: i64,
    /// Largest accepted value in bytes
    pub max_value_size: usize,
}

impl AppState {
    /// Creates a new AppState around any cache backend.
    pub fn new(cache: Arc<dyn CacheHandler>, default_ttl_minutes: i64, max_value_size: usize) -> Self {
        Self {
            cache,
            default_ttl_minutes,
            max_value_size,
        }
    }

    /// Creates a new AppState from configuration and an existing cache.
    pub fn from_config(config: &Config, cache: Arc<ExpiringCache>) -> Self {
        Self::new(cache, config.default_ttl_minutes, config.max_value_size)
    }
}

/// Handler for GET /cache/:key
///
/// Returns the stored value as plain text.
pub async fn get_handler(State(state): State<AppState>, Path(key): Path<String>) -> Result<String> {
    let started = Instant::now();
    let result = state.cache.get(&key).await;

    debug!(
        key = %key,
        hit = result.is_ok(),
        elapsed_us = started.elapsed().as_micros() as u64,
        "GET"
    );
    result
}

/// Handler for POST /cache/:key
///
/// Stores the raw request body under `key` with the configured TTL.
pub async fn insert_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
    body: String,
) -> Result<Json<InsertResponse>> {
    if body.len() > state.max_value_size {
        return Err(CacheError::InvalidRequest("Input too long".to_string()));
    }

    let started = Instant::now();
    state
        .cache
        .insert(key.clone(), body, Expiration::from_minutes(state.default_ttl_minutes))
        .await;

    debug!(
        key = %key,
        elapsed_us = started.elapsed().as_micros() as u64,
        "POST"
    );
    Ok(Json(InsertResponse::new(key, state.default_ttl_minutes)))
}

/// Handler for GET /status
pub async fn status_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn test_state() -> AppState {
        let cache = Arc::new(ExpiringCache::new(Duration::ZERO));
        AppState::from_config(&Config::default(), cache)
    }

    #[tokio::test]
    async fn test_insert_and_get_handler() {
        let state = test_state();

        let result = insert_handler(
            State(state.clone()),
            Path("test_key".to_string()),
            "test_value".to_string(),
        )
        .await;
        let response = result.unwrap();
        assert_eq!(response.key, "test_key");
        assert_eq!(response.ttl_minutes, Some(30));

        let value = get_handler(State(state), Path("test_key".to_string()))
            .await
            .unwrap();
        assert_eq!(value, "test_value");
    }

    #[tokio::test]
    async fn test_get_nonexistent_key() {
        let state = test_state();

        let result = get_handler(State(state), Path("nonexistent".to_string())).await;
        assert_eq!(
            result,
            Err(CacheError::KeyNotFound("nonexistent".to_string()))
        );
    }

    #[tokio::test]
    async fn test_insert_rejects_oversized_value() {
        let mut state = test_state();
        state.max_value_size = 8;

        let result = insert_handler(
            State(state.clone()),
            Path("big".to_string()),
            "x".repeat(9),
        )
        .await;
        assert!(matches!(result, Err(CacheError::InvalidRequest(_))));
        assert!(!state.cache.key_exists("big").await);

        let result =
            insert_handler(State(state), Path("fits".to_string()), "x".repeat(8)).await;
        assert!(result.is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn test_inserted_values_expire_after_default_ttl() {
        let cache = Arc::new(ExpiringCache::new(Duration::ZERO));
        let state = AppState::new(cache, 1, 1024);

        insert_handler(State(state.clone()), Path("k".to_string()), "v".to_string())
            .await
            .unwrap();

        tokio::time::advance(Duration::from_secs(61)).await;
        assert!(get_handler(State(state), Path("k".to_string())).await.is_err());
    }

    #[tokio::test]
    async fn test_insert_with_huge_configured_ttl() {
        let cache = Arc::new(ExpiringCache::new(Duration::ZERO));
        let state = AppState::new(cache, i64::MAX, 1024);

        let response = insert_handler(State(state.clone()), Path("k".to_string()), "v".to_string())
            .await
            .unwrap();
        assert_eq!(response.ttl_minutes, Some(i64::MAX));

        let value = get_handler(State(state), Path("k".to_string())).await.unwrap();
        assert_eq!(value, "v");
    }

    #[tokio::test]
    async fn test_status_handler() {
        let response = status_handler().await;
        assert_eq!(response.status, "healthy");
    }
}
