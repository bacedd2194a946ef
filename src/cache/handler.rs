//! Cache Handler Trait
//!
//! The minimal capability the HTTP layer needs from a cache backend.

use async_trait::async_trait;

use crate::cache::{Expiration, ExpiringCache};
use crate::error::Result;

/// Operations any cache backend must provide to sit behind the HTTP layer.
#[async_trait]
pub trait CacheHandler: Send + Sync + 'static {
    /// Returns the live value for `key`, or `CacheError::KeyNotFound`.
    async fn get(&self, key: &str) -> Result<String>;

    /// Stores `value` under `key`, replacing any previous value.
    async fn insert(&self, key: String, value: String, expiration: Expiration);

    /// Returns true if `key` holds a live value.
    async fn key_exists(&self, key: &str) -> bool;
}

#[async_trait]
impl CacheHandler for ExpiringCache {
    async fn get(&self, key: &str) -> Result<String> {
        ExpiringCache::get(self, key).await
    }

    async fn insert(&self, key: String, value: String, expiration: Expiration) {
        ExpiringCache::insert(self, key, value, expiration).await
    }

    async fn key_exists(&self, key: &str) -> bool {
        ExpiringCache::key_exists(self, key).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CacheError;
    use std::sync::Arc;
    use std::time::Duration;

    #[tokio::test]
    async fn test_usable_as_trait_object() {
        let handler: Arc<dyn CacheHandler> = Arc::new(ExpiringCache::new(Duration::ZERO));

        handler
            .insert("key".to_string(), "value".to_string(), Expiration::from_minutes(30))
            .await;

        assert!(handler.key_exists("key").await);
        assert_eq!(handler.get("key").await.unwrap(), "value");
        assert_eq!(
            handler.get("other").await,
            Err(CacheError::KeyNotFound("other".to_string()))
        );
    }
}
