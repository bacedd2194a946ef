//! Cache Module
//!
//! Provides an in-memory cache with per-entry expiration and background sweeping.

mod entry;
mod expiring;
mod handler;
mod store;


// Re-export public types
pub use entry::{CacheEntry, Expiration};
pub use expiring::ExpiringCache;
pub use handler::CacheHandler;
pub use store::CacheStore;
