//! Expiry Cache - an in-process key-value cache with per-entry TTL
//!
//! Expired entries are hidden from reads immediately and reclaimed by a
//! background sweeper. A small HTTP front end exposes get and insert.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use cache::{CacheHandler, Expiration, ExpiringCache};
pub use config::Config;
pub use error::CacheError;
