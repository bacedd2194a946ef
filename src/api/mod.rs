//! API Module
//!
//! HTTP handlers and routing for the cache server.
//!
//! # Endpoints
//! - `GET /cache/:key` - Retrieve a value
//! - `POST /cache/:key` - Store a value
//! - `GET /status` - Heartbeat

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
