//! Response models for the cache server API
//!
//! Request bodies are raw text, so only responses need DTOs.

pub mod responses;

// Re-export commonly used types
pub use responses::{HealthResponse, InsertResponse};
