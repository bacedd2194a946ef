//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::time::Duration;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Sweeper interval in seconds, 0 disables background sweeping
    pub sweep_interval: u64,
    /// TTL in minutes applied to values stored over HTTP, <= 0 never expires
    pub default_ttl_minutes: i64,
    /// Largest accepted value in bytes. Values must be valid UTF-8;
    /// the request body limit is derived from this.
    pub max_value_size: usize,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `SWEEP_INTERVAL` - Sweep frequency in seconds (default: 60)
    /// - `DEFAULT_TTL_MINUTES` - TTL for stored values (default: 30)
    /// - `MAX_VALUE_SIZE` - Maximum value size in bytes (default: 100000)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: env_or("SERVER_PORT", defaults.server_port),
            sweep_interval: env_or("SWEEP_INTERVAL", defaults.sweep_interval),
            default_ttl_minutes: env_or("DEFAULT_TTL_MINUTES", defaults.default_ttl_minutes),
            max_value_size: env_or("MAX_VALUE_SIZE", defaults.max_value_size),
        }
    }

    /// Sweep interval as a Duration.
    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval)
    }
}

/// Parses an environment variable, falling back to `default` when unset or invalid.
fn env_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            sweep_interval: 60,
            default_ttl_minutes: 30,
            max_value_size: 100_000,
        }
    }
}
