//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

use crate::cache::{TestMode, PROVIDER_VAR};

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Default TTL in seconds for entries stored without explicit TTL
    pub default_ttl: u64,
    /// HTTP server port
    pub server_port: u16,
    /// Name of the environment variable that switches reads off when it equals "test"
    pub mode_var: String,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `DEFAULT_TTL` - Default TTL in seconds (default: 300)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `CACHE_MODE_VAR` - Test-mode switch variable name (default: PROVIDER)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            default_ttl: env::var("DEFAULT_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.default_ttl),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),
            mode_var: env::var("CACHE_MODE_VAR")
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.mode_var),
        }
    }

    /// Test mode the server's cache should run with.
    pub fn test_mode(&self) -> TestMode {
        TestMode::FromEnv(self.mode_var.clone())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_ttl: 300,
            server_port: 3000,
            mode_var: PROVIDER_VAR.to_string(),
        }
    }
}
