//! Configuration Module
//!
//! Handles loading and managing service configuration from environment variables.

use std::env;

/// Default number of entries the store holds.
const DEFAULT_CAPACITY: i64 = 1000;

/// Default HTTP port.
const DEFAULT_PORT: u16 = 3000;

/// Service configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of entries in the LRU store.
    ///
    /// Kept signed so that a negative setting reaches store construction
    /// and is rejected there instead of being silently replaced.
    pub capacity: i64,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_CAPACITY` - Maximum store entries (default: 1000)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    pub fn from_env() -> Self {
        Self {
            capacity: parse_var("CACHE_CAPACITY").unwrap_or(DEFAULT_CAPACITY),
            server_port: parse_var("SERVER_PORT").unwrap_or(DEFAULT_PORT),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            server_port: DEFAULT_PORT,
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.capacity, 1000);
        assert_eq!(config.server_port, 3000);
    }

    // Single test touching the environment so parallel tests cannot race on it.
    #[test]
    fn test_config_from_env() {
        env::remove_var("CACHE_CAPACITY");
        env::remove_var("SERVER_PORT");
        assert_eq!(Config::from_env(), Config::default());

        env::set_var("CACHE_CAPACITY", "-5");
        env::set_var("SERVER_PORT", "8080");
        let config = Config::from_env();
        assert_eq!(config.capacity, -5);
        assert_eq!(config.server_port, 8080);

        env::set_var("CACHE_CAPACITY", "lots");
        env::set_var("SERVER_PORT", "99999");
        assert_eq!(Config::from_env(), Config::default());

        env::remove_var("CACHE_CAPACITY");
        env::remove_var("SERVER_PORT");
    }
}
