//! Configuration Module
//!
//! Handles loading and managing client configuration from environment variables.

use std::env;
use std::time::Duration;

/// Default PokeAPI root
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Client configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// API root, without a trailing slash
    pub base_url: String,
    /// Cache entry lifetime and reaper period in seconds
    pub cache_interval: u64,
    /// Number of location areas per `map` page
    pub page_size: u32,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `POKEAPI_BASE_URL` - API root (default: https://pokeapi.co/api/v2)
    /// - `CACHE_INTERVAL` - Cache interval in seconds (default: 10)
    /// - `PAGE_SIZE` - Location areas per page (default: 20)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: env::var("POKEAPI_BASE_URL")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(|v| v.trim().trim_end_matches('/').to_string())
                .unwrap_or(defaults.base_url),
            cache_interval: env::var("CACHE_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.cache_interval),
            page_size: env::var("PAGE_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.page_size),
        }
    }

    pub fn cache_interval(&self) -> Duration {
        Duration::from_secs(self.cache_interval)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            cache_interval: 10,
            page_size: 20,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.base_url, "https://pokeapi.co/api/v2");
        assert_eq!(config.cache_interval, 10);
        assert_eq!(config.cache_interval(), Duration::from_secs(10));
        assert_eq!(config.page_size, 20);
    }

    #[test]
    fn test_config_from_env() {
        // Single test touching the environment to avoid races between tests
        env::remove_var("POKEAPI_BASE_URL");
        env::remove_var("CACHE_INTERVAL");
        env::remove_var("PAGE_SIZE");

        let config = Config::from_env();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.cache_interval, 10);
        assert_eq!(config.page_size, 20);

        env::set_var("POKEAPI_BASE_URL", "http://localhost:8080/api/");
        env::set_var("CACHE_INTERVAL", "30");
        env::set_var("PAGE_SIZE", "not-a-number");

        let config = Config::from_env();
        assert_eq!(config.base_url, "http://localhost:8080/api");
        assert_eq!(config.cache_interval, 30);
        assert_eq!(config.page_size, 20);

        env::remove_var("POKEAPI_BASE_URL");
        env::remove_var("CACHE_INTERVAL");
        env::remove_var("PAGE_SIZE");
    }
}
