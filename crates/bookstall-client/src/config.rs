//! # API Configuration
//!
//! Backend endpoint configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`BOOKSTALL_*`)
//! 2. Defaults (this file, local dev server)
//!
//! Read-only after initialization; no mutex needed.

use std::time::Duration;

/// Configuration for the REST clients.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL including the `/api` prefix,
    /// e.g. `http://localhost:5000/api`.
    pub base_url: String,

    /// Per-request timeout. The terminal stays responsive while a request
    /// is in flight; this bounds how long "in flight" can last.
    pub timeout: Duration,
}

impl Default for ApiConfig {
    /// Returns default configuration suitable for development.
    fn default() -> Self {
        ApiConfig {
            base_url: "http://localhost:5000/api".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl ApiConfig {
    /// Creates an ApiConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `BOOKSTALL_API_URL`: Override the backend base URL
    /// - `BOOKSTALL_API_TIMEOUT_SECS`: Override the request timeout
    pub fn from_env() -> Self {
        let mut config = ApiConfig::default();

        if let Ok(url) = std::env::var("BOOKSTALL_API_URL") {
            config.base_url = url.trim_end_matches('/').to_string();
        }

        if let Ok(secs) = std::env::var("BOOKSTALL_API_TIMEOUT_SECS") {
            if let Ok(secs) = secs.parse::<u64>() {
                config.timeout = Duration::from_secs(secs);
            }
        }

        config
    }

    /// Joins a path onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_join() {
        let config = ApiConfig {
            base_url: "http://localhost:5000/api".to_string(),
            timeout: Duration::from_secs(30),
        };
        assert_eq!(
            config.endpoint("/stocks"),
            "http://localhost:5000/api/stocks"
        );
    }
}
