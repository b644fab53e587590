//! # Terminal Configuration
//!
//! Configuration loaded once at startup and read-only afterwards.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`BOOKSTALL_*`)
//! 2. Defaults (this file)

use std::time::Duration;

use bookstall_client::ApiConfig;

/// Terminal application configuration.
#[derive(Debug, Clone)]
pub struct TerminalConfig {
    /// Store name printed at the top of receipts.
    pub store_name: String,

    /// Delay between a successful submission and the print trigger, so the
    /// presentation layer can render the receipt before printing starts.
    pub print_render_delay: Duration,

    /// Backend endpoint configuration.
    pub api: ApiConfig,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        TerminalConfig {
            store_name: "Bookstall".to_string(),
            print_render_delay: Duration::from_millis(500),
            api: ApiConfig::default(),
        }
    }
}

impl TerminalConfig {
    /// Creates a TerminalConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `BOOKSTALL_STORE_NAME`: Override the receipt header
    /// - `BOOKSTALL_PRINT_DELAY_MS`: Override the print render delay
    /// - `BOOKSTALL_API_URL` / `BOOKSTALL_API_TIMEOUT_SECS`: see
    ///   [`ApiConfig::from_env`]
    pub fn from_env() -> Self {
        let mut config = TerminalConfig {
            api: ApiConfig::from_env(),
            ..TerminalConfig::default()
        };

        if let Ok(name) = std::env::var("BOOKSTALL_STORE_NAME") {
            config.store_name = name;
        }

        if let Ok(ms) = std::env::var("BOOKSTALL_PRINT_DELAY_MS") {
            if let Ok(ms) = ms.parse::<u64>() {
                config.print_render_delay = Duration::from_millis(ms);
            }
        }

        config
    }
}
