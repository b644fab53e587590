//! # Bookstall POS Terminal
//!
//! The operator-facing billing terminal.
//!
//! ## Startup Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Startup                                        │
//! │                                                                         │
//! │  1. Tracing ──────────► env-filtered subscriber                        │
//! │  2. Config ───────────► BOOKSTALL_* env vars + defaults                │
//! │  3. Login (optional) ─► BOOKSTALL_USERNAME/PASSWORD → Session          │
//! │  4. Catalog fetch ────► GET /stocks; on failure the session starts     │
//! │                         with an EMPTY catalog (every add fails with    │
//! │                         "Item not found." until restart)               │
//! │  5. Engine + console ─► command loop until quit                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod alert;
pub mod console;
pub mod engine;
pub mod print;
pub mod state;

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use bookstall_client::{AuthClient, BillingClient, CatalogClient, Session};
use bookstall_core::Catalog;

use crate::engine::BillingEngine;
use crate::print::ConsolePrinter;
use crate::state::{SessionState, TerminalConfig};

/// Builds the terminal and runs the console loop to completion.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config = TerminalConfig::from_env();
    info!(store = %config.store_name, api = %config.api.base_url, "starting billing terminal");

    let auth_session = login_from_env(&config).await;

    let mut catalog_client = CatalogClient::new(config.api.clone())?;
    let mut billing_client = BillingClient::new(config.api.clone())?;
    if let Some(session) = &auth_session {
        catalog_client = catalog_client.with_session(session.clone());
        billing_client = billing_client.with_session(session.clone());
    }

    // A failed fetch is not fatal: the terminal comes up with an empty
    // catalog and the operator sees "Item not found." on every add.
    let catalog = match catalog_client.fetch_stocks().await {
        Ok(items) => Catalog::new(items),
        Err(err) => {
            error!(error = %err, "stock snapshot fetch failed; starting with empty catalog");
            Catalog::default()
        }
    };

    let mut session = SessionState::new(catalog);
    if let Some(auth) = auth_session {
        session.sign_in(auth);
    }

    let printer = ConsolePrinter::new(config.store_name.clone());
    let mut engine = BillingEngine::new(session, billing_client, printer, config);

    console::run_loop(&mut engine).await?;

    info!("billing terminal shut down");
    Ok(())
}

/// Logs in when credentials are present in the environment. A login
/// failure degrades to an unauthenticated session rather than aborting.
async fn login_from_env(config: &TerminalConfig) -> Option<Session> {
    let username = std::env::var("BOOKSTALL_USERNAME").ok()?;
    let password = std::env::var("BOOKSTALL_PASSWORD").ok()?;

    let client = match AuthClient::new(config.api.clone()) {
        Ok(client) => client,
        Err(err) => {
            warn!(error = %err, "could not build auth client");
            return None;
        }
    };

    match client.login(&username, &password).await {
        Ok(session) => Some(session),
        Err(err) => {
            warn!(error = %err, "login failed; continuing unauthenticated");
            None
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,bookstall=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
