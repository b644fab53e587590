//! # State Module
//!
//! Session state for the billing terminal.
//!
//! ## Why Multiple State Types?
//! Instead of a single struct containing everything, each state type has a
//! single responsibility:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      State Architecture                                 │
//! │                                                                         │
//! │  ┌──────────────────┐  ┌──────────────────┐  ┌──────────────────────┐  │
//! │  │    CartState     │  │   SessionState   │  │   TerminalConfig     │  │
//! │  │                  │  │                  │  │                      │  │
//! │  │  • Current cart  │  │  • Catalog       │  │  • Store name        │  │
//! │  │  • Arc<Mutex<>>  │  │    snapshot      │  │  • Print delay       │  │
//! │  │    single writer │  │  • Last receipt  │  │  • API endpoint      │  │
//! │  │                  │  │  • In-flight flag│  │                      │  │
//! │  │                  │  │  • Auth session  │  │                      │  │
//! │  └──────────────────┘  └──────────────────┘  └──────────────────────┘  │
//! │                                                                         │
//! │  THREAD SAFETY:                                                         │
//! │  • CartState: Arc<Mutex<Cart>> — the cart is single-writer by design,   │
//! │    the mutex keeps that true if operations ever overlap                 │
//! │  • SessionState: owned by the engine, mutated between awaits only       │
//! │  • TerminalConfig: read-only after startup                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod config;
mod session;

pub use cart::CartState;
pub use config::TerminalConfig;
pub use session::SessionState;
