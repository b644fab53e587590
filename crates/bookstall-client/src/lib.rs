//! # bookstall-client: REST Clients for the Bookstall Backend
//!
//! Every HTTP call the terminal makes lives in this crate:
//!
//! - [`catalog`] - `GET /api/stocks`, the once-per-session stock snapshot
//! - [`billing`] - `POST /api/bills`, the finalized order submission
//! - [`session`] - `POST /api/auth/login`, the operator session lifecycle
//! - [`config`] - backend endpoint configuration
//! - [`error`] - typed transport/server errors
//!
//! The decimal-rupee ↔ integer-paise conversion happens here, at the wire
//! boundary, in exactly one place per direction. Everything past this crate
//! works in [`bookstall_core::Money`] paise.

pub mod billing;
pub mod catalog;
pub mod config;
pub mod error;
pub mod session;

pub use billing::{BillItem, BillRequest, BillResponse, BillingClient, BillingService};
pub use catalog::CatalogClient;
pub use config::ApiConfig;
pub use error::ClientError;
pub use session::{AuthClient, Session};
