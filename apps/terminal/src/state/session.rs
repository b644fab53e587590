//! # Session State
//!
//! Everything a billing session holds besides the cart: the read-only
//! catalog snapshot, the last receipt (for reprint), the in-flight
//! submission flag, and the operator's auth session.
//!
//! ## In-Flight Flag
//! The submit action is disabled until the prior submission settles
//! (success or failure). A second submit while one is pending is rejected
//! with a warning, never queued — this closes the double-click
//! double-billing race. There is still no server-side idempotency key; a
//! manual retry after a timeout whose request actually landed can
//! duplicate a bill, and that remains a documented limitation.

use bookstall_client::Session;
use bookstall_core::{Catalog, Receipt};

/// State for one billing session at this terminal.
#[derive(Debug, Default)]
pub struct SessionState {
    catalog: Catalog,
    receipt: Option<Receipt>,
    in_flight: bool,
    auth: Option<Session>,
}

impl SessionState {
    /// Creates session state around the catalog snapshot fetched at
    /// session start.
    pub fn new(catalog: Catalog) -> Self {
        SessionState {
            catalog,
            receipt: None,
            in_flight: false,
            auth: None,
        }
    }

    /// The read-only catalog snapshot for this session.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The receipt of the last successful submission, if any.
    pub fn receipt(&self) -> Option<&Receipt> {
        self.receipt.as_ref()
    }

    /// Stores the receipt from a successful submission, replacing any
    /// previous one.
    pub fn set_receipt(&mut self, receipt: Receipt) {
        self.receipt = Some(receipt);
    }

    /// Drops the held receipt (clear-form).
    pub fn clear_receipt(&mut self) {
        self.receipt = None;
    }

    /// True while a submission is pending.
    pub fn submission_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Marks a submission as started.
    pub fn begin_submission(&mut self) {
        self.in_flight = true;
    }

    /// Marks the pending submission as settled (success or failure).
    pub fn end_submission(&mut self) {
        self.in_flight = false;
    }

    /// Attaches the operator's auth session (set at login).
    pub fn sign_in(&mut self, session: Session) {
        self.auth = Some(session);
    }

    /// Clears the operator's auth session (logout).
    pub fn sign_out(&mut self) {
        self.auth = None;
    }

    /// The current auth session, if signed in.
    pub fn auth(&self) -> Option<&Session> {
        self.auth.as_ref()
    }
}
