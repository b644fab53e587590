//! # Billing Engine
//!
//! The workflow layer between the presentation loop and the core cart.
//! Every operator action enters here, and every outcome leaves as a list
//! of [`Alert`]s for the presentation layer to show.
//!
//! ## Submission Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     submit_and_print()                                  │
//! │                                                                         │
//! │  1. In-flight guard ──────► already submitting? reject with warning    │
//! │  2. Validate ─────────────► buyer non-empty AND >= 1 line, else        │
//! │                             "Buyer and items required."                 │
//! │  3. Build payload ────────► cart lines → BillRequest (decimal rupees)  │
//! │  4. Submit ───────────────► exactly one POST, flag held until settled  │
//! │  5. On success ───────────► merge server numbers + local lines into    │
//! │                             Receipt, store it, reset the cart          │
//! │  6. Print ────────────────► wait the render delay, fire the trigger   │
//! │                                                                         │
//! │  On failure the cart is left EXACTLY as it was: nothing cleared, no    │
//! │  receipt stored, no print. The operator retries deliberately.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use bookstall_client::{BillItem, BillRequest, BillingService};
use bookstall_core::validation::{
    validate_buyer_name, validate_discount, validate_item_code, validate_payment,
};
use bookstall_core::{Cart, CartTotals, CoreError, Money, Receipt};
use chrono::Utc;
use tracing::{debug, info, warn};

use crate::alert::Alert;
use crate::print::PrintTrigger;
use crate::state::{CartState, SessionState, TerminalConfig};

// =============================================================================
// Operator-Facing Messages
// =============================================================================

const MSG_INVALID_INPUT: &str = "Enter valid code and quantity.";
const MSG_ITEM_NOT_FOUND: &str = "Item not found.";
const MSG_ITEM_REMOVED: &str = "Item removed.";
const MSG_ITEM_UPDATED: &str = "Item updated successfully.";
const MSG_BUYER_AND_ITEMS_REQUIRED: &str = "Buyer and items required.";
const MSG_SUBMIT_SUCCESS: &str = "Bill submitted successfully!";
const MSG_SUBMIT_FAILED: &str = "Failed to submit bill.";
const MSG_SUBMIT_IN_FLIGHT: &str = "Submission already in progress.";
const MSG_NO_RECEIPT: &str = "No receipt to reprint.";
const MSG_REPRINTING: &str = "Reprinting...";
const MSG_FORM_CLEARED: &str = "Form cleared.";

// =============================================================================
// Engine
// =============================================================================

/// Orchestrates the billing session.
///
/// Generic over the submission seam and the print trigger so the whole
/// workflow runs under test with fakes on both sides.
pub struct BillingEngine<S: BillingService, P: PrintTrigger> {
    cart: CartState,
    session: SessionState,
    billing: S,
    printer: P,
    config: TerminalConfig,
}

impl<S: BillingService, P: PrintTrigger> BillingEngine<S, P> {
    pub fn new(session: SessionState, billing: S, printer: P, config: TerminalConfig) -> Self {
        BillingEngine {
            cart: CartState::new(),
            session,
            billing,
            printer,
            config,
        }
    }

    // -------------------------------------------------------------------------
    // Cart Operations
    // -------------------------------------------------------------------------

    /// Resolves a code/barcode against the session catalog and merges the
    /// quantity into the cart.
    ///
    /// Blank code or quantity < 1 never reaches resolution; an unresolved
    /// code leaves the cart untouched. A low-stock advisory is attached as
    /// a warning but never blocks the add.
    pub fn add_line(&mut self, raw_code: &str, quantity: i64) -> Vec<Alert> {
        let code = match validate_item_code(raw_code) {
            Ok(code) => code,
            Err(_) => return vec![Alert::warning(MSG_INVALID_INPUT)],
        };
        if quantity < 1 {
            return vec![Alert::warning(MSG_INVALID_INPUT)];
        }

        let snapshot = match self.session.catalog().resolve(&code) {
            Some(snapshot) => snapshot.clone(),
            None => {
                debug!(%code, "code did not resolve against catalog");
                return vec![Alert::error(MSG_ITEM_NOT_FOUND)];
            }
        };

        // Advisory is computed against the pre-add cart contents, but only
        // shown once the add has actually happened.
        let advisory = self
            .cart
            .with_cart(|cart| cart.low_stock_advisory(&snapshot, quantity));

        if let Err(err) = self
            .cart
            .with_cart_mut(|cart| cart.add_item(&snapshot, quantity))
        {
            return vec![Alert::warning(err.to_string())];
        }

        debug!(code = %snapshot.code, quantity, "line added");

        let mut alerts = Vec::new();
        if let Some(advisory) = advisory {
            warn!(item = %advisory.item_name, remaining = advisory.remaining, "low stock");
            alerts.push(Alert::warning(advisory.message()));
        }
        alerts
    }

    /// Replaces the quantity of the line at `index`.
    pub fn edit_line(&mut self, index: usize, quantity: i64) -> Vec<Alert> {
        match self
            .cart
            .with_cart_mut(|cart| cart.edit_quantity(index, quantity))
        {
            Ok(()) => vec![Alert::success(MSG_ITEM_UPDATED)],
            // Unwrap the validation layer so the operator sees the rule
            // itself ("quantity must be at least 1"), not the wrapper.
            Err(CoreError::Validation(err)) => vec![Alert::warning(err.to_string())],
            Err(err) => vec![Alert::warning(err.to_string())],
        }
    }

    /// Deletes the line at `index`.
    pub fn remove_line(&mut self, index: usize) -> Vec<Alert> {
        match self.cart.with_cart_mut(|cart| cart.remove_line(index)) {
            Ok(removed) => {
                debug!(code = %removed.code, "line removed");
                vec![Alert::info(MSG_ITEM_REMOVED)]
            }
            Err(err) => vec![Alert::warning(err.to_string())],
        }
    }

    /// Sets the buyer name as typed; validated only at submission.
    pub fn set_buyer_name(&mut self, name: &str) {
        let name = name.to_string();
        self.cart.with_cart_mut(|cart| cart.buyer_name = name);
    }

    /// Sets the discount. Negative amounts are rejected, everything else
    /// (including a discount above the cart total) is accepted.
    pub fn set_discount(&mut self, discount: Money) -> Vec<Alert> {
        if let Err(err) = validate_discount(discount) {
            return vec![Alert::warning(err.to_string())];
        }
        self.cart.with_cart_mut(|cart| cart.discount = discount);
        Vec::new()
    }

    /// Sets the payment. Partial payment and overpayment are both fine.
    pub fn set_payment(&mut self, payment: Money) -> Vec<Alert> {
        if let Err(err) = validate_payment(payment) {
            return vec![Alert::warning(err.to_string())];
        }
        self.cart.with_cart_mut(|cart| cart.payment = payment);
        Vec::new()
    }

    /// A consistent snapshot of the cart for rendering.
    pub fn cart_view(&self) -> (Cart, CartTotals) {
        self.cart.with_cart(|cart| (cart.clone(), cart.totals()))
    }

    /// The receipt of the last successful submission.
    pub fn receipt(&self) -> Option<Receipt> {
        self.session.receipt().cloned()
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut SessionState {
        &mut self.session
    }

    // -------------------------------------------------------------------------
    // Submission Workflow
    // -------------------------------------------------------------------------

    /// Validates, submits, merges the receipt, resets the cart and fires
    /// the print trigger. See the module diagram for the exact order.
    pub async fn submit_and_print(&mut self) -> Vec<Alert> {
        if self.session.submission_in_flight() {
            warn!("submit rejected: a submission is already in flight");
            return vec![Alert::warning(MSG_SUBMIT_IN_FLIGHT)];
        }

        let cart = self.cart.with_cart(|cart| cart.clone());

        let buyer_name = match validate_buyer_name(&cart.buyer_name) {
            Ok(name) if !cart.is_empty() => name,
            _ => return vec![Alert::warning(MSG_BUYER_AND_ITEMS_REQUIRED)],
        };

        let request = BillRequest {
            buyer_name,
            items: cart
                .lines
                .iter()
                .map(|line| BillItem {
                    code: line.code.clone(),
                    qty: line.quantity,
                    retail_rate: line.retail_rate.to_rupees(),
                })
                .collect(),
            payment: cart.payment.to_rupees(),
            discount: cart.discount.to_rupees(),
        };

        info!(buyer = %request.buyer_name, items = request.items.len(), "submitting bill");
        self.session.begin_submission();
        let outcome = self.billing.submit_bill(&request).await;
        self.session.end_submission();

        let response = match outcome {
            Ok(response) => response,
            Err(err) => {
                warn!(error = %err, "bill submission failed");
                return vec![Alert::error(MSG_SUBMIT_FAILED)];
            }
        };

        // Server numbers are authoritative; local lines fill in the detail
        // the response omits.
        let receipt = Receipt {
            receipt_number: response.receipt_number,
            date: response.date.unwrap_or_else(Utc::now),
            buyer_name: request.buyer_name,
            lines: cart.lines,
            discount: cart.discount,
            total: Money::from_rupees(response.total_amount),
            payment: cart.payment,
            balance: Money::from_rupees(response.balance),
        };

        self.cart.with_cart_mut(|cart| cart.clear());
        self.session.set_receipt(receipt);

        self.print_held_receipt().await;

        vec![Alert::success(MSG_SUBMIT_SUCCESS)]
    }

    /// Prints the held receipt again. Informational no-op when no
    /// submission has happened yet.
    pub async fn reprint(&mut self) -> Vec<Alert> {
        if self.session.receipt().is_none() {
            return vec![Alert::info(MSG_NO_RECEIPT)];
        }

        self.print_held_receipt().await;
        vec![Alert::info(MSG_REPRINTING)]
    }

    /// Discards the cart and the held receipt. No network traffic.
    pub fn clear_form(&mut self) -> Vec<Alert> {
        self.cart.with_cart_mut(|cart| cart.clear());
        self.session.clear_receipt();
        vec![Alert::info(MSG_FORM_CLEARED)]
    }

    async fn print_held_receipt(&mut self) {
        let Some(receipt) = self.session.receipt().cloned() else {
            return;
        };
        // Give the presentation layer time to render the receipt before
        // the trigger fires.
        tokio::time::sleep(self.config.print_render_delay).await;
        self.printer.trigger_print(&receipt);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
