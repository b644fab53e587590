//! # Cart
//!
//! The in-progress, unsaved collection of line items for the current buyer.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Cart Operations                                   │
//! │                                                                         │
//! │  Operator Action          Engine Operation         Cart State Change    │
//! │  ───────────────          ────────────────         ─────────────────    │
//! │                                                                         │
//! │  Scan/type code ─────────► add_item() ───────────► merge or push line  │
//! │                                                                         │
//! │  Edit a row ─────────────► edit_quantity() ──────► lines[i].qty = n    │
//! │                                                                         │
//! │  Delete a row ───────────► remove_line() ────────► lines.remove(i)     │
//! │                                                                         │
//! │  Clear form / submit ────► clear() ──────────────► back to empty       │
//! │                                                                         │
//! │  Render ─────────────────► totals() ─────────────► (read only)         │
//! │                                                                         │
//! │  INVARIANT: at most one line per distinct code — repeated adds          │
//! │  increment quantity instead of duplicating rows.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Discount/Balance Policy
//! The discount is applied BEFORE the balance, uniformly:
//! `discounted_total = total_amount − discount` and
//! `balance = payment − discounted_total`. [`CartTotals`] is the only place
//! this arithmetic lives; the live cart view and the receipt builder both
//! call it, so the two can never disagree.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::StockSnapshot;
use crate::validation::validate_quantity;
use crate::{MAX_CART_LINES, MAX_LINE_QUANTITY};

// =============================================================================
// Cart Line
// =============================================================================

/// One product entry in the cart.
///
/// ## Snapshot Pattern
/// `item_name` and `retail_rate` are copied from the catalog at add time.
/// The cart keeps displaying consistent data even if the catalog record
/// changes behind it, and the submission payload carries the rate the
/// operator actually quoted.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartLine {
    /// References a `StockSnapshot.code`.
    pub code: String,

    /// Display name, copied at add time.
    pub item_name: String,

    /// Cumulative across repeated adds of the same code. Always >= 1.
    pub quantity: i64,

    /// Price per unit, copied at add time.
    pub retail_rate: Money,

    /// Derived: `quantity × retail_rate`. Recomputed on every quantity
    /// change, never edited directly.
    pub amount: Money,
}

impl CartLine {
    /// Creates a new line from a catalog snapshot and a quantity.
    pub fn new(snapshot: &StockSnapshot, quantity: i64) -> Self {
        CartLine {
            code: snapshot.code.clone(),
            item_name: snapshot.item_name.clone(),
            quantity,
            retail_rate: snapshot.retail_rate,
            amount: snapshot.retail_rate.multiply_quantity(quantity),
        }
    }

    /// Replaces the quantity and recomputes the derived amount.
    fn set_quantity(&mut self, quantity: i64) {
        self.quantity = quantity;
        self.amount = self.retail_rate.multiply_quantity(quantity);
    }
}

// =============================================================================
// Low-Stock Advisory
// =============================================================================

/// Advisory warning computed when an add would leave the remaining stock
/// under the item's reorder threshold.
///
/// This is a soft guard: it never blocks the add or the submission, and
/// stock is never decremented client-side. The snapshot can be stale if
/// another register is selling concurrently — accepted limitation.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LowStockAdvisory {
    pub item_name: String,
    pub min_quantity: i64,
    /// `snapshot.quantity − (existing cart qty for this code + qty added)`.
    /// Can go negative when the cart already oversells the snapshot.
    pub remaining: i64,
}

impl LowStockAdvisory {
    /// The operator-facing message for this advisory.
    pub fn message(&self) -> String {
        format!(
            "Warning: '{}' stock will drop below minimum ({})! Remaining after billing: {}",
            self.item_name, self.min_quantity, self.remaining
        )
    }
}

// =============================================================================
// Cart Totals
// =============================================================================

/// Pure totals, re-derived from the cart on every render.
///
/// Idempotent: computing twice from the same cart yields the same values —
/// there is no hidden state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartTotals {
    /// `Σ line.amount`
    pub total_amount: Money,

    /// `total_amount − discount`. Not clamped: a discount larger than the
    /// total goes negative and is displayed as-is.
    pub discounted_total: Money,

    /// `payment − discounted_total`. Negative while the payment is short,
    /// positive change on overpayment.
    pub balance: Money,
}

// =============================================================================
// Cart
// =============================================================================

/// Session-scoped cart for a single buyer.
///
/// ## Invariants
/// - At most one line per distinct `code`
/// - Line quantity is always >= 1 (removal is explicit, never qty 0)
/// - Line order is first-add order
/// - Maximum distinct lines: [`MAX_CART_LINES`]
/// - Maximum quantity per line: [`MAX_LINE_QUANTITY`]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Free-text, required non-empty at submission time only.
    pub buyer_name: String,

    /// Ordered line items, insertion order = first-add order.
    pub lines: Vec<CartLine>,

    /// Optional, defaults to zero. Never negative (validated upstream).
    pub discount: Money,

    /// Entered by the operator; may be partial or an overpayment.
    pub payment: Money,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart::default()
    }

    /// Merges a quantity of a resolved catalog item into the cart.
    ///
    /// ## Behavior
    /// - If a line for the code exists: increments its quantity and
    ///   recomputes the amount
    /// - Otherwise: appends a new line with `amount = rate × quantity`
    ///
    /// The stock-level check is NOT here — see [`Cart::low_stock_advisory`],
    /// which is advisory only and evaluated by the caller before the add.
    pub fn add_item(&mut self, snapshot: &StockSnapshot, quantity: i64) -> CoreResult<()> {
        validate_quantity(quantity)?;

        if let Some(line) = self.lines.iter_mut().find(|l| l.code == snapshot.code) {
            let new_qty = line.quantity + quantity;
            if new_qty > MAX_LINE_QUANTITY {
                return Err(CoreError::QuantityTooLarge {
                    requested: new_qty,
                    max: MAX_LINE_QUANTITY,
                });
            }
            line.set_quantity(new_qty);
            return Ok(());
        }

        if self.lines.len() >= MAX_CART_LINES {
            return Err(CoreError::CartFull {
                max: MAX_CART_LINES,
            });
        }

        self.lines.push(CartLine::new(snapshot, quantity));
        Ok(())
    }

    /// Computes the low-stock advisory for an add that is about to happen.
    ///
    /// `remaining = snapshot.quantity − (existing cart qty for this code +
    /// quantity being added)`. Returns the advisory when `remaining <
    /// snapshot.min_quantity`; the add proceeds either way.
    pub fn low_stock_advisory(
        &self,
        snapshot: &StockSnapshot,
        quantity: i64,
    ) -> Option<LowStockAdvisory> {
        let already_added = self
            .lines
            .iter()
            .find(|l| l.code == snapshot.code)
            .map(|l| l.quantity)
            .unwrap_or(0);

        let remaining = snapshot.quantity - (already_added + quantity);
        if remaining < snapshot.min_quantity {
            Some(LowStockAdvisory {
                item_name: snapshot.item_name.clone(),
                min_quantity: snapshot.min_quantity,
                remaining,
            })
        } else {
            None
        }
    }

    /// Replaces the quantity of the line at `index` and recomputes its
    /// amount.
    ///
    /// No upper bound is enforced against stock during edit — the advisory
    /// only fires on add, matching the billing workflow.
    pub fn edit_quantity(&mut self, index: usize, quantity: i64) -> CoreResult<()> {
        validate_quantity(quantity)?;

        let line = self
            .lines
            .get_mut(index)
            .ok_or(CoreError::LineIndexOutOfBounds { index })?;
        line.set_quantity(quantity);
        Ok(())
    }

    /// Deletes the line at `index` unconditionally. Returns the removed
    /// line so the caller can name it in the notification.
    pub fn remove_line(&mut self, index: usize) -> CoreResult<CartLine> {
        if index >= self.lines.len() {
            return Err(CoreError::LineIndexOutOfBounds { index });
        }
        Ok(self.lines.remove(index))
    }

    /// Resets buyer, lines, discount and payment to empty/zero.
    pub fn clear(&mut self) {
        self.buyer_name.clear();
        self.lines.clear();
        self.discount = Money::zero();
        self.payment = Money::zero();
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Checks if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Derives the totals from the current lines, discount and payment.
    pub fn totals(&self) -> CartTotals {
        let total_amount: Money = self.lines.iter().map(|l| l.amount).sum();
        let discounted_total = total_amount - self.discount;
        CartTotals {
            total_amount,
            discounted_total,
            balance: self.payment - discounted_total,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
