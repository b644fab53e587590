//! # Cart State
//!
//! Owns the current cart for the billing session.
//!
//! ## Thread Safety
//! The cart is wrapped in `Arc<Mutex<Cart>>`: cart state is exclusively
//! owned and mutated by the engine (single writer), and the mutex keeps
//! that invariant enforced rather than assumed if operations ever overlap
//! across await points.

use std::sync::{Arc, Mutex};

use bookstall_core::Cart;

/// Engine-managed cart state.
#[derive(Debug)]
pub struct CartState {
    cart: Arc<Mutex<Cart>>,
}

impl CartState {
    /// Creates a new empty cart state.
    pub fn new() -> Self {
        CartState {
            cart: Arc::new(Mutex::new(Cart::new())),
        }
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let totals = cart_state.with_cart(|cart| cart.totals());
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// cart_state.with_cart_mut(|cart| cart.add_item(&snapshot, 2))?;
    /// ```
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&mut cart)
    }
}

impl Default for CartState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookstall_core::{Money, StockSnapshot};

    #[test]
    fn test_with_cart_mut_persists_changes() {
        let state = CartState::new();
        let snapshot = StockSnapshot {
            code: "B1".to_string(),
            barcode: None,
            item_name: "Pen".to_string(),
            retail_rate: Money::from_paise(1000),
            quantity: 100,
            min_quantity: 5,
        };

        state
            .with_cart_mut(|cart| cart.add_item(&snapshot, 2))
            .unwrap();

        assert_eq!(state.with_cart(|cart| cart.line_count()), 1);
    }
}
