//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Paise                                            │
//! │    ₹10.50 is stored as 1050 paise                                       │
//! │    Addition, subtraction and quantity multiplication are exact          │
//! │                                                                         │
//! │  The backend speaks decimal rupees on the wire, so conversion happens   │
//! │  exactly once, at the client boundary (from_rupees / to_rupees).        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use bookstall_core::money::Money;
//!
//! // Create from paise (preferred)
//! let rate = Money::from_paise(1050); // ₹10.50
//!
//! // Arithmetic operations
//! let amount = rate * 3;                        // ₹31.50
//! let total = amount + Money::from_paise(500);  // ₹36.50
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in paise (the smallest currency unit).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values — an overpayment balance or a
///   discount larger than the cart total are representable, not errors
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from paise (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use bookstall_core::money::Money;
    ///
    /// let rate = Money::from_paise(1050); // Represents ₹10.50
    /// assert_eq!(rate.paise(), 1050);
    /// ```
    #[inline]
    pub const fn from_paise(paise: i64) -> Self {
        Money(paise)
    }

    /// Creates a Money value from decimal rupees, rounding to the nearest
    /// paisa.
    ///
    /// This is the WIRE-BOUNDARY constructor: the backend sends retail rates
    /// and totals as JSON numbers in rupees. Everything past the client
    /// boundary works in integer paise.
    ///
    /// ## Example
    /// ```rust
    /// use bookstall_core::money::Money;
    ///
    /// assert_eq!(Money::from_rupees(10.5).paise(), 1050);
    /// assert_eq!(Money::from_rupees(0.105).paise(), 11); // rounded
    /// ```
    #[inline]
    pub fn from_rupees(rupees: f64) -> Self {
        Money((rupees * 100.0).round() as i64)
    }

    /// Returns the value in paise.
    #[inline]
    pub const fn paise(&self) -> i64 {
        self.0
    }

    /// Returns the value in decimal rupees, for the wire contract only.
    ///
    /// Display formatting should use the `Display` impl, not this.
    #[inline]
    pub fn to_rupees(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Returns the major unit (rupees) portion.
    #[inline]
    pub const fn rupees(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (paise) portion (always 0-99).
    #[inline]
    pub const fn paise_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use bookstall_core::money::Money;
    ///
    /// let rate = Money::from_paise(1000); // ₹10.00
    /// let amount = rate.multiply_quantity(3);
    /// assert_eq!(amount.paise(), 3000); // ₹30.00
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for receipts and console output. The minus sign goes before the
/// currency symbol: `-₹5.50`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}₹{}.{:02}", sign, self.rupees().abs(), self.paise_part())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by i64 (for quantity calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Summation over line amounts.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_paise() {
        let money = Money::from_paise(1050);
        assert_eq!(money.paise(), 1050);
        assert_eq!(money.rupees(), 10);
        assert_eq!(money.paise_part(), 50);
    }

    #[test]
    fn test_from_rupees_rounds_to_nearest_paisa() {
        assert_eq!(Money::from_rupees(10.5).paise(), 1050);
        assert_eq!(Money::from_rupees(10.0).paise(), 1000);
        assert_eq!(Money::from_rupees(0.105).paise(), 11);
        assert_eq!(Money::from_rupees(-5.5).paise(), -550);
    }

    #[test]
    fn test_to_rupees_round_trip() {
        let money = Money::from_paise(1234);
        assert!((money.to_rupees() - 12.34).abs() < f64::EPSILON);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_paise(1050)), "₹10.50");
        assert_eq!(format!("{}", Money::from_paise(500)), "₹5.00");
        assert_eq!(format!("{}", Money::from_paise(-550)), "-₹5.50");
        assert_eq!(format!("{}", Money::from_paise(0)), "₹0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_paise(1000);
        let b = Money::from_paise(500);

        assert_eq!((a + b).paise(), 1500);
        assert_eq!((a - b).paise(), 500);
        assert_eq!((a * 3).paise(), 3000);
        assert_eq!((b - a).paise(), -500);
    }

    #[test]
    fn test_multiply_quantity() {
        let rate = Money::from_paise(1000);
        assert_eq!(rate.multiply_quantity(5).paise(), 5000);
    }

    #[test]
    fn test_sum() {
        let amounts = [Money::from_paise(100), Money::from_paise(250), Money::from_paise(50)];
        let total: Money = amounts.into_iter().sum();
        assert_eq!(total.paise(), 400);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_negative());

        let negative = Money::from_paise(-100);
        assert!(negative.is_negative());
        assert_eq!(negative.abs().paise(), 100);
    }
}
