//! # Validation Module
//!
//! Input validation utilities for Bookstall POS.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Console / presentation                                       │
//! │  ├── Parsing (quantity is a number at all)                             │
//! │  └── Immediate operator feedback                                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE — business rule validation                       │
//! │  ├── Trim-then-check on strings                                        │
//! │  └── Range checks on quantities and amounts                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Backend server (authoritative, unseen from here)             │
//! │                                                                         │
//! │  Defense in depth: multiple layers catch different errors              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::MAX_LINE_QUANTITY;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates an item code or barcode as entered/scanned.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must be at most 64 characters (scanner runaway guard)
///
/// ## Returns
/// The trimmed code, ready for catalog resolution.
///
/// ## Example
/// ```rust
/// use bookstall_core::validation::validate_item_code;
///
/// assert_eq!(validate_item_code("  B1 ").unwrap(), "B1");
/// assert!(validate_item_code("   ").is_err());
/// ```
pub fn validate_item_code(code: &str) -> ValidationResult<String> {
    let code = code.trim();

    if code.is_empty() {
        return Err(ValidationError::Required {
            field: "code".to_string(),
        });
    }

    if code.len() > 64 {
        return Err(ValidationError::TooLong {
            field: "code".to_string(),
            max: 64,
        });
    }

    Ok(code.to_string())
}

/// Validates the buyer name required at submission.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must be at most 200 characters
///
/// ## Returns
/// The trimmed buyer name.
pub fn validate_buyer_name(name: &str) -> ValidationResult<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "buyer name".to_string(),
        });
    }

    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "buyer name".to_string(),
            max: 200,
        });
    }

    Ok(name.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a line quantity.
///
/// ## Rules
/// - Must be at least 1
/// - Must not exceed MAX_LINE_QUANTITY (999)
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty < 1 {
        return Err(ValidationError::MustBeAtLeastOne {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_LINE_QUANTITY {
        return Err(ValidationError::TooLarge {
            field: "quantity".to_string(),
            max: MAX_LINE_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a discount amount.
///
/// ## Rules
/// - Must not be negative
/// - Is NOT checked against the cart total; a discount larger than the
///   total leaves a negative discounted total, which is displayed as-is
pub fn validate_discount(discount: Money) -> ValidationResult<()> {
    if discount.is_negative() {
        return Err(ValidationError::MustNotBeNegative {
            field: "discount".to_string(),
        });
    }

    Ok(())
}

/// Validates a payment amount.
///
/// ## Rules
/// - Must not be negative
/// - Partial payment and overpayment are both allowed; the balance carries
///   the sign
pub fn validate_payment(payment: Money) -> ValidationResult<()> {
    if payment.is_negative() {
        return Err(ValidationError::MustNotBeNegative {
            field: "payment".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
