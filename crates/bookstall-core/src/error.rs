//! # Error Types
//!
//! Domain-specific error types for bookstall-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  bookstall-core errors (this file)                                     │
//! │  ├── CoreError        - Cart/catalog domain errors                     │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  bookstall-client errors (separate crate)                              │
//! │  └── ClientError      - Transport/server failures                      │
//! │                                                                         │
//! │  Terminal alerts (in app)                                              │
//! │  └── Alert            - What the operator sees                         │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → Alert → Operator                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (code, index, limits)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core billing logic errors.
///
/// These errors represent business rule violations. None of them is fatal;
/// the terminal translates each one into an operator-visible alert and the
/// cart stays in a stable, editable state.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The entered code/barcode does not resolve against the catalog
    /// snapshot for this session.
    #[error("Item not found: {0}")]
    ItemNotFound(String),

    /// Cart has exceeded the maximum allowed number of distinct lines.
    #[error("Cart cannot have more than {max} lines")]
    CartFull { max: usize },

    /// Line quantity exceeds the maximum allowed.
    #[error("Quantity {requested} exceeds maximum allowed ({max})")]
    QuantityTooLarge { requested: i64, max: i64 },

    /// An edit/remove operation referenced a line index that does not exist.
    #[error("No cart line at index {index}")]
    LineIndexOutOfBounds { index: usize },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when operator input doesn't meet requirements.
/// Used for early validation before cart state is touched.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty after trimming.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be at least 1 (quantities).
    #[error("{field} must be at least 1")]
    MustBeAtLeastOne { field: String },

    /// Numeric value exceeds the maximum allowed.
    #[error("{field} must be at most {max}")]
    TooLarge { field: String, max: i64 },

    /// Value must not be negative (discount, payment).
    #[error("{field} must not be negative")]
    MustNotBeNegative { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
