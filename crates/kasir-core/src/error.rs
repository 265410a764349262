//! # Error Types
//!
//! Domain-specific error types for kasir-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         Error Types                             │
//! │                                                                 │
//! │  kasir-core errors (this file)                                  │
//! │  ├── CoreError        - General domain errors                   │
//! │  └── ValidationError  - Input validation failures               │
//! │                                                                 │
//! │  kasir-api errors (separate crate)                              │
//! │  └── ApiError         - Backend request failures                │
//! │                                                                 │
//! │  kasir-pos errors (separate crate)                              │
//! │  └── FlowError        - What the presentation layer sees        │
//! │                                                                 │
//! │  Flow: ValidationError → CoreError → FlowError → Display        │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product id, amounts)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent business rule violations or domain logic failures.
/// They should be caught and translated to user-friendly messages.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Product cannot be found in the current catalog.
    ///
    /// ## When This Occurs
    /// - Product id doesn't exist on the backend
    /// - Product was deleted mid-session while still referenced
    #[error("Product not found in catalog: {0}")]
    ProductNotFound(i64),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before any network interaction runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Checkout was attempted with nothing purchasable in the cart.
    ///
    /// Raised both for a literally empty cart and for a cart whose every
    /// line failed catalog resolution.
    #[error("Cart is empty")]
    EmptyCart,

    /// Tendered cash does not cover the grand total.
    #[error("Tendered amount is short by {shortfall}")]
    InsufficientTender { shortfall: i64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
