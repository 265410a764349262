//! # kasir-core: Pure Business Logic for Kasir
//!
//! This crate is the heart of Kasir. It contains all business logic as
//! pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      Kasir Architecture                         │
//! │                                                                 │
//! │  ┌───────────────────────────────────────────────────────────┐ │
//! │  │              Presentation layer (external)                │ │
//! │  └─────────────────────────────┬─────────────────────────────┘ │
//! │                                │                               │
//! │  ┌─────────────────────────────▼─────────────────────────────┐ │
//! │  │                 kasir-pos (checkout flows)                │ │
//! │  └─────────────────────────────┬─────────────────────────────┘ │
//! │                                │                               │
//! │  ┌─────────────────────────────▼─────────────────────────────┐ │
//! │  │              ★ kasir-core (THIS CRATE) ★                  │ │
//! │  │                                                           │ │
//! │  │  ┌────────┐ ┌────────┐ ┌─────────┐ ┌────────────┐        │ │
//! │  │  │ money  │ │  cart  │ │ pricing │ │ settlement │        │ │
//! │  │  └────────┘ └────────┘ └─────────┘ └────────────┘        │ │
//! │  │  ┌────────┐ ┌─────────┐ ┌────────┐ ┌────────────┐        │ │
//! │  │  │ types  │ │ catalog │ │ order  │ │ validation │        │ │
//! │  │  └────────┘ └─────────┘ └────────┘ └────────────┘        │ │
//! │  │                                                           │ │
//! │  │  NO I/O • NO NETWORK • PURE FUNCTIONS                     │ │
//! │  └───────────────────────────────────────────────────────────┘ │
//! │                                │                               │
//! │  ┌─────────────────────────────▼─────────────────────────────┐ │
//! │  │            kasir-api (backend REST client)                │ │
//! │  └───────────────────────────────────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input = same output, always
//! 2. **No I/O**: network, file system, and preference access are FORBIDDEN here
//! 3. **Integer Money**: all monetary values are i64 minor units, no floats
//! 4. **Explicit Errors**: all errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use kasir_core::cart::Cart;
//! use kasir_core::catalog::ProductCatalog;
//! use kasir_core::money::Money;
//! use kasir_core::pricing::price_cart;
//! use kasir_core::settlement::{parse_tender, settle};
//! use kasir_core::types::{Product, TaxRate};
//!
//! let catalog = ProductCatalog::from_products(vec![Product {
//!     id: 1,
//!     name: "Nasi Goreng".to_string(),
//!     unit_price: Money::from_minor(25_000),
//!     available: true,
//!     category_id: None,
//!     toko_ids: vec![1],
//! }]);
//!
//! let mut cart = Cart::new();
//! cart.add_or_set_quantity(1, 2);
//!
//! let totals = price_cart(&cart.snapshot(), &catalog, TaxRate::default());
//! assert_eq!(totals.total.minor(), 55_000); // 50_000 + 10% tax
//!
//! let settlement = settle(totals.total, parse_tender("60000"));
//! assert!(settlement.sufficient);
//! assert_eq!(settlement.change.minor(), 5_000);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod order;
pub mod pricing;
pub mod settlement;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartLine, CartSnapshot};
pub use catalog::ProductCatalog;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use order::{build_order_request, OrderItem, OrderRequest};
pub use pricing::{price_cart, CartTotals, PricedLine};
pub use settlement::{parse_tender, settle, Settlement, TenderBreakdown};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Flat tax rate applied on the cart subtotal, in basis points.
///
/// 1000 bps = 10%. Applied once at the subtotal → tax step.
pub const STANDARD_TAX_RATE_BPS: u32 = 1000;

/// Maximum distinct lines allowed in a single cart.
///
/// Prevents runaway carts and keeps transactions a cashier can review.
pub const MAX_CART_LINES: usize = 100;

/// Maximum quantity of a single line in the cart.
///
/// Prevents accidental over-ordering (e.g. typing 1000 instead of 10).
pub const MAX_LINE_QUANTITY: i64 = 999;
