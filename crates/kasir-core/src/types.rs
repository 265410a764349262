//! # Domain Types
//!
//! Core domain types used throughout Kasir.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                            │
//! │                                                                 │
//! │  ┌───────────────┐  ┌───────────────┐  ┌───────────────────┐   │
//! │  │   Product     │  │     Toko      │  │  PaymentMethod    │   │
//! │  │  ───────────  │  │  ───────────  │  │  ───────────────  │   │
//! │  │  id (i64)     │  │  id (i64)     │  │  id (i64)         │   │
//! │  │  name         │  │  name         │  │  name             │   │
//! │  │  unit_price   │  │  address      │  └───────────────────┘   │
//! │  │  available    │  └───────────────┘                          │
//! │  └───────────────┘                                             │
//! │                                                                 │
//! │  ┌───────────────┐  ┌───────────────┐                          │
//! │  │   TaxRate     │  │   Category    │                          │
//! │  │  ───────────  │  │  ───────────  │                          │
//! │  │  bps (u32)    │  │  id (i64)     │                          │
//! │  │  1000 = 10%   │  │  name         │                          │
//! │  └───────────────┘  └───────────────┘                          │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All entity identity is backend-assigned (plain integers); this crate
//! never mints ids of its own.

use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1000 bps = 10% (the flat rate applied at checkout)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Creates a tax rate from a percentage (for convenience).
    pub fn from_percentage(pct: f64) -> Self {
        TaxRate((pct * 100.0).round() as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }

    /// Checks if tax rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for TaxRate {
    /// The flat checkout rate: 10%.
    fn default() -> Self {
        TaxRate(crate::STANDARD_TAX_RATE_BPS)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product available for sale.
///
/// Read-only reference data from the engine's perspective: the backend
/// owns the lifecycle, the engine only resolves prices against it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Backend-assigned identifier.
    pub id: i64,

    /// Display name shown in the cart and on the confirmed order.
    pub name: String,

    /// Price per unit in minor currency units.
    pub unit_price: Money,

    /// Whether the product can currently be sold.
    pub available: bool,

    /// Category this product belongs to, if any.
    pub category_id: Option<i64>,

    /// Tokos (stores) this product is listed in.
    pub toko_ids: Vec<i64>,
}

impl Product {
    /// Checks if the product can be added to a cart.
    #[inline]
    pub fn can_sell(&self) -> bool {
        self.available
    }
}

// =============================================================================
// Category
// =============================================================================

/// A product category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

// =============================================================================
// Toko
// =============================================================================

/// A store/branch entity.
///
/// Orthogonal to the pricing core; used only as a reference id when
/// assembling an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Toko {
    pub id: i64,
    pub name: String,
    pub address: Option<String>,
}

// =============================================================================
// Payment Method
// =============================================================================

/// A payment method offered by the backend.
///
/// The engine treats methods as opaque ids; only the cash flow carries
/// extra local math (tender and change).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentMethod {
    pub id: i64,
    pub name: String,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tax_rate_from_bps() {
        let rate = TaxRate::from_bps(1000);
        assert_eq!(rate.bps(), 1000);
        assert!((rate.percentage() - 10.0).abs() < 0.001);
    }

    #[test]
    fn test_tax_rate_from_percentage() {
        let rate = TaxRate::from_percentage(10.0);
        assert_eq!(rate.bps(), 1000);
    }

    #[test]
    fn test_tax_rate_default_is_ten_percent() {
        assert_eq!(TaxRate::default().bps(), 1000);
    }

    #[test]
    fn test_product_can_sell() {
        let product = Product {
            id: 1,
            name: "Kopi Susu".to_string(),
            unit_price: Money::from_minor(10_000),
            available: true,
            category_id: Some(2),
            toko_ids: vec![1],
        };
        assert!(product.can_sell());

        let unavailable = Product {
            available: false,
            ..product
        };
        assert!(!unavailable.can_sell());
    }
}
