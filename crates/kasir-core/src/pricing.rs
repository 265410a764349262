//! # Pricing
//!
//! Pure computation of monetary totals from a cart snapshot and the
//! current catalog.
//!
//! ## Totals Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │   CartSnapshot ──┬──► resolve each line in ProductCatalog       │
//! │                  │         │                                    │
//! │                  │         ├── hit:  line_subtotal = price×qty  │
//! │                  │         └── miss: line skipped, id flagged   │
//! │                  │                   (NOT priced at zero)       │
//! │                  ▼                                              │
//! │   subtotal = Σ line subtotals                                   │
//! │   tax      = round_half_up(subtotal × rate)   ← once, here      │
//! │   total    = subtotal + tax                                     │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Skipping unresolved lines instead of zero-pricing them keeps a
//! deleted product from silently shrinking the displayed amount due.

use serde::{Deserialize, Serialize};

use crate::cart::CartSnapshot;
use crate::catalog::ProductCatalog;
use crate::money::Money;
use crate::types::{Product, TaxRate};

// =============================================================================
// Priced Line
// =============================================================================

/// One cart line with its catalog data resolved and subtotal computed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricedLine {
    pub product_id: i64,
    pub name: String,
    pub unit_price: Money,
    pub quantity: i64,
    pub line_subtotal: Money,
}

// =============================================================================
// Cart Totals
// =============================================================================

/// The full pricing result for one snapshot against one catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartTotals {
    /// Resolved lines in cart display order.
    pub lines: Vec<PricedLine>,

    /// Sum of line subtotals (before tax).
    pub subtotal: Money,

    /// Tax on the subtotal.
    pub tax: Money,

    /// Amount due: subtotal + tax.
    pub total: Money,

    /// Product ids that no longer resolve in the catalog.
    ///
    /// These lines contribute nothing to the totals above; the caller
    /// decides whether to warn, prune, or ignore.
    pub stale: Vec<i64>,
}

impl CartTotals {
    /// Checks whether any line failed catalog resolution.
    pub fn has_stale_lines(&self) -> bool {
        !self.stale.is_empty()
    }
}

// =============================================================================
// Pricing Functions
// =============================================================================

/// Subtotal for a single line: unit price × quantity.
#[inline]
pub fn line_subtotal(product: &Product, quantity: i64) -> Money {
    product.unit_price.multiply_quantity(quantity)
}

/// Prices a cart snapshot against the current catalog.
///
/// Lines whose product id does not resolve are excluded from every
/// total and reported in [`CartTotals::stale`]. Tax is applied exactly
/// once on the subtotal.
///
/// ## Example
/// ```rust
/// use kasir_core::cart::Cart;
/// use kasir_core::catalog::ProductCatalog;
/// use kasir_core::money::Money;
/// use kasir_core::pricing::price_cart;
/// use kasir_core::types::{Product, TaxRate};
///
/// let catalog = ProductCatalog::from_products(vec![Product {
///     id: 1,
///     name: "Es Teh".to_string(),
///     unit_price: Money::from_minor(10_000),
///     available: true,
///     category_id: None,
///     toko_ids: vec![1],
/// }]);
///
/// let mut cart = Cart::new();
/// cart.add_or_set_quantity(1, 2);
///
/// let totals = price_cart(&cart.snapshot(), &catalog, TaxRate::from_bps(1000));
/// assert_eq!(totals.subtotal.minor(), 20_000);
/// assert_eq!(totals.tax.minor(), 2_000);
/// assert_eq!(totals.total.minor(), 22_000);
/// ```
pub fn price_cart(snapshot: &CartSnapshot, catalog: &ProductCatalog, rate: TaxRate) -> CartTotals {
    let mut lines = Vec::with_capacity(snapshot.line_count());
    let mut stale = Vec::new();

    for line in snapshot.lines() {
        match catalog.resolve(line.product_id) {
            Some(product) => lines.push(PricedLine {
                product_id: product.id,
                name: product.name.clone(),
                unit_price: product.unit_price,
                quantity: line.quantity,
                line_subtotal: line_subtotal(product, line.quantity),
            }),
            None => stale.push(line.product_id),
        }
    }

    let subtotal: Money = lines.iter().map(|l| l.line_subtotal).sum();
    let tax = subtotal.calculate_tax(rate);
    let total = subtotal + tax;

    CartTotals {
        lines,
        subtotal,
        tax,
        total,
        stale,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::Cart;

    fn product(id: i64, price: i64) -> Product {
        Product {
            id,
            name: format!("Product {}", id),
            unit_price: Money::from_minor(price),
            available: true,
            category_id: None,
            toko_ids: vec![1],
        }
    }

    fn catalog() -> ProductCatalog {
        // Product A (10_000) and Product B (25_000)
        ProductCatalog::from_products(vec![product(1, 10_000), product(2, 25_000)])
    }

    #[test]
    fn test_totals_two_products() {
        // Cart = {A: 2, B: 1} → subtotal 45_000, tax 4_500, total 49_500
        let mut cart = Cart::new();
        cart.add_or_set_quantity(1, 2);
        cart.add_or_set_quantity(2, 1);

        let totals = price_cart(&cart.snapshot(), &catalog(), TaxRate::from_bps(1000));

        assert_eq!(totals.subtotal.minor(), 45_000);
        assert_eq!(totals.tax.minor(), 4_500);
        assert_eq!(totals.total.minor(), 49_500);
        assert!(!totals.has_stale_lines());
    }

    #[test]
    fn test_line_subtotals_in_display_order() {
        let mut cart = Cart::new();
        cart.add_or_set_quantity(2, 1);
        cart.add_or_set_quantity(1, 2);

        let totals = price_cart(&cart.snapshot(), &catalog(), TaxRate::default());

        assert_eq!(totals.lines.len(), 2);
        assert_eq!(totals.lines[0].product_id, 2);
        assert_eq!(totals.lines[0].line_subtotal.minor(), 25_000);
        assert_eq!(totals.lines[1].product_id, 1);
        assert_eq!(totals.lines[1].line_subtotal.minor(), 20_000);
    }

    #[test]
    fn test_stale_line_skipped_not_zero_priced() {
        // Cart holds id 99 which the catalog no longer has
        let mut cart = Cart::new();
        cart.add_or_set_quantity(1, 1);
        cart.add_or_set_quantity(99, 3);

        let totals = price_cart(&cart.snapshot(), &catalog(), TaxRate::from_bps(1000));

        assert_eq!(totals.subtotal.minor(), 10_000);
        assert_eq!(totals.tax.minor(), 1_000);
        assert_eq!(totals.total.minor(), 11_000);
        assert_eq!(totals.stale, vec![99]);
        assert_eq!(totals.lines.len(), 1);
    }

    #[test]
    fn test_empty_cart_prices_to_zero() {
        let cart = Cart::new();
        let totals = price_cart(&cart.snapshot(), &catalog(), TaxRate::default());

        assert!(totals.lines.is_empty());
        assert!(totals.subtotal.is_zero());
        assert!(totals.tax.is_zero());
        assert!(totals.total.is_zero());
    }

    #[test]
    fn test_tax_applied_once_on_subtotal() {
        // Two lines of 125 each: per-line tax would give 13 + 13 = 26,
        // subtotal-level tax gives round(250 * 0.10) = 25.
        let catalog = ProductCatalog::from_products(vec![product(1, 125), product(2, 125)]);
        let mut cart = Cart::new();
        cart.add_or_set_quantity(1, 1);
        cart.add_or_set_quantity(2, 1);

        let totals = price_cart(&cart.snapshot(), &catalog, TaxRate::from_bps(1000));

        assert_eq!(totals.subtotal.minor(), 250);
        assert_eq!(totals.tax.minor(), 25);
        assert_eq!(totals.total.minor(), 275);
    }
}
