//! # Cart
//!
//! The in-session mapping of selected product ids to quantities.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                       Cart Operations                           │
//! │                                                                 │
//! │  User Action            Operation                State Change   │
//! │  ───────────            ─────────                ────────────   │
//! │                                                                 │
//! │  Pick quantity ───────► add_or_set_quantity ───► line = qty     │
//! │                         (qty <= 0 removes)                      │
//! │                                                                 │
//! │  Tap remove ──────────► remove ────────────────► line deleted   │
//! │                                                                 │
//! │  Cancel / paid ───────► clear ─────────────────► cart empty     │
//! │                                                                 │
//! │  Price / submit ──────► snapshot ──────────────► (read only)    │
//! │                                                                 │
//! │  NOTE: Every operation is a total function: no error returns,   │
//! │        no panics. Input validation happens a layer above.       │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Lines are unique by `product_id`
//! - A stored quantity is always >= 1; zero and negative quantities are
//!   expressed as absence of the line
//! - Insertion order is preserved for display; totals don't depend on it

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::ProductCatalog;

// =============================================================================
// Cart Line
// =============================================================================

/// One selected product with its quantity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartLine {
    /// Backend product id this line refers to.
    pub product_id: i64,

    /// Selected quantity, always >= 1.
    pub quantity: i64,

    /// When this line first entered the cart.
    pub added_at: DateTime<Utc>,
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// Session-scoped: created empty, mutated by user actions, cleared after
/// a confirmed order or explicit cancellation. Never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
    created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            lines: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Sets the quantity for a product.
    ///
    /// ## Behavior
    /// - `quantity <= 0`: the line is removed entirely, never stored as
    ///   zero or negative
    /// - `quantity > 0`, product already present: quantity overwritten,
    ///   line keeps its position and `added_at`
    /// - `quantity > 0`, product absent: new line appended
    pub fn add_or_set_quantity(&mut self, product_id: i64, quantity: i64) {
        if quantity <= 0 {
            self.remove(product_id);
            return;
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product_id) {
            line.quantity = quantity;
            return;
        }

        self.lines.push(CartLine {
            product_id,
            quantity,
            added_at: Utc::now(),
        });
    }

    /// Removes a product's line. Absent ids are a no-op.
    pub fn remove(&mut self, product_id: i64) {
        self.lines.retain(|l| l.product_id != product_id);
    }

    /// Empties the cart.
    ///
    /// Used after a confirmed order submission or an explicit cancel.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.created_at = Utc::now();
    }

    /// Drops lines whose product no longer resolves in the catalog.
    ///
    /// Returns the removed product ids so the caller can surface a
    /// warning. Keeps displayed lines consistent with computed totals
    /// after a product disappears mid-session.
    pub fn prune_missing(&mut self, catalog: &ProductCatalog) -> Vec<i64> {
        let stale: Vec<i64> = self
            .lines
            .iter()
            .filter(|l| !catalog.contains(l.product_id))
            .map(|l| l.product_id)
            .collect();
        self.lines.retain(|l| catalog.contains(l.product_id));
        stale
    }

    /// Returns an immutable copy of the current selections.
    ///
    /// Pricing and order assembly work on a snapshot so a mutation
    /// between read and submit cannot shift totals under them.
    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot {
            lines: self.lines.clone(),
        }
    }

    /// Quantity currently selected for a product, if any.
    pub fn quantity_of(&self, product_id: i64) -> Option<i64> {
        self.lines
            .iter()
            .find(|l| l.product_id == product_id)
            .map(|l| l.quantity)
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Total quantity across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Lines in insertion order (display order).
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// When this cart session started (or was last cleared).
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Default for Cart {
    fn default() -> Self {
        Cart::new()
    }
}

// =============================================================================
// Cart Snapshot
// =============================================================================

/// An immutable copy of the cart taken at one instant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartSnapshot {
    lines: Vec<CartLine>,
}

impl CartSnapshot {
    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Checks if the snapshot holds no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::types::Product;

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

    #[test]
    fn test_add_and_overwrite_quantity() {
        let mut cart = Cart::new();
        cart.add_or_set_quantity(1, 2);
        cart.add_or_set_quantity(2, 1);

        assert_eq!(cart.line_count(), 2);
        assert_eq!(cart.quantity_of(1), Some(2));

        // Overwrites, not accumulates
        cart.add_or_set_quantity(1, 5);
        assert_eq!(cart.line_count(), 2);
        assert_eq!(cart.quantity_of(1), Some(5));
    }

    #[test]
    fn test_zero_and_negative_quantity_remove_line() {
        let mut cart = Cart::new();
        cart.add_or_set_quantity(1, 3);

        cart.add_or_set_quantity(1, 0);
        assert_eq!(cart.quantity_of(1), None);
        assert!(cart.is_empty());

        cart.add_or_set_quantity(1, 3);
        cart.add_or_set_quantity(1, -1);
        assert_eq!(cart.quantity_of(1), None);
    }

    #[test]
    fn test_zero_quantity_on_absent_product_is_noop() {
        let mut cart = Cart::new();
        cart.add_or_set_quantity(42, 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_is_unconditional() {
        let mut cart = Cart::new();
        cart.add_or_set_quantity(1, 2);

        cart.remove(1);
        assert!(cart.is_empty());

        // Removing an absent id is a no-op, not an error
        cart.remove(99);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_overwrite_keeps_display_position() {
        let mut cart = Cart::new();
        cart.add_or_set_quantity(1, 1);
        cart.add_or_set_quantity(2, 1);
        cart.add_or_set_quantity(1, 7);

        let ids: Vec<i64> = cart.lines().iter().map(|l| l.product_id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add_or_set_quantity(1, 2);
        cart.add_or_set_quantity(2, 1);
        assert!(!cart.is_empty());

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total_quantity(), 0);
    }

    #[test]
    fn test_snapshot_is_isolated_from_later_mutation() {
        let mut cart = Cart::new();
        cart.add_or_set_quantity(1, 2);

        let snapshot = cart.snapshot();
        cart.add_or_set_quantity(1, 9);
        cart.add_or_set_quantity(2, 1);

        assert_eq!(snapshot.line_count(), 1);
        assert_eq!(snapshot.lines()[0].quantity, 2);
    }

    #[test]
    fn test_prune_missing() {
        let catalog = ProductCatalog::from_products(vec![product(1, 10_000)]);

        let mut cart = Cart::new();
        cart.add_or_set_quantity(1, 1);
        cart.add_or_set_quantity(99, 2);

        let stale = cart.prune_missing(&catalog);
        assert_eq!(stale, vec![99]);
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.quantity_of(1), Some(1));
    }

    #[test]
    fn test_total_quantity() {
        let mut cart = Cart::new();
        cart.add_or_set_quantity(1, 2);
        cart.add_or_set_quantity(2, 3);
        assert_eq!(cart.total_quantity(), 5);
    }
}
