//! # Cart State
//!
//! Shared handle over the session cart.
//!
//! ## Thread Safety
//! The cart is wrapped in `Arc<Mutex<T>>`:
//! 1. Several flows may read or modify the cart
//! 2. Only one may modify it at a time
//! 3. Mutations are serialized; no operation holds the lock across an await
//!
//! The raw [`Cart`] accepts any input (non-positive quantities remove
//! the line); this wrapper is where user input meets validation, the
//! same layering the checkout flow uses for submissions.

use std::sync::{Arc, Mutex};

use tracing::debug;

use kasir_core::cart::{Cart, CartSnapshot};
use kasir_core::catalog::ProductCatalog;
use kasir_core::error::CoreError;
use kasir_core::pricing::{price_cart, CartTotals};
use kasir_core::types::TaxRate;
use kasir_core::validation::{validate_cart_size, validate_quantity};

use crate::error::FlowError;

/// Shared, mutex-guarded cart state.
#[derive(Debug, Clone)]
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
    /// let count = cart_state.with_cart(|cart| cart.line_count());
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.cart.lock().expect("cart mutex poisoned");
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// cart_state.with_cart_mut(|cart| cart.remove(product_id));
    /// ```
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.cart.lock().expect("cart mutex poisoned");
        f(&mut cart)
    }

    /// Sets the quantity for a product, validating user input first.
    ///
    /// ## Behavior
    /// - `quantity <= 0`: removes the line, no validation needed
    /// - product must resolve in the catalog and be available for sale
    /// - quantity and cart size must pass their range checks
    pub fn set_quantity(
        &self,
        catalog: &ProductCatalog,
        product_id: i64,
        quantity: i64,
    ) -> Result<(), FlowError> {
        debug!(product_id, quantity, "set cart quantity");

        if quantity <= 0 {
            self.with_cart_mut(|c| c.remove(product_id));
            return Ok(());
        }

        let product = catalog
            .resolve(product_id)
            .ok_or(CoreError::ProductNotFound(product_id))?;
        if !product.can_sell() {
            return Err(FlowError::validation("Product is not available for sale"));
        }

        validate_quantity(quantity)?;

        let (is_new, line_count) =
            self.with_cart(|c| (c.quantity_of(product_id).is_none(), c.line_count()));
        if is_new {
            validate_cart_size(line_count)?;
        }

        self.with_cart_mut(|c| c.add_or_set_quantity(product_id, quantity));
        Ok(())
    }

    /// Removes a product's line. Absent ids are a no-op.
    pub fn remove(&self, product_id: i64) {
        debug!(product_id, "remove cart line");
        self.with_cart_mut(|c| c.remove(product_id));
    }

    /// Empties the cart.
    pub fn clear(&self) {
        debug!("clear cart");
        self.with_cart_mut(|c| c.clear());
    }

    /// Takes an immutable snapshot of the current selections.
    pub fn snapshot(&self) -> CartSnapshot {
        self.with_cart(|c| c.snapshot())
    }

    /// Prices the current cart against a catalog.
    pub fn totals(&self, catalog: &ProductCatalog, rate: TaxRate) -> CartTotals {
        price_cart(&self.snapshot(), catalog, rate)
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.with_cart(|c| c.is_empty())
    }
}

impl Default for CartState {
    fn default() -> Self {
        CartState::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FlowErrorCode;
    use kasir_core::money::Money;
    use kasir_core::types::Product;

    fn catalog() -> ProductCatalog {
        ProductCatalog::from_products(vec![
            Product {
                id: 1,
                name: "Kopi Susu".to_string(),
                unit_price: Money::from_minor(10_000),
                available: true,
                category_id: None,
                toko_ids: vec![1],
            },
            Product {
                id: 2,
                name: "Sold Out".to_string(),
                unit_price: Money::from_minor(5_000),
                available: false,
                category_id: None,
                toko_ids: vec![1],
            },
        ])
    }

    #[test]
    fn test_set_quantity_happy_path() {
        let cart = CartState::new();
        cart.set_quantity(&catalog(), 1, 2).unwrap();

        assert_eq!(cart.with_cart(|c| c.quantity_of(1)), Some(2));
    }

    #[test]
    fn test_set_quantity_zero_removes_without_catalog_check() {
        let cart = CartState::new();
        cart.set_quantity(&catalog(), 1, 2).unwrap();

        // Product 99 isn't in the catalog but removal needs no lookup
        cart.set_quantity(&catalog(), 99, 0).unwrap();
        cart.set_quantity(&catalog(), 1, 0).unwrap();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_unknown_product() {
        let cart = CartState::new();
        let err = cart.set_quantity(&catalog(), 99, 1).unwrap_err();
        assert_eq!(err.code, FlowErrorCode::NotFound);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_unavailable_product() {
        let cart = CartState::new();
        let err = cart.set_quantity(&catalog(), 2, 1).unwrap_err();
        assert_eq!(err.code, FlowErrorCode::ValidationError);
    }

    #[test]
    fn test_set_quantity_out_of_range() {
        let cart = CartState::new();
        let err = cart.set_quantity(&catalog(), 1, 1000).unwrap_err();
        assert_eq!(err.code, FlowErrorCode::ValidationError);
    }

    #[test]
    fn test_totals_through_state() {
        let cart = CartState::new();
        cart.set_quantity(&catalog(), 1, 2).unwrap();

        let totals = cart.totals(&catalog(), TaxRate::from_bps(1000));
        assert_eq!(totals.subtotal.minor(), 20_000);
        assert_eq!(totals.total.minor(), 22_000);
    }

    #[test]
    fn test_clones_share_the_same_cart() {
        let cart = CartState::new();
        let alias = cart.clone();

        cart.set_quantity(&catalog(), 1, 2).unwrap();
        assert_eq!(alias.with_cart(|c| c.quantity_of(1)), Some(2));
    }
}
