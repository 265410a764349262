//! # Product Catalog
//!
//! In-memory lookup over the products fetched from the backend.
//!
//! The catalog is reference data: the engine reads prices and names out
//! of it but never mutates it. A fresh catalog replaces the old one
//! wholesale after every fetch.

use std::collections::HashMap;

use crate::types::Product;

/// Read-only id → product lookup for one catalog fetch.
#[derive(Debug, Clone, Default)]
pub struct ProductCatalog {
    by_id: HashMap<i64, Product>,
}

impl ProductCatalog {
    /// Builds a catalog from a fetched product list.
    ///
    /// Duplicate ids keep the last occurrence, matching the backend's
    /// own "latest wins" listing behavior.
    pub fn from_products(products: Vec<Product>) -> Self {
        let by_id = products.into_iter().map(|p| (p.id, p)).collect();
        ProductCatalog { by_id }
    }

    /// Resolves a product id, if it still exists in this catalog.
    #[inline]
    pub fn resolve(&self, product_id: i64) -> Option<&Product> {
        self.by_id.get(&product_id)
    }

    /// Checks whether a product id resolves.
    #[inline]
    pub fn contains(&self, product_id: i64) -> bool {
        self.by_id.contains_key(&product_id)
    }

    /// Number of products in the catalog.
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Checks if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Iterates over the products in no particular order.
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.by_id.values()
    }
}
