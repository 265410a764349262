//! # Order Assembly
//!
//! Turns a cart snapshot into the order submission payload.
//!
//! Assembly is pure: the async submission itself, and the state machine
//! around it, live in the flow layer. Everything rejected here is
//! rejected before any network interaction.

use serde::{Deserialize, Serialize};

use crate::cart::CartSnapshot;
use crate::catalog::ProductCatalog;
use crate::error::ValidationError;
use crate::validation::validate_customer_name;

// =============================================================================
// Wire Types
// =============================================================================

/// One line of an order submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: i64,
    /// Quantity ordered, always >= 1.
    pub amount: i64,
}

/// A finalized order submission payload.
///
/// Built from a cart snapshot at checkout time; immutable once built.
/// Field names follow the backend's JSON contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub customer_name: String,
    pub payment_method_id: i64,
    pub toko_id: i64,
    pub items: Vec<OrderItem>,
}

// =============================================================================
// Assembly
// =============================================================================

/// Builds an order request from the current cart lines.
///
/// Lines whose product no longer resolves in the catalog are skipped,
/// mirroring the pricing policy, so the submitted items always match
/// the totals the customer saw.
///
/// ## Errors
/// - [`ValidationError::EmptyCart`] when the snapshot is empty, or when
///   every line was stale and nothing purchasable remains
/// - [`ValidationError::Required`] when the customer name is blank
pub fn build_order_request(
    snapshot: &CartSnapshot,
    catalog: &ProductCatalog,
    customer_name: &str,
    payment_method_id: i64,
    toko_id: i64,
) -> Result<OrderRequest, ValidationError> {
    if snapshot.is_empty() {
        return Err(ValidationError::EmptyCart);
    }

    validate_customer_name(customer_name)?;

    let items: Vec<OrderItem> = snapshot
        .lines()
        .iter()
        .filter(|line| catalog.contains(line.product_id))
        .map(|line| OrderItem {
            product_id: line.product_id,
            amount: line.quantity,
        })
        .collect();

    if items.is_empty() {
        // Every line was stale; nothing left to order
        return Err(ValidationError::EmptyCart);
    }

    Ok(OrderRequest {
        customer_name: customer_name.trim().to_string(),
        payment_method_id,
        toko_id,
        items,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
