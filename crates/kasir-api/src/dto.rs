//! # Wire DTOs
//!
//! Request/response shapes for the backend's JSON contract.
//!
//! The backend speaks camelCase; domain types in kasir-core stay
//! snake_case Rust. DTOs exist only where the two disagree or where a
//! type is purely wire-side (auth, confirmed orders, error bodies).
//! `Category`, `Toko`, and `PaymentMethod` deserialize straight into
//! their core types since every field is a single word.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use kasir_core::money::Money;
use kasir_core::types::Product;

// =============================================================================
// Auth
// =============================================================================

/// Credentials posted to the login endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// A confirmed login: bearer token plus the role encoded for it.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthSession {
    pub token: String,
    pub role: String,
}

// =============================================================================
// Products
// =============================================================================

/// A product as the backend lists it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: i64,
    pub name: String,
    pub unit_price: i64,
    #[serde(default = "default_true")]
    pub available: bool,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub toko_ids: Vec<i64>,
}

fn default_true() -> bool {
    true
}

impl ProductDto {
    /// Maps the wire shape into the domain product.
    pub fn into_product(self) -> Product {
        Product {
            id: self.id,
            name: self.name,
            unit_price: Money::from_minor(self.unit_price),
            available: self.available,
            category_id: self.category_id,
            toko_ids: self.toko_ids,
        }
    }
}

// =============================================================================
// Confirmed Orders
// =============================================================================

/// One line of a confirmed order, with name and price resolved by the
/// backend at acceptance time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResultItem {
    pub product_id: i64,
    pub name: String,
    pub unit_price: Money,
    pub amount: i64,
    pub line_total: Money,
}

/// A backend-confirmed order.
///
/// Owned by the backend; the engine relays it for display and otherwise
/// treats it as opaque. `status` stays a plain string since its value
/// set belongs to the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResult {
    pub id: i64,
    pub customer_name: String,
    pub status: String,
    pub subtotal: Money,
    pub tax: Money,
    pub total: Money,
    pub items: Vec<OrderResultItem>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

// =============================================================================
// Error Body
// =============================================================================

/// The message shape the backend uses on non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_dto_decodes_camel_case() {
        let dto: ProductDto = serde_json::from_value(serde_json::json!({
            "id": 1,
            "name": "Kopi Susu",
            "unitPrice": 10000,
            "available": true,
            "categoryId": 2,
            "tokoIds": [1, 3]
        }))
        .unwrap();

        let product = dto.into_product();
        assert_eq!(product.id, 1);
        assert_eq!(product.unit_price.minor(), 10_000);
        assert_eq!(product.category_id, Some(2));
        assert_eq!(product.toko_ids, vec![1, 3]);
    }

    #[test]
    fn test_product_dto_defaults() {
        // Minimal listing: availability defaults to sellable, no
        // category, no toko associations
        let dto: ProductDto = serde_json::from_value(serde_json::json!({
            "id": 5,
            "name": "Es Teh",
            "unitPrice": 5000
        }))
        .unwrap();

        let product = dto.into_product();
        assert!(product.available);
        assert_eq!(product.category_id, None);
        assert!(product.toko_ids.is_empty());
    }

    #[test]
    fn test_order_result_decodes() {
        let result: OrderResult = serde_json::from_value(serde_json::json!({
            "id": 12,
            "customerName": "Budi",
            "status": "pending",
            "subtotal": 45000,
            "tax": 4500,
            "total": 49500,
            "items": [
                {"productId": 1, "name": "Kopi Susu", "unitPrice": 10000, "amount": 2, "lineTotal": 20000}
            ]
        }))
        .unwrap();

        assert_eq!(result.id, 12);
        assert_eq!(result.total.minor(), 49_500);
        assert_eq!(result.items.len(), 1);
        assert_eq!(result.created_at, None);
    }

    #[test]
    fn test_error_body_tolerates_missing_message() {
        let body: ErrorBody = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(body.message.is_none());
    }
}
