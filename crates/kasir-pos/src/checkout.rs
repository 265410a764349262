//! # Checkout Flow
//!
//! The submission state machine: cart snapshot in, confirmed order out.
//!
//! ## Submission Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Checkout State Machine                       │
//! │                                                                 │
//! │            submit()                 gateway answers             │
//! │   Idle ──────────────► Submitting ─────────────────► Idle       │
//! │    ▲                       │                                    │
//! │    │                       │ submit() while Submitting          │
//! │    │                       └──────► rejected fast               │
//! │    │                                (SUBMIT_IN_FLIGHT)          │
//! │    │                                                            │
//! │   success: cart cleared, OrderResult returned to the caller     │
//! │   failure: cart untouched, typed FlowError returned             │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The outcome is the return value of the async call: there is no
//! persisted success flag to observe, so completion side effects (cart
//! clearing, navigation) run exactly once per submission.

use std::sync::Mutex;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use kasir_api::{ApiClient, ApiResult, OrderResult};
use kasir_core::catalog::ProductCatalog;
use kasir_core::error::ValidationError;
use kasir_core::money::Money;
use kasir_core::order::{build_order_request, OrderRequest};
use kasir_core::pricing::price_cart;
use kasir_core::settlement::settle;
use kasir_core::types::TaxRate;

use crate::error::FlowError;
use crate::state::CartState;

// =============================================================================
// Order Gateway
// =============================================================================

/// The backend seam for order submission.
///
/// `ApiClient` is the production implementation; tests substitute a
/// fake so flows run without a live network.
#[async_trait]
pub trait OrderGateway: Send + Sync {
    async fn submit_order(&self, request: &OrderRequest) -> ApiResult<OrderResult>;
}

#[async_trait]
impl OrderGateway for ApiClient {
    async fn submit_order(&self, request: &OrderRequest) -> ApiResult<OrderResult> {
        ApiClient::submit_order(self, request).await
    }
}

/// A borrowed gateway is itself a gateway.
#[async_trait]
impl<'a, G: OrderGateway + ?Sized> OrderGateway for &'a G {
    async fn submit_order(&self, request: &OrderRequest) -> ApiResult<OrderResult> {
        (**self).submit_order(request).await
    }
}

// =============================================================================
// Checkout Context
// =============================================================================

/// Everything the cashier chose at the checkout screen.
#[derive(Debug, Clone)]
pub struct CheckoutContext {
    pub customer_name: String,
    pub payment_method_id: i64,
    pub toko_id: i64,

    /// Cash tendered by the customer. `None` for non-cash methods,
    /// which carry no local sufficiency gate.
    pub tender: Option<Money>,
}

// =============================================================================
// Submit State
// =============================================================================

/// Where the flow currently is in the submission lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitState {
    Idle,
    Submitting,
}

// =============================================================================
// Checkout Flow
// =============================================================================

/// Drives a cart through validation, settlement, and submission.
pub struct CheckoutFlow<G> {
    gateway: G,
    tax_rate: TaxRate,
    state: Mutex<SubmitState>,
}

impl<G: OrderGateway> CheckoutFlow<G> {
    /// Creates a flow over a gateway with the configured tax rate.
    pub fn new(gateway: G, tax_rate: TaxRate) -> Self {
        CheckoutFlow {
            gateway,
            tax_rate,
            state: Mutex::new(SubmitState::Idle),
        }
    }

    /// Current submission state.
    pub fn state(&self) -> SubmitState {
        *self.state.lock().expect("submit state mutex poisoned")
    }

    /// Whether a submission is currently in flight.
    pub fn is_submitting(&self) -> bool {
        self.state() == SubmitState::Submitting
    }

    /// Submits the current cart as an order.
    ///
    /// Local rejections (empty cart, blank name, short tender, a
    /// submission already running) return before any network call.
    /// On acceptance the cart is cleared and the confirmed order
    /// returned; on any failure the cart is left intact for retry.
    ///
    /// A retry after a lost response may duplicate the order server
    /// side: the backend accepts no client idempotency key.
    pub async fn submit(
        &self,
        cart: &CartState,
        catalog: &ProductCatalog,
        ctx: &CheckoutContext,
    ) -> Result<OrderResult, FlowError> {
        // Gate rapid double-taps: only one submission at a time
        {
            let mut state = self.state.lock().expect("submit state mutex poisoned");
            if *state == SubmitState::Submitting {
                warn!("submit ignored, another submission is in flight");
                return Err(FlowError::submit_in_flight());
            }
            *state = SubmitState::Submitting;
        }

        let outcome = self.submit_inner(cart, catalog, ctx).await;

        *self.state.lock().expect("submit state mutex poisoned") = SubmitState::Idle;
        outcome
    }

    async fn submit_inner(
        &self,
        cart: &CartState,
        catalog: &ProductCatalog,
        ctx: &CheckoutContext,
    ) -> Result<OrderResult, FlowError> {
        let snapshot = cart.snapshot();

        let request = build_order_request(
            &snapshot,
            catalog,
            &ctx.customer_name,
            ctx.payment_method_id,
            ctx.toko_id,
        )?;

        if let Some(tendered) = ctx.tender {
            let totals = price_cart(&snapshot, catalog, self.tax_rate);
            let settlement = settle(totals.total, tendered);
            if !settlement.sufficient {
                debug!(
                    total = %totals.total,
                    tendered = %tendered,
                    "tender does not cover the total"
                );
                return Err(ValidationError::InsufficientTender {
                    shortfall: settlement.change.abs().minor(),
                }
                .into());
            }
        }

        info!(
            items = request.items.len(),
            payment_method_id = ctx.payment_method_id,
            toko_id = ctx.toko_id,
            "submitting order"
        );

        let result = self.gateway.submit_order(&request).await?;

        // Only a confirmed order empties the cart; failures above keep
        // every line in place so the cashier can retry
        cart.clear();
        info!(order_id = result.id, "order confirmed, cart cleared");

        Ok(result)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
