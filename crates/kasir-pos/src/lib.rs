//! # kasir-pos: Checkout Orchestration
//!
//! The flow layer of Kasir: shared cart state, point-of-sale
//! configuration, and the checkout state machine.
//!
//! ## Module Organization
//! ```text
//! kasir_pos/
//! ├── lib.rs          ◄─── You are here
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── cart.rs     ◄─── Mutex-guarded session cart
//! │   └── config.rs   ◄─── Point-of-sale configuration
//! ├── checkout.rs     ◄─── OrderGateway seam + CheckoutFlow
//! ├── telemetry.rs    ◄─── Tracing setup helper
//! └── error.rs        ◄─── FlowError for the presentation boundary
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use kasir_api::{ApiClient, SessionStore};
//! use kasir_core::money::Money;
//! use kasir_pos::checkout::{CheckoutContext, CheckoutFlow};
//! use kasir_pos::state::{CartState, PosConfig};
//!
//! # async fn demo() -> Result<(), kasir_pos::error::FlowError> {
//! let config = PosConfig::from_env();
//! let session = Arc::new(SessionStore::new());
//! let client = ApiClient::new(config.base_url.clone(), session);
//!
//! let catalog = client.fetch_catalog().await.map_err(kasir_pos::error::FlowError::from)?;
//! let cart = CartState::new();
//! cart.set_quantity(&catalog, 1, 2)?;
//!
//! let flow = CheckoutFlow::new(client, config.tax_rate());
//! let order = flow
//!     .submit(
//!         &cart,
//!         &catalog,
//!         &CheckoutContext {
//!             customer_name: "Budi".to_string(),
//!             payment_method_id: 1,
//!             toko_id: config.default_toko_id,
//!             tender: Some(Money::from_minor(60_000)),
//!         },
//!     )
//!     .await?;
//! println!("order {} confirmed", order.id);
//! # Ok(())
//! # }
//! ```

pub mod checkout;
pub mod error;
pub mod state;
pub mod telemetry;

pub use checkout::{CheckoutContext, CheckoutFlow, OrderGateway, SubmitState};
pub use error::{FlowError, FlowErrorCode};
pub use state::{CartState, PosConfig};
pub use telemetry::init_telemetry;
