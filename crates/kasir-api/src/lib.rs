//! # kasir-api: Backend REST Client
//!
//! All network I/O for Kasir: the REST client for the backend and the
//! in-memory session/preference store.
//!
//! ## Modules
//!
//! - [`client`] - The [`ApiClient`] covering auth, reference data, and orders
//! - [`dto`] - Wire request/response shapes
//! - [`session`] - Token, role, and observable currency preference
//! - [`error`] - [`ApiError`] classification (transport vs. rejection)
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use kasir_api::{ApiClient, SessionStore};
//!
//! # async fn demo() -> Result<(), kasir_api::ApiError> {
//! let session = Arc::new(SessionStore::new());
//! let client = ApiClient::new("https://backend.example.com/api", session);
//!
//! client.login("kasir1", "secret").await?;
//! let catalog = client.fetch_catalog().await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod dto;
pub mod error;
pub mod session;

pub use client::ApiClient;
pub use dto::{AuthSession, OrderResult, OrderResultItem};
pub use error::{ApiError, ApiResult};
pub use session::{SessionStore, DEFAULT_CURRENCY};
