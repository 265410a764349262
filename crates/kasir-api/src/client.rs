//! # Backend Client
//!
//! The REST client for the Kasir backend.
//!
//! ## Request Path
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  caller ──► ApiClient ──► reqwest ──► backend                   │
//! │                │                                                │
//! │                ├── bearer token attached when the session       │
//! │                │   store has one                                │
//! │                ├── 2xx   → decode JSON body                     │
//! │                ├── 401   → ApiError::Unauthenticated            │
//! │                ├── other → ApiError::Rejected {status, message} │
//! │                └── I/O   → ApiError::Transport (retryable)      │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every public method maps one backend resource; nothing here computes
//! totals or mutates the cart.

use std::sync::Arc;

use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use kasir_core::catalog::ProductCatalog;
use kasir_core::order::OrderRequest;
use kasir_core::types::{Category, PaymentMethod, Product, Toko};

use crate::dto::{AuthSession, ErrorBody, LoginRequest, OrderResult, ProductDto};
use crate::error::{ApiError, ApiResult};
use crate::session::SessionStore;

/// Client for the backend REST API.
///
/// Cheap to clone the underlying `reqwest::Client`; construct one per
/// process and share it.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Arc<SessionStore>,
}

impl ApiClient {
    /// Creates a client for the given base URL.
    ///
    /// The session store supplies the bearer token for authenticated
    /// requests and receives the token on login.
    pub fn new(base_url: impl Into<String>, session: Arc<SessionStore>) -> Self {
        let base_url: String = base_url.into();
        ApiClient {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut req = self.http.request(method, self.url(path));
        if let Some(token) = self.session.token() {
            req = req.bearer_auth(token);
        }
        req
    }

    /// Sends a request and classifies the response status.
    async fn send(&self, req: RequestBuilder) -> ApiResult<Response> {
        let resp = req.send().await?;
        let status = resp.status();

        if status.is_success() {
            return Ok(resp);
        }
        if status == StatusCode::UNAUTHORIZED {
            return Err(ApiError::Unauthenticated);
        }

        // Prefer the backend's own message; the body is best-effort
        let message = resp
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message)
            .unwrap_or_else(|| format!("request rejected with status {}", status.as_u16()));

        Err(ApiError::Rejected {
            status: status.as_u16(),
            message,
        })
    }

    async fn decode<T: DeserializeOwned>(resp: Response) -> ApiResult<T> {
        resp.json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    // =========================================================================
    // Auth
    // =========================================================================

    /// Logs in and stores the returned token and role in the session.
    pub async fn login(&self, username: &str, password: &str) -> ApiResult<AuthSession> {
        debug!(username, "POST /auth/login");

        let body = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let resp = self.send(self.request(Method::POST, "/auth/login").json(&body)).await?;
        let auth: AuthSession = Self::decode(resp).await?;

        self.session.set_auth(&auth.token, &auth.role);
        info!(role = %auth.role, "login succeeded");
        Ok(auth)
    }

    // =========================================================================
    // Reference Data
    // =========================================================================

    /// Fetches the full product listing.
    pub async fn fetch_products(&self) -> ApiResult<Vec<Product>> {
        debug!("GET /products");

        let resp = self.send(self.request(Method::GET, "/products")).await?;
        let dtos: Vec<ProductDto> = Self::decode(resp).await?;

        debug!(count = dtos.len(), "products fetched");
        Ok(dtos.into_iter().map(ProductDto::into_product).collect())
    }

    /// Fetches the product listing as a ready-to-use catalog.
    pub async fn fetch_catalog(&self) -> ApiResult<ProductCatalog> {
        Ok(ProductCatalog::from_products(self.fetch_products().await?))
    }

    /// Fetches the category listing.
    pub async fn fetch_categories(&self) -> ApiResult<Vec<Category>> {
        debug!("GET /categories");
        let resp = self.send(self.request(Method::GET, "/categories")).await?;
        Self::decode(resp).await
    }

    /// Fetches the toko (store) listing.
    pub async fn fetch_tokos(&self) -> ApiResult<Vec<Toko>> {
        debug!("GET /tokos");
        let resp = self.send(self.request(Method::GET, "/tokos")).await?;
        Self::decode(resp).await
    }

    /// Fetches the available payment methods.
    pub async fn fetch_payment_methods(&self) -> ApiResult<Vec<PaymentMethod>> {
        debug!("GET /payment-methods");
        let resp = self.send(self.request(Method::GET, "/payment-methods")).await?;
        Self::decode(resp).await
    }

    // =========================================================================
    // Orders
    // =========================================================================

    /// Submits a finalized order.
    ///
    /// Returns the backend-confirmed order on acceptance. The caller
    /// owns cart cleanup; this method never touches local state.
    pub async fn submit_order(&self, request: &OrderRequest) -> ApiResult<OrderResult> {
        debug!(
            items = request.items.len(),
            payment_method_id = request.payment_method_id,
            toko_id = request.toko_id,
            "POST /orders"
        );

        let resp = self.send(self.request(Method::POST, "/orders").json(request)).await?;
        let result: OrderResult = Self::decode(resp).await?;

        info!(order_id = result.id, status = %result.status, total = %result.total, "order confirmed");
        Ok(result)
    }
}
