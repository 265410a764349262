//! # Flow Error Type
//!
//! Unified error type at the flow boundary.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                  Error Flow in Kasir                            │
//! │                                                                 │
//! │  Presentation layer              Flow layer                     │
//! │  ──────────────────              ──────────                     │
//! │                                                                 │
//! │  submit checkout ──────────────► CheckoutFlow::submit           │
//! │                                        │                        │
//! │       ValidationError (core) ──┐       │                        │
//! │       ApiError (backend) ──────┼──► FlowError ─────────────────►│
//! │       submit-in-flight guard ──┘                                │
//! │                                                                 │
//! │  { "code": "BACKEND_REJECTED",                                  │
//! │    "message": "stok tidak cukup" }                              │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every failure is a value with a machine-readable `code` and a
//! human-readable `message`; nothing propagates as a panic.

use serde::Serialize;

use kasir_api::ApiError;
use kasir_core::error::{CoreError, ValidationError};

/// Error returned from flow operations.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowError {
    /// Machine-readable error code for programmatic handling
    pub code: FlowErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes at the flow boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FlowErrorCode {
    /// Referenced entity does not resolve (product gone from catalog)
    NotFound,

    /// Input validation failed; rejected before any network call
    ValidationError,

    /// A submission is already running; new request ignored
    SubmitInFlight,

    /// Network unreachable or timed out; safe to retry
    TransportError,

    /// Backend refused the request (non-2xx)
    BackendRejected,

    /// Session token missing or expired
    Unauthenticated,

    /// Anything that should not happen in a correct deployment
    Internal,
}

impl FlowError {
    /// Creates a new flow error.
    pub fn new(code: FlowErrorCode, message: impl Into<String>) -> Self {
        FlowError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        FlowError::new(FlowErrorCode::ValidationError, message)
    }

    /// Creates the concurrent-submission guard error.
    pub fn submit_in_flight() -> Self {
        FlowError::new(
            FlowErrorCode::SubmitInFlight,
            "An order submission is already in progress",
        )
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        FlowError::new(FlowErrorCode::Internal, message)
    }

    /// Whether retrying with unchanged local state can succeed.
    pub fn is_retryable(&self) -> bool {
        self.code == FlowErrorCode::TransportError
    }
}

/// Converts core validation errors to flow errors.
impl From<ValidationError> for FlowError {
    fn from(err: ValidationError) -> Self {
        FlowError::validation(err.to_string())
    }
}

/// Converts core domain errors to flow errors.
impl From<CoreError> for FlowError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(id) => FlowError::new(
                FlowErrorCode::NotFound,
                format!("Product not found: {}", id),
            ),
            CoreError::Validation(e) => FlowError::validation(e.to_string()),
        }
    }
}

/// Converts backend errors to flow errors.
impl From<ApiError> for FlowError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Transport(e) => {
                tracing::error!("transport failure: {}", e);
                FlowError::new(
                    FlowErrorCode::TransportError,
                    "Could not reach the server, please try again",
                )
            }
            ApiError::Rejected { status, message } => {
                tracing::warn!(status, "backend rejected request: {}", message);
                FlowError::new(FlowErrorCode::BackendRejected, message)
            }
            ApiError::Unauthenticated => {
                FlowError::new(FlowErrorCode::Unauthenticated, "Please log in again")
            }
            ApiError::Decode(e) => {
                tracing::error!("response decode failure: {}", e);
                FlowError::internal("Unexpected response from server")
            }
        }
    }
}

impl std::fmt::Display for FlowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for FlowError {}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_conversion() {
        let err: FlowError = ValidationError::EmptyCart.into();
        assert_eq!(err.code, FlowErrorCode::ValidationError);
        assert_eq!(err.message, "Cart is empty");
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_rejection_keeps_backend_message() {
        let err: FlowError = ApiError::Rejected {
            status: 422,
            message: "stok tidak cukup".to_string(),
        }
        .into();
        assert_eq!(err.code, FlowErrorCode::BackendRejected);
        assert_eq!(err.message, "stok tidak cukup");
    }

    #[test]
    fn test_serializes_with_screaming_code() {
        let err = FlowError::submit_in_flight();
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "SUBMIT_IN_FLIGHT");
    }
}
