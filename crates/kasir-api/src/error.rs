//! # API Error Types
//!
//! Error types for backend requests.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                            │
//! │                                                                 │
//! │  reqwest::Error (connect, timeout)                              │
//! │       │                                                         │
//! │       ▼                                                         │
//! │  ApiError (this module) ← adds classification                  │
//! │       │                                                         │
//! │       ▼                                                         │
//! │  FlowError (in kasir-pos) ← code + message for display          │
//! │                                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The split the flow layer cares about: `Transport` is retryable with
//! the cart intact, `Rejected` carries the backend's own message,
//! `Unauthenticated` means the session token is gone or expired.

use thiserror::Error;

/// Backend request errors.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network unreachable, connection refused, or timeout.
    ///
    /// Retryable: local state is untouched when this is returned.
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Backend answered with a non-2xx status.
    ///
    /// Carries the backend's own message when the error body was
    /// decodable, otherwise a generic description.
    #[error("Backend rejected request ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// Session token missing, expired, or refused (401).
    #[error("Not authenticated")]
    Unauthenticated,

    /// 2xx response whose body did not match the expected shape.
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Whether a retry with unchanged local state can succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ApiError::Transport(_))
    }
}

/// Result type for backend operations.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_message() {
        let err = ApiError::Rejected {
            status: 422,
            message: "stok tidak cukup".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Backend rejected request (422): stok tidak cukup"
        );
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_unauthenticated_not_retryable() {
        assert!(!ApiError::Unauthenticated.is_retryable());
    }
}
