//! Unified error handling with Sentry integration.
//!
//! Provides a unified `ApiError` type that captures server faults to Sentry
//! before responding to the client. All route handlers return
//! `Result<T, ApiError>`. Failures are terminal for the request: nothing is
//! retried internally and no partial quote or order is ever returned.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::db::RepositoryError;
use crate::services::pricing::PricingError;
use crate::services::stripe::PaymentError;

/// Application-level error type for the API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Database operation failed.
    #[error("Database error: {0}")]
    Database(#[from] RepositoryError),

    /// Quote building failed.
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// The payment gateway rejected or failed the charge.
    #[error("Payment error: {0}")]
    Payment(#[from] PaymentError),

    /// Checkout requested but no gateway credentials are configured.
    #[error("Payment gateway is not configured")]
    PaymentNotConfigured,

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON error body, matching the `{"error": "..."}` wire contract.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    const fn is_server_fault(&self) -> bool {
        matches!(
            self,
            Self::Database(_)
                | Self::Internal(_)
                | Self::PaymentNotConfigured
                | Self::Pricing(PricingError::Repository(_))
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Capture server faults to Sentry
        if self.is_server_fault() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let status = match &self {
            Self::Database(_) | Self::Internal(_) | Self::PaymentNotConfigured => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::Pricing(err) => match err {
                PricingError::EmptyCart | PricingError::InvalidProduct(_) => {
                    StatusCode::BAD_REQUEST
                }
                PricingError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::Payment(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        };

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Database(_) | Self::Internal(_) => "Internal server error".to_string(),
            Self::Pricing(PricingError::Repository(_)) => "Internal server error".to_string(),
            Self::PaymentNotConfigured => "Payment gateway not configured".to_string(),
            Self::Payment(err) => err.to_string(),
            _ => self.to_string(),
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

/// Result type alias for `ApiError`.
pub type Result<T> = std::result::Result<T, ApiError>;
