//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures server errors to Sentry
//! before responding to the client. All route handlers return
//! `Result<T, AppError>`.
//!
//! Status mapping follows the API's error taxonomy: validation failures are
//! 400 with field detail, missing entities are 404, and payment processor
//! failures surface as 500 with the processor's message passed through.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::db::RepositoryError;
use crate::services::checkout::CheckoutError;
use crate::services::stripe::StripeError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Database operation failed.
    #[error("Database error: {0}")]
    Database(RepositoryError),

    /// Payment processor operation failed.
    #[error("Payment error: {0}")]
    Payment(#[from] StripeError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Request failed field-level validation.
    #[error("Invalid {field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => Self::NotFound("resource not found".to_string()),
            other => Self::Database(other),
        }
    }
}

impl From<CheckoutError> for AppError {
    fn from(err: CheckoutError) -> Self {
        match err {
            CheckoutError::EmptyCart => Self::Validation {
                field: "cart",
                message: "cart is empty".to_string(),
            },
            CheckoutError::AmountOutOfRange => Self::Validation {
                field: "amount",
                message: "order total out of range".to_string(),
            },
            CheckoutError::Repository(e) => e.into(),
            CheckoutError::Stripe(e) => Self::Payment(e),
        }
    }
}

/// JSON error body sent to clients.
#[derive(Debug, Serialize)]
struct ErrorBody {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<&'static str>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if matches!(self, Self::Database(_) | Self::Internal(_) | Self::Payment(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let status = match &self {
            Self::Database(_) | Self::Internal(_) | Self::Payment(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Validation { .. } | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        };

        let (message, field) = match &self {
            // Don't expose database details to clients
            Self::Database(_) | Self::Internal(_) => ("Internal server error".to_string(), None),
            // Processor messages pass through; Stripe is the system of record
            // and its messages are what the client needs to see
            Self::Payment(err) => (err.to_string(), None),
            Self::Validation { field, message } => (message.clone(), Some(*field)),
            Self::NotFound(what) => (what.clone(), None),
            Self::BadRequest(msg) => (msg.clone(), None),
        };

        (status, Json(ErrorBody { message, field })).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_app_error_status_codes() {
        assert_eq!(
            status_of(AppError::NotFound("product 7".to_string())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(AppError::Validation {
                field: "quantity",
                message: "must be at least 1".to_string(),
            }),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(AppError::BadRequest("test".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(AppError::Internal("test".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_of(AppError::Payment(StripeError::Api {
                status: 400,
                message: "Invalid amount".to_string(),
            })),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_repository_not_found_maps_to_404() {
        let err: AppError = RepositoryError::NotFound.into();
        assert_eq!(status_of(err), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_empty_cart_maps_to_validation() {
        let err: AppError = CheckoutError::EmptyCart.into();
        assert!(matches!(err, AppError::Validation { field: "cart", .. }));
        assert_eq!(status_of(err), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_validation_error_display() {
        let err = AppError::Validation {
            field: "quantity",
            message: "must be a positive number".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid quantity: must be a positive number");
    }
}
