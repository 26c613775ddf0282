//! Billing Error Types

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Billing-specific result type alias
pub type BillingResult<T> = Result<T, BillingError>;

/// Billing-specific error variants
#[derive(Debug, Error)]
pub enum BillingError {
    /// Caller not found
    #[error("User not found")]
    UserNotFound,

    /// Operation contradicts the stored subscription state
    #[error("{0}")]
    InvalidState(String),

    /// Request payload failed validation
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The payment provider rejected or failed the call
    #[error("Payment provider error: {0}")]
    ExternalService(String),

    /// Error from the identity layer
    #[error(transparent)]
    Auth(#[from] auth::AuthError),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl BillingError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            BillingError::UserNotFound => ErrorKind::NotFound,
            BillingError::InvalidState(_) => ErrorKind::BadRequest,
            BillingError::Validation(_) => ErrorKind::BadRequest,
            BillingError::ExternalService(_) => ErrorKind::BadGateway,
            BillingError::Auth(e) => e.kind(),
            BillingError::Database(_) | BillingError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    fn log(&self) {
        match self {
            BillingError::ExternalService(msg) => {
                tracing::error!(message = %msg, "Payment provider error");
            }
            BillingError::Database(e) => {
                tracing::error!(error = %e, "Billing database error");
            }
            BillingError::Internal(msg) => {
                tracing::error!(message = %msg, "Billing internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Billing error");
            }
        }
    }
}

impl IntoResponse for BillingError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
