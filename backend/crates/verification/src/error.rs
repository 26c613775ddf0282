//! Verification Error Types

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Verification-specific result type alias
pub type VerificationResult<T> = Result<T, VerificationError>;

/// Verification-specific error variants
#[derive(Debug, Error)]
pub enum VerificationError {
    /// Verification request not found
    #[error("Verification request not found")]
    RequestNotFound,

    /// User behind a request (or the caller) not found
    #[error("User not found")]
    UserNotFound,

    /// Ownership document missing from the upload
    #[error("Ownership document is required")]
    DocumentMissing,

    /// Ownership document has an unsupported content type
    #[error("Document must be a PDF, JPEG or PNG")]
    UnsupportedDocument,

    /// Stored document is gone or the user never uploaded one
    #[error("Document not found")]
    DocumentNotFound,

    /// Email already registered
    #[error("Email is already registered")]
    EmailTaken,

    /// A pending request already exists for this user
    #[error("A verification request is already pending")]
    PendingRequestExists,

    /// Wrong email or password
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Credentials are correct but the landowner is not verified yet
    ///
    /// Distinguished from a plain Forbidden so clients can route the user
    /// to the verification flow.
    #[error("Account pending verification")]
    NotVerified,

    /// Transition attempted on a request that is not pending
    #[error("Request has already been reviewed")]
    AlreadyReviewed,

    /// Request payload failed validation
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Error from the identity layer
    #[error(transparent)]
    Auth(#[from] auth::AuthError),

    /// Document storage failure
    #[error("Document storage error: {0}")]
    Storage(#[from] platform::storage::StorageError),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl VerificationError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            VerificationError::RequestNotFound
            | VerificationError::UserNotFound
            | VerificationError::DocumentNotFound => ErrorKind::NotFound,
            VerificationError::EmailTaken | VerificationError::PendingRequestExists => {
                ErrorKind::Conflict
            }
            VerificationError::InvalidCredentials => ErrorKind::Unauthorized,
            VerificationError::NotVerified => ErrorKind::Forbidden,
            VerificationError::DocumentMissing
            | VerificationError::UnsupportedDocument
            | VerificationError::AlreadyReviewed
            | VerificationError::Validation(_) => ErrorKind::BadRequest,
            VerificationError::Auth(e) => e.kind(),
            VerificationError::Storage(platform::storage::StorageError::UnsupportedType(_)) => {
                ErrorKind::BadRequest
            }
            VerificationError::Storage(platform::storage::StorageError::NotFound(_)) => {
                ErrorKind::NotFound
            }
            VerificationError::Storage(_)
            | VerificationError::Database(_)
            | VerificationError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    fn log(&self) {
        match self {
            VerificationError::Database(e) => {
                tracing::error!(error = %e, "Verification database error");
            }
            VerificationError::Storage(e) => {
                tracing::error!(error = %e, "Verification storage error");
            }
            VerificationError::Internal(msg) => {
                tracing::error!(message = %msg, "Verification internal error");
            }
            VerificationError::InvalidCredentials => {
                tracing::warn!("Invalid landowner login attempt");
            }
            _ => {
                tracing::debug!(error = %self, "Verification error");
            }
        }
    }
}

impl IntoResponse for VerificationError {
    fn into_response(self) -> Response {
        self.log();

        // The unverified-landowner condition carries a machine-readable
        // marker so clients can branch without parsing the message
        if matches!(self, VerificationError::NotVerified) {
            return (
                StatusCode::FORBIDDEN,
                Json(serde_json::json!({
                    "type": "about:blank",
                    "title": "Forbidden",
                    "status": 403,
                    "detail": self.to_string(),
                    "needsVerification": true,
                })),
            )
                .into_response();
        }

        self.to_app_error().into_response()
    }
}
