//! Housing Error Types

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Housing-specific result type alias
pub type HousingResult<T> = Result<T, HousingError>;

/// Housing-specific error variants
#[derive(Debug, Error)]
pub enum HousingError {
    /// Property not found
    #[error("Property not found")]
    PropertyNotFound,

    /// Bookmark not found (or not owned by the caller)
    #[error("Bookmark not found")]
    BookmarkNotFound,

    /// Notification not found (or not owned by the caller)
    #[error("Notification not found")]
    NotificationNotFound,

    /// The listing's owner cannot be resolved to an account
    #[error("Property owner could not be resolved")]
    OwnerNotFound,

    /// Caller not found
    #[error("User not found")]
    UserNotFound,

    /// Caller lacks permission for this operation
    #[error("{0}")]
    Forbidden(String),

    /// Same (user, item type, item) bookmarked twice
    #[error("Item is already bookmarked")]
    DuplicateBookmark,

    /// Request payload failed validation
    #[error("Validation failed: {0}")]
    Validation(String),

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

impl HousingError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            HousingError::PropertyNotFound
            | HousingError::BookmarkNotFound
            | HousingError::NotificationNotFound
            | HousingError::OwnerNotFound
            | HousingError::UserNotFound => ErrorKind::NotFound,
            HousingError::Forbidden(_) => ErrorKind::Forbidden,
            HousingError::DuplicateBookmark => ErrorKind::Conflict,
            HousingError::Validation(_) => ErrorKind::BadRequest,
            HousingError::Auth(e) => e.kind(),
            HousingError::Database(_) | HousingError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    fn log(&self) {
        match self {
            HousingError::Database(e) => {
                tracing::error!(error = %e, "Housing database error");
            }
            HousingError::Internal(msg) => {
                tracing::error!(message = %msg, "Housing internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Housing error");
            }
        }
    }
}

impl IntoResponse for HousingError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
