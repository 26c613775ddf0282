//! Re-Submission Use Case
//!
//! An unverified landowner (typically after a rejection, or after the
//! registration's second write was lost) uploads a fresh document and opens
//! a new pending request.

use std::sync::Arc;

use auth::domain::repository::UserRepository;
use auth::models::{User, UserRole};
use kernel::id::UserId;
use platform::storage::DocumentStore;

use crate::application::DocumentUpload;
use crate::domain::entity::verification_request::VerificationRequest;
use crate::domain::repository::VerificationRepository;
use crate::error::{VerificationError, VerificationResult};

pub struct RequestVerificationUseCase<R, U> {
    requests: Arc<R>,
    users: Arc<U>,
    store: DocumentStore,
}

impl<R, U> RequestVerificationUseCase<R, U>
where
    R: VerificationRepository,
    U: UserRepository,
{
    pub fn new(requests: Arc<R>, users: Arc<U>, store: DocumentStore) -> Self {
        Self {
            requests,
            users,
            store,
        }
    }

    pub async fn execute(
        &self,
        caller: &UserId,
        document: Option<DocumentUpload>,
    ) -> VerificationResult<User> {
        let mut user = self
            .users
            .find_by_id(caller)
            .await?
            .ok_or(VerificationError::UserNotFound)?;

        if user.role != UserRole::Landowner {
            return Err(VerificationError::Validation(
                "Only landowner accounts can request verification".to_string(),
            ));
        }
        if user.is_verified_landowner {
            return Err(VerificationError::Validation(
                "Account is already verified".to_string(),
            ));
        }

        let document = document.ok_or(VerificationError::DocumentMissing)?;
        if platform::storage::extension_for(&document.content_type).is_none() {
            return Err(VerificationError::UnsupportedDocument);
        }

        // Early check for a clean Conflict; the partial unique index on the
        // store closes the race window
        if self.requests.has_pending(caller).await? {
            return Err(VerificationError::PendingRequestExists);
        }

        let document_ref = self
            .store
            .store(&document.bytes, &document.content_type)
            .await?;

        user.document_ref = Some(document_ref.clone());
        user.touch();
        self.users.update(&user).await?;

        let request = VerificationRequest::pending(user.id, document_ref);
        self.requests.create(&request).await?;

        tracing::info!(
            user_id = %user.id,
            request_id = %request.id,
            "Landowner re-submitted verification request"
        );

        Ok(user)
    }
}
