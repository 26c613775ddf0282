//! Landowner Registration Use Case
//!
//! Two writes, deliberately not atomic: the account row first, then the
//! pending request. If the second write is lost the account exists without
//! a request and the owner recovers through `request-verification`.

use std::sync::Arc;

use auth::AuthConfig;
use auth::domain::repository::UserRepository;
use auth::models::{Email, User};
use platform::password::ClearTextPassword;
use platform::storage::DocumentStore;

use crate::application::DocumentUpload;
use crate::domain::entity::verification_request::VerificationRequest;
use crate::domain::repository::VerificationRepository;
use crate::error::{VerificationError, VerificationResult};

/// Registers a landowner account with its ownership document
pub struct RegisterLandownerUseCase<R, U> {
    requests: Arc<R>,
    users: Arc<U>,
    store: DocumentStore,
    config: Arc<AuthConfig>,
}

impl<R, U> RegisterLandownerUseCase<R, U>
where
    R: VerificationRepository,
    U: UserRepository,
{
    pub fn new(requests: Arc<R>, users: Arc<U>, store: DocumentStore, config: Arc<AuthConfig>) -> Self {
        Self {
            requests,
            users,
            store,
            config,
        }
    }

    pub async fn execute(
        &self,
        name: &str,
        email: &str,
        password: String,
        document: Option<DocumentUpload>,
    ) -> VerificationResult<User> {
        let name = name.trim();
        if name.is_empty() {
            return Err(VerificationError::Validation("Name is required".to_string()));
        }

        let email = Email::new(email)
            .map_err(|e| VerificationError::Validation(e.to_string()))?;

        let password = ClearTextPassword::new(password)
            .map_err(|e| VerificationError::Validation(e.to_string()))?;
        let hash = password
            .hash(self.config.pepper())
            .map_err(|e| VerificationError::Internal(e.to_string()))?;

        let document = document.ok_or(VerificationError::DocumentMissing)?;
        if platform::storage::extension_for(&document.content_type).is_none() {
            return Err(VerificationError::UnsupportedDocument);
        }

        if self.users.exists_by_email(&email).await? {
            return Err(VerificationError::EmailTaken);
        }

        // The document lands on disk before any row is written; an orphaned
        // file is harmless
        let document_ref = self
            .store
            .store(&document.bytes, &document.content_type)
            .await?;

        let user = User::new_landowner(
            name.to_string(),
            email,
            hash.as_phc_string().to_string(),
            document_ref.clone(),
        );
        self.users.create(&user).await.map_err(|e| match e {
            auth::AuthError::EmailTaken => VerificationError::EmailTaken,
            other => VerificationError::Auth(other),
        })?;

        let request = VerificationRequest::pending(user.id, document_ref);
        self.requests.create(&request).await?;

        tracing::info!(
            user_id = %user.id,
            request_id = %request.id,
            "Registered landowner with pending verification request"
        );

        Ok(user)
    }
}
