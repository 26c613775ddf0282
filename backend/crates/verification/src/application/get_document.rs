//! Document Retrieval for Review
//!
//! Resolves request → its document snapshot → bytes, failing with NotFound
//! at each gap. The reference is read from the request, not the user record,
//! so a re-submission never changes what an older request streams.

use std::sync::Arc;

use kernel::id::VerificationRequestId;
use platform::storage::DocumentStore;

use crate::domain::repository::VerificationRepository;
use crate::error::{VerificationError, VerificationResult};

/// Document bytes plus the content type to serve them with
pub struct DocumentContent {
    pub bytes: Vec<u8>,
    pub content_type: &'static str,
}

pub struct GetDocumentUseCase<R> {
    requests: Arc<R>,
    store: DocumentStore,
}

impl<R> GetDocumentUseCase<R>
where
    R: VerificationRepository,
{
    pub fn new(requests: Arc<R>, store: DocumentStore) -> Self {
        Self { requests, store }
    }

    pub async fn execute(&self, id: &VerificationRequestId) -> VerificationResult<DocumentContent> {
        let request = self
            .requests
            .find_by_id(id)
            .await?
            .ok_or(VerificationError::RequestNotFound)?;

        let document_ref = request.document_ref.as_str();

        let bytes = self.store.load(document_ref).await.map_err(|e| match e {
            platform::storage::StorageError::NotFound(_) => VerificationError::DocumentNotFound,
            other => VerificationError::Storage(other),
        })?;

        Ok(DocumentContent {
            bytes,
            content_type: DocumentStore::content_type_of(document_ref),
        })
    }
}
