//! Application Layer

pub mod emails;
pub mod get_document;
pub mod list_requests;
pub mod login_landowner;
pub mod register_landowner;
pub mod request_verification;
pub mod review_request;

pub use get_document::GetDocumentUseCase;
pub use list_requests::ListRequestsUseCase;
pub use login_landowner::LandownerLoginUseCase;
pub use register_landowner::RegisterLandownerUseCase;
pub use request_verification::RequestVerificationUseCase;
pub use review_request::ReviewRequestUseCase;

/// An uploaded ownership document, as received from the multipart form
#[derive(Debug, Clone)]
pub struct DocumentUpload {
    pub bytes: Vec<u8>,
    pub content_type: String,
}
