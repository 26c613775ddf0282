//! Use-case level tests for the verification workflow, over in-memory
//! repositories, a recording mailer, and a temp-dir document store.

use std::sync::{Arc, Mutex};

use auth::AuthConfig;
use auth::domain::repository::UserRepository;
use auth::models::{Email, User, UserRole};
use chrono::{DateTime, Utc};
use kernel::id::{UserId, VerificationRequestId};
use platform::mailer::{Mailer, MailReceipt, MailerError, OutgoingMail};
use platform::storage::DocumentStore;

use crate::application::{
    DocumentUpload, GetDocumentUseCase, LandownerLoginUseCase, ListRequestsUseCase,
    RegisterLandownerUseCase, RequestVerificationUseCase, ReviewRequestUseCase,
};
use crate::domain::entity::verification_request::{AdminRequestView, VerificationRequest};
use crate::domain::repository::{TransitionOutcome, VerificationRepository};
use crate::domain::value_object::status::{StatusFilter, VerificationStatus};
use crate::error::{VerificationError, VerificationResult};

// ============================================================================
// Test doubles
// ============================================================================

type SharedUsers = Arc<Mutex<Vec<User>>>;

#[derive(Clone, Default)]
struct MemoryUserRepository {
    users: SharedUsers,
}

impl UserRepository for MemoryUserRepository {
    async fn create(&self, user: &User) -> auth::AuthResult<()> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == user.email) {
            return Err(auth::AuthError::EmailTaken);
        }
        users.push(user.clone());
        Ok(())
    }

    async fn find_by_id(&self, user_id: &UserId) -> auth::AuthResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| &u.id == user_id)
            .cloned())
    }

    async fn find_by_email(&self, email: &Email) -> auth::AuthResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| &u.email == email)
            .cloned())
    }

    async fn exists_by_email(&self, email: &Email) -> auth::AuthResult<bool> {
        Ok(self.users.lock().unwrap().iter().any(|u| &u.email == email))
    }

    async fn update(&self, user: &User) -> auth::AuthResult<()> {
        let mut users = self.users.lock().unwrap();
        let existing = users
            .iter_mut()
            .find(|u| u.id == user.id)
            .ok_or(auth::AuthError::UserNotFound)?;
        *existing = user.clone();
        Ok(())
    }
}

/// In-memory verification repository sharing the user list for joins
#[derive(Clone)]
struct MemoryVerificationRepository {
    requests: Arc<Mutex<Vec<VerificationRequest>>>,
    users: SharedUsers,
}

impl MemoryVerificationRepository {
    fn new(users: SharedUsers) -> Self {
        Self {
            requests: Arc::new(Mutex::new(Vec::new())),
            users,
        }
    }
}

impl VerificationRepository for MemoryVerificationRepository {
    async fn create(&self, request: &VerificationRequest) -> VerificationResult<()> {
        let mut requests = self.requests.lock().unwrap();
        let already_pending = requests
            .iter()
            .any(|r| r.user_id == request.user_id && r.is_pending());
        if already_pending {
            return Err(VerificationError::PendingRequestExists);
        }
        requests.push(request.clone());
        Ok(())
    }

    async fn find_by_id(
        &self,
        id: &VerificationRequestId,
    ) -> VerificationResult<Option<VerificationRequest>> {
        Ok(self
            .requests
            .lock()
            .unwrap()
            .iter()
            .find(|r| &r.id == id)
            .cloned())
    }

    async fn has_pending(&self, user_id: &UserId) -> VerificationResult<bool> {
        Ok(self
            .requests
            .lock()
            .unwrap()
            .iter()
            .any(|r| &r.user_id == user_id && r.is_pending()))
    }

    async fn list(&self, filter: StatusFilter) -> VerificationResult<Vec<AdminRequestView>> {
        let users = self.users.lock().unwrap();
        let mut views: Vec<AdminRequestView> = self
            .requests
            .lock()
            .unwrap()
            .iter()
            .filter(|r| filter == StatusFilter::All || r.is_pending())
            .filter_map(|r| {
                let submitter = users.iter().find(|u| u.id == r.user_id)?;
                let reviewer_name = r
                    .reviewed_by
                    .and_then(|id| users.iter().find(|u| u.id == id))
                    .map(|u| u.name.clone());
                Some(AdminRequestView {
                    request: r.clone(),
                    submitter_name: submitter.name.clone(),
                    submitter_email: submitter.email.as_str().to_string(),
                    reviewer_name,
                })
            })
            .collect();
        views.sort_by(|a, b| b.request.created_at.cmp(&a.request.created_at));
        Ok(views)
    }

    async fn transition(
        &self,
        id: &VerificationRequestId,
        to: VerificationStatus,
        admin_notes: Option<&str>,
        reviewed_by: &UserId,
        reviewed_at: DateTime<Utc>,
    ) -> VerificationResult<TransitionOutcome> {
        let mut requests = self.requests.lock().unwrap();
        let Some(request) = requests.iter_mut().find(|r| &r.id == id) else {
            return Ok(TransitionOutcome::NotFound);
        };
        if !request.is_pending() {
            return Ok(TransitionOutcome::NotPending);
        }
        request.status = to;
        request.admin_notes = admin_notes.map(str::to_string);
        request.reviewed_by = Some(*reviewed_by);
        request.reviewed_at = Some(reviewed_at);
        request.updated_at = reviewed_at;
        Ok(TransitionOutcome::Applied)
    }
}

/// Mailer double that records every delivery
#[derive(Clone, Default)]
struct RecordingMailer {
    sent: Arc<Mutex<Vec<OutgoingMail>>>,
}

impl RecordingMailer {
    fn sent(&self) -> Vec<OutgoingMail> {
        self.sent.lock().unwrap().clone()
    }
}

impl Mailer for RecordingMailer {
    async fn send(&self, mail: &OutgoingMail) -> Result<MailReceipt, MailerError> {
        self.sent.lock().unwrap().push(mail.clone());
        Ok(MailReceipt {
            message_id: format!("msg-{}", self.sent.lock().unwrap().len()),
            preview_url: None,
        })
    }
}

// ============================================================================
// Harness
// ============================================================================

struct Harness {
    requests: Arc<MemoryVerificationRepository>,
    users: Arc<MemoryUserRepository>,
    store: DocumentStore,
    mailer: Arc<RecordingMailer>,
    config: Arc<AuthConfig>,
}

impl Harness {
    async fn new() -> Self {
        let user_repo = MemoryUserRepository::default();
        let requests = MemoryVerificationRepository::new(user_repo.users.clone());
        let store = DocumentStore::new(
            std::env::temp_dir().join(format!("verification-{}", uuid::Uuid::new_v4())),
        );
        store.init().await.unwrap();

        Self {
            requests: Arc::new(requests),
            users: Arc::new(user_repo),
            store,
            mailer: Arc::new(RecordingMailer::default()),
            config: Arc::new(AuthConfig::development()),
        }
    }

    fn register(&self) -> RegisterLandownerUseCase<MemoryVerificationRepository, MemoryUserRepository> {
        RegisterLandownerUseCase::new(
            self.requests.clone(),
            self.users.clone(),
            self.store.clone(),
            self.config.clone(),
        )
    }

    fn login(&self) -> LandownerLoginUseCase<MemoryUserRepository> {
        LandownerLoginUseCase::new(self.users.clone(), self.config.clone())
    }

    fn review(
        &self,
    ) -> ReviewRequestUseCase<MemoryVerificationRepository, MemoryUserRepository, RecordingMailer>
    {
        ReviewRequestUseCase::new(self.requests.clone(), self.users.clone(), self.mailer.clone())
    }

    async fn admin(&self) -> UserId {
        let mut admin = User::new_student(
            "Root".to_string(),
            Email::new("admin@example.com").unwrap(),
            "$argon2id$v=19$m=19456,t=2,p=1$AAAAAAAA$AAAAAAAA".to_string(),
        );
        admin.role = UserRole::Admin;
        let id = admin.id;
        self.users.create(&admin).await.unwrap();
        id
    }

    async fn pending_request_of(&self, user_id: &UserId) -> VerificationRequest {
        self.requests
            .requests
            .lock()
            .unwrap()
            .iter()
            .find(|r| &r.user_id == user_id && r.is_pending())
            .cloned()
            .expect("pending request")
    }
}

fn pdf_upload() -> Option<DocumentUpload> {
    deed_upload("%PDF-1.4 deed of ownership")
}

fn deed_upload(contents: &str) -> Option<DocumentUpload> {
    Some(DocumentUpload {
        bytes: contents.as_bytes().to_vec(),
        content_type: "application/pdf".to_string(),
    })
}

// ============================================================================
// Registration
// ============================================================================

#[tokio::test]
async fn test_register_creates_unverified_landowner_with_pending_request() {
    let h = Harness::new().await;

    let user = h
        .register()
        .execute("Lee", "lee@example.com", "correct horse battery".to_string(), pdf_upload())
        .await
        .unwrap();

    assert_eq!(user.role, UserRole::Landowner);
    assert!(!user.is_verified_landowner);
    assert!(user.document_ref.is_some());
    assert!(h.requests.has_pending(&user.id).await.unwrap());
}

#[tokio::test]
async fn test_register_without_document_is_rejected() {
    let h = Harness::new().await;

    let result = h
        .register()
        .execute("Lee", "lee@example.com", "correct horse battery".to_string(), None)
        .await;
    assert!(matches!(result, Err(VerificationError::DocumentMissing)));

    let bad_type = h
        .register()
        .execute(
            "Lee",
            "lee@example.com",
            "correct horse battery".to_string(),
            Some(DocumentUpload {
                bytes: b"<html>".to_vec(),
                content_type: "text/html".to_string(),
            }),
        )
        .await;
    assert!(matches!(bad_type, Err(VerificationError::UnsupportedDocument)));
}

#[tokio::test]
async fn test_register_duplicate_email_conflicts() {
    let h = Harness::new().await;

    h.register()
        .execute("Lee", "lee@example.com", "correct horse battery".to_string(), pdf_upload())
        .await
        .unwrap();

    let result = h
        .register()
        .execute("Lee 2", "LEE@example.com", "another password!".to_string(), pdf_upload())
        .await;
    assert!(matches!(result, Err(VerificationError::EmailTaken)));
}

// ============================================================================
// Login gate
// ============================================================================

#[tokio::test]
async fn test_unverified_login_is_distinguishable_from_bad_credentials() {
    let h = Harness::new().await;

    h.register()
        .execute("Lee", "lee@example.com", "correct horse battery".to_string(), pdf_upload())
        .await
        .unwrap();

    // Correct credentials, unverified account
    let gated = h
        .login()
        .execute("lee@example.com", "correct horse battery".to_string())
        .await;
    assert!(matches!(gated, Err(VerificationError::NotVerified)));

    // Wrong password is a plain 401
    let wrong = h
        .login()
        .execute("lee@example.com", "wrong password!!".to_string())
        .await;
    assert!(matches!(wrong, Err(VerificationError::InvalidCredentials)));
}

// ============================================================================
// Scenario: register → approve → login succeeds
// ============================================================================

#[tokio::test]
async fn test_approval_unlocks_login_and_notifies_by_email() {
    let h = Harness::new().await;
    let admin = h.admin().await;

    let user = h
        .register()
        .execute("Lee", "lee@example.com", "correct horse battery".to_string(), pdf_upload())
        .await
        .unwrap();
    let request = h.pending_request_of(&user.id).await;

    h.review().approve(&request.id, &admin, None).await.unwrap();

    let outcome = h
        .login()
        .execute("lee@example.com", "correct horse battery".to_string())
        .await
        .unwrap();
    assert!(outcome.user.is_verified_landowner);

    let claims = h.config.signer().verify(&outcome.token).unwrap();
    assert_eq!(claims.role, "landowner");

    let sent = h.mailer.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "lee@example.com");
    assert!(sent[0].subject.contains("verified"));
}

#[tokio::test]
async fn test_second_review_of_same_request_is_invalid_state() {
    let h = Harness::new().await;
    let admin = h.admin().await;

    let user = h
        .register()
        .execute("Lee", "lee@example.com", "correct horse battery".to_string(), pdf_upload())
        .await
        .unwrap();
    let request = h.pending_request_of(&user.id).await;

    h.review().approve(&request.id, &admin, None).await.unwrap();

    let again = h.review().approve(&request.id, &admin, None).await;
    assert!(matches!(again, Err(VerificationError::AlreadyReviewed)));

    let reject_after = h
        .review()
        .reject(&request.id, &admin, "too late".to_string())
        .await;
    assert!(matches!(reject_after, Err(VerificationError::AlreadyReviewed)));
}

#[tokio::test]
async fn test_review_of_unknown_request_is_not_found() {
    let h = Harness::new().await;
    let admin = h.admin().await;

    let result = h
        .review()
        .approve(&VerificationRequestId::new(), &admin, None)
        .await;
    assert!(matches!(result, Err(VerificationError::RequestNotFound)));
}

// ============================================================================
// Scenario: reject → re-submit → approve
// ============================================================================

#[tokio::test]
async fn test_rejection_then_resubmission_then_approval() {
    let h = Harness::new().await;
    let admin = h.admin().await;

    let user = h
        .register()
        .execute("Lee", "lee@example.com", "correct horse battery".to_string(), pdf_upload())
        .await
        .unwrap();
    let first = h.pending_request_of(&user.id).await;

    h.review()
        .reject(&first.id, &admin, "Document is illegible".to_string())
        .await
        .unwrap();

    // Rejection email carries the notes; the flag stays off
    let sent = h.mailer.sent();
    assert!(sent[0].html_body.contains("Document is illegible"));
    let after_reject = h.users.find_by_id(&user.id).await.unwrap().unwrap();
    assert!(!after_reject.is_verified_landowner);

    // Re-submission opens a fresh pending request with a new document
    let resubmit =
        RequestVerificationUseCase::new(h.requests.clone(), h.users.clone(), h.store.clone());
    let updated = resubmit.execute(&user.id, pdf_upload()).await.unwrap();
    assert_ne!(updated.document_ref, after_reject.document_ref);

    let second = h.pending_request_of(&user.id).await;
    assert_ne!(second.id, first.id);

    // A second pending submission conflicts
    let conflict = resubmit.execute(&user.id, pdf_upload()).await;
    assert!(matches!(conflict, Err(VerificationError::PendingRequestExists)));

    h.review()
        .approve(&second.id, &admin, Some("All good now".to_string()))
        .await
        .unwrap();
    let final_user = h.users.find_by_id(&user.id).await.unwrap().unwrap();
    assert!(final_user.is_verified_landowner);
}

#[tokio::test]
async fn test_reject_without_notes_is_a_validation_error() {
    let h = Harness::new().await;
    let admin = h.admin().await;

    let user = h
        .register()
        .execute("Lee", "lee@example.com", "correct horse battery".to_string(), pdf_upload())
        .await
        .unwrap();
    let request = h.pending_request_of(&user.id).await;

    let result = h.review().reject(&request.id, &admin, "   ".to_string()).await;
    assert!(matches!(result, Err(VerificationError::Validation(_))));

    // The request is still pending and reviewable
    assert!(h.requests.has_pending(&user.id).await.unwrap());
}

// ============================================================================
// Admin queue and documents
// ============================================================================

#[tokio::test]
async fn test_admin_queue_joins_submitter_and_orders_newest_first() {
    let h = Harness::new().await;
    let admin = h.admin().await;

    let first = h
        .register()
        .execute("Lee", "lee@example.com", "correct horse battery".to_string(), pdf_upload())
        .await
        .unwrap();
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    h.register()
        .execute("Mia", "mia@example.com", "correct horse battery".to_string(), pdf_upload())
        .await
        .unwrap();

    let list = ListRequestsUseCase::new(h.requests.clone());

    let pending = list.execute(StatusFilter::Pending).await.unwrap();
    assert_eq!(pending.len(), 2);
    assert_eq!(pending[0].submitter_email, "mia@example.com");
    assert_eq!(pending[1].submitter_email, "lee@example.com");

    // After review the pending view shrinks; `all` keeps history with the
    // reviewer's name
    let request = h.pending_request_of(&first.id).await;
    h.review().approve(&request.id, &admin, None).await.unwrap();

    assert_eq!(list.execute(StatusFilter::Pending).await.unwrap().len(), 1);
    let all = list.execute(StatusFilter::All).await.unwrap();
    assert_eq!(all.len(), 2);
    let reviewed = all
        .iter()
        .find(|v| v.request.status == VerificationStatus::Approved)
        .unwrap();
    assert_eq!(reviewed.reviewer_name.as_deref(), Some("Root"));
}

#[tokio::test]
async fn test_document_retrieval_resolves_request_to_bytes() {
    let h = Harness::new().await;

    let user = h
        .register()
        .execute("Lee", "lee@example.com", "correct horse battery".to_string(), pdf_upload())
        .await
        .unwrap();
    let request = h.pending_request_of(&user.id).await;

    let get = GetDocumentUseCase::new(h.requests.clone(), h.store.clone());

    let content = get.execute(&request.id).await.unwrap();
    assert_eq!(content.content_type, "application/pdf");
    assert_eq!(content.bytes, b"%PDF-1.4 deed of ownership");

    let missing = get.execute(&VerificationRequestId::new()).await;
    assert!(matches!(missing, Err(VerificationError::RequestNotFound)));
}

#[tokio::test]
async fn test_rejected_request_keeps_its_own_document_after_resubmission() {
    let h = Harness::new().await;
    let admin = h.admin().await;

    let user = h
        .register()
        .execute(
            "Lee",
            "lee@example.com",
            "correct horse battery".to_string(),
            deed_upload("%PDF-1.4 first deed"),
        )
        .await
        .unwrap();
    let first = h.pending_request_of(&user.id).await;

    h.review()
        .reject(&first.id, &admin, "Document is illegible".to_string())
        .await
        .unwrap();

    let resubmit =
        RequestVerificationUseCase::new(h.requests.clone(), h.users.clone(), h.store.clone());
    resubmit
        .execute(&user.id, deed_upload("%PDF-1.4 second deed"))
        .await
        .unwrap();
    let second = h.pending_request_of(&user.id).await;

    // Each request streams the document it was submitted with; the user
    // record pointing at the newest upload must not rewrite history
    let get = GetDocumentUseCase::new(h.requests.clone(), h.store.clone());
    assert_eq!(get.execute(&first.id).await.unwrap().bytes, b"%PDF-1.4 first deed");
    assert_eq!(get.execute(&second.id).await.unwrap().bytes, b"%PDF-1.4 second deed");
}
