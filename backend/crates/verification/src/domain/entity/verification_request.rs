//! Verification Request Entity

use chrono::{DateTime, Utc};
use kernel::id::{UserId, VerificationRequestId};

use crate::domain::value_object::status::VerificationStatus;

/// One verification request in the review queue
#[derive(Debug, Clone, PartialEq)]
pub struct VerificationRequest {
    pub id: VerificationRequestId,
    pub user_id: UserId,
    pub status: VerificationStatus,
    /// Snapshot of the document submitted with this request. The user record
    /// only holds the latest upload; re-submission must not change what a
    /// reviewer of an older request sees.
    pub document_ref: String,
    /// Reviewer notes; required on rejection, optional on approval
    pub admin_notes: Option<String>,
    pub reviewed_by: Option<UserId>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl VerificationRequest {
    /// Open a fresh pending request for a user and the document it carries
    pub fn pending(user_id: UserId, document_ref: String) -> Self {
        let now = Utc::now();
        Self {
            id: VerificationRequestId::new(),
            user_id,
            status: VerificationStatus::Pending,
            document_ref,
            admin_notes: None,
            reviewed_by: None,
            reviewed_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status == VerificationStatus::Pending
    }
}

/// Request joined with submitter (and reviewer) identity for the admin queue
#[derive(Debug, Clone)]
pub struct AdminRequestView {
    pub request: VerificationRequest,
    pub submitter_name: String,
    pub submitter_email: String,
    pub reviewer_name: Option<String>,
}
