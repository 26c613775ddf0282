//! Repository Traits

use chrono::{DateTime, Utc};
use kernel::id::{UserId, VerificationRequestId};

use crate::domain::entity::verification_request::{AdminRequestView, VerificationRequest};
use crate::domain::value_object::status::{StatusFilter, VerificationStatus};
use crate::error::VerificationResult;

/// Outcome of a review transition attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionOutcome {
    /// The request moved out of pending
    Applied,
    /// The request exists but was not pending (lost the race or re-reviewed)
    NotPending,
    /// No such request
    NotFound,
}

/// Verification request repository trait
#[trait_variant::make(VerificationRepository: Send)]
pub trait LocalVerificationRepository {
    /// Insert a fresh pending request
    ///
    /// Fails with `PendingRequestExists` when the user already has one
    /// (backed by a partial unique index on the store).
    async fn create(&self, request: &VerificationRequest) -> VerificationResult<()>;

    /// Find a request by ID
    async fn find_by_id(
        &self,
        id: &VerificationRequestId,
    ) -> VerificationResult<Option<VerificationRequest>>;

    /// Whether the user currently has a pending request
    async fn has_pending(&self, user_id: &UserId) -> VerificationResult<bool>;

    /// Admin queue, newest first, joined with submitter/reviewer identity
    async fn list(&self, filter: StatusFilter) -> VerificationResult<Vec<AdminRequestView>>;

    /// Atomically move a pending request to a terminal status
    ///
    /// Compare-and-swap on `status = pending`; concurrent reviewers cannot
    /// both win.
    async fn transition(
        &self,
        id: &VerificationRequestId,
        to: VerificationStatus,
        admin_notes: Option<&str>,
        reviewed_by: &UserId,
        reviewed_at: DateTime<Utc>,
    ) -> VerificationResult<TransitionOutcome>;
}
