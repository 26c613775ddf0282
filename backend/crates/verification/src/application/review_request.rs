//! Review Use Case (Approve / Reject)
//!
//! The transition out of `pending` is a compare-and-swap on the store;
//! whichever reviewer loses the race gets `AlreadyReviewed`. The outcome
//! email is best-effort and sent after the state is durable.

use std::sync::Arc;

use auth::domain::repository::UserRepository;
use chrono::Utc;
use kernel::id::{UserId, VerificationRequestId};
use platform::mailer::{Mailer, send_best_effort};

use crate::application::emails;
use crate::domain::repository::{TransitionOutcome, VerificationRepository};
use crate::domain::value_object::status::VerificationStatus;
use crate::error::{VerificationError, VerificationResult};

pub struct ReviewRequestUseCase<R, U, M> {
    requests: Arc<R>,
    users: Arc<U>,
    mailer: Arc<M>,
}

impl<R, U, M> ReviewRequestUseCase<R, U, M>
where
    R: VerificationRepository,
    U: UserRepository,
    M: Mailer + Sync,
{
    pub fn new(requests: Arc<R>, users: Arc<U>, mailer: Arc<M>) -> Self {
        Self {
            requests,
            users,
            mailer,
        }
    }

    /// Approve a pending request and grant the verified-landowner flag
    pub async fn approve(
        &self,
        id: &VerificationRequestId,
        reviewer: &UserId,
        admin_notes: Option<String>,
    ) -> VerificationResult<()> {
        let request = self.transition(id, VerificationStatus::Approved, reviewer, admin_notes.as_deref())
            .await?;

        let mut user = self
            .users
            .find_by_id(&request.user_id)
            .await?
            .ok_or(VerificationError::UserNotFound)?;
        user.mark_verified();
        self.users.update(&user).await?;

        tracing::info!(
            request_id = %id,
            user_id = %user.id,
            reviewer = %reviewer,
            "Verification request approved"
        );

        send_best_effort(
            self.mailer.as_ref(),
            emails::approval_email(user.email.as_str(), &user.name),
        )
        .await;

        Ok(())
    }

    /// Reject a pending request; the notes travel to the landowner
    pub async fn reject(
        &self,
        id: &VerificationRequestId,
        reviewer: &UserId,
        admin_notes: String,
    ) -> VerificationResult<()> {
        let notes = admin_notes.trim();
        if notes.is_empty() {
            return Err(VerificationError::Validation(
                "Rejection requires reviewer notes".to_string(),
            ));
        }

        let request = self
            .transition(id, VerificationStatus::Rejected, reviewer, Some(notes))
            .await?;

        let user = self
            .users
            .find_by_id(&request.user_id)
            .await?
            .ok_or(VerificationError::UserNotFound)?;

        tracing::info!(
            request_id = %id,
            user_id = %user.id,
            reviewer = %reviewer,
            "Verification request rejected"
        );

        send_best_effort(
            self.mailer.as_ref(),
            emails::rejection_email(user.email.as_str(), &user.name, notes),
        )
        .await;

        Ok(())
    }

    async fn transition(
        &self,
        id: &VerificationRequestId,
        to: VerificationStatus,
        reviewer: &UserId,
        notes: Option<&str>,
    ) -> VerificationResult<crate::domain::entity::verification_request::VerificationRequest> {
        let request = self
            .requests
            .find_by_id(id)
            .await?
            .ok_or(VerificationError::RequestNotFound)?;

        match self
            .requests
            .transition(id, to, notes, reviewer, Utc::now())
            .await?
        {
            TransitionOutcome::Applied => Ok(request),
            TransitionOutcome::NotPending => Err(VerificationError::AlreadyReviewed),
            TransitionOutcome::NotFound => Err(VerificationError::RequestNotFound),
        }
    }
}
