//! PostgreSQL Repository Implementation
//!
//! The `verification_requests` table carries a partial unique index on
//! `(user_id) WHERE status = 'pending'`; insert races surface as 23505.
//! Review transitions are a single conditional UPDATE.

use chrono::{DateTime, Utc};
use kernel::id::{UserId, VerificationRequestId};
use sqlx::PgPool;

use crate::domain::entity::verification_request::{AdminRequestView, VerificationRequest};
use crate::domain::repository::{TransitionOutcome, VerificationRepository};
use crate::domain::value_object::status::{StatusFilter, VerificationStatus};
use crate::error::{VerificationError, VerificationResult};

/// PostgreSQL-backed verification repository
#[derive(Clone)]
pub struct PgVerificationRepository {
    pool: PgPool,
}

impl PgVerificationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl VerificationRepository for PgVerificationRepository {
    async fn create(&self, request: &VerificationRequest) -> VerificationResult<()> {
        sqlx::query(
            r#"
            INSERT INTO verification_requests (
                id, user_id, status, document_ref, admin_notes, reviewed_by,
                reviewed_at, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(request.id.as_uuid())
        .bind(request.user_id.as_uuid())
        .bind(request.status.as_str())
        .bind(&request.document_ref)
        .bind(&request.admin_notes)
        .bind(request.reviewed_by.as_ref().map(|id| *id.as_uuid()))
        .bind(request.reviewed_at)
        .bind(request.created_at)
        .bind(request.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.code().as_deref() == Some("23505") => {
                VerificationError::PendingRequestExists
            }
            _ => VerificationError::Database(e),
        })?;

        Ok(())
    }

    async fn find_by_id(
        &self,
        id: &VerificationRequestId,
    ) -> VerificationResult<Option<VerificationRequest>> {
        let row = sqlx::query_as::<_, RequestRow>(
            r#"
            SELECT id, user_id, status, document_ref, admin_notes, reviewed_by,
                   reviewed_at, created_at, updated_at
            FROM verification_requests
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_request()).transpose()
    }

    async fn has_pending(&self, user_id: &UserId) -> VerificationResult<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM verification_requests \
             WHERE user_id = $1 AND status = 'pending')",
        )
        .bind(user_id.as_uuid())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn list(&self, filter: StatusFilter) -> VerificationResult<Vec<AdminRequestView>> {
        let where_clause = match filter {
            StatusFilter::Pending => "WHERE r.status = 'pending'",
            StatusFilter::All => "",
        };

        let rows = sqlx::query_as::<_, AdminViewRow>(&format!(
            r#"
            SELECT r.id, r.user_id, r.status, r.document_ref, r.admin_notes,
                   r.reviewed_by, r.reviewed_at, r.created_at, r.updated_at,
                   u.name AS submitter_name,
                   u.email AS submitter_email,
                   reviewer.name AS reviewer_name
            FROM verification_requests r
            JOIN users u ON u.id = r.user_id
            LEFT JOIN users reviewer ON reviewer.id = r.reviewed_by
            {where_clause}
            ORDER BY r.created_at DESC
            "#
        ))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(|r| r.into_view()).collect()
    }

    async fn transition(
        &self,
        id: &VerificationRequestId,
        to: VerificationStatus,
        admin_notes: Option<&str>,
        reviewed_by: &UserId,
        reviewed_at: DateTime<Utc>,
    ) -> VerificationResult<TransitionOutcome> {
        let updated = sqlx::query(
            r#"
            UPDATE verification_requests
            SET status = $2,
                admin_notes = $3,
                reviewed_by = $4,
                reviewed_at = $5,
                updated_at = $5
            WHERE id = $1 AND status = 'pending'
            "#,
        )
        .bind(id.as_uuid())
        .bind(to.as_str())
        .bind(admin_notes)
        .bind(reviewed_by.as_uuid())
        .bind(reviewed_at)
        .execute(&self.pool)
        .await?
        .rows_affected();

        if updated == 1 {
            return Ok(TransitionOutcome::Applied);
        }

        // Zero rows: distinguish missing from already-reviewed
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM verification_requests WHERE id = $1)")
                .bind(id.as_uuid())
                .fetch_one(&self.pool)
                .await?;

        Ok(if exists {
            TransitionOutcome::NotPending
        } else {
            TransitionOutcome::NotFound
        })
    }
}

#[derive(sqlx::FromRow)]
struct RequestRow {
    id: uuid::Uuid,
    user_id: uuid::Uuid,
    status: String,
    document_ref: String,
    admin_notes: Option<String>,
    reviewed_by: Option<uuid::Uuid>,
    reviewed_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl RequestRow {
    fn into_request(self) -> VerificationResult<VerificationRequest> {
        let status = VerificationStatus::parse(&self.status)
            .map_err(|e| VerificationError::Internal(e.to_string()))?;

        Ok(VerificationRequest {
            id: VerificationRequestId::from_uuid(self.id),
            user_id: UserId::from_uuid(self.user_id),
            status,
            document_ref: self.document_ref,
            admin_notes: self.admin_notes,
            reviewed_by: self.reviewed_by.map(UserId::from_uuid),
            reviewed_at: self.reviewed_at,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct AdminViewRow {
    id: uuid::Uuid,
    user_id: uuid::Uuid,
    status: String,
    document_ref: String,
    admin_notes: Option<String>,
    reviewed_by: Option<uuid::Uuid>,
    reviewed_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    submitter_name: String,
    submitter_email: String,
    reviewer_name: Option<String>,
}

impl AdminViewRow {
    fn into_view(self) -> VerificationResult<AdminRequestView> {
        let request = RequestRow {
            id: self.id,
            user_id: self.user_id,
            status: self.status,
            document_ref: self.document_ref,
            admin_notes: self.admin_notes,
            reviewed_by: self.reviewed_by,
            reviewed_at: self.reviewed_at,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
        .into_request()?;

        Ok(AdminRequestView {
            request,
            submitter_name: self.submitter_name,
            submitter_email: self.submitter_email,
            reviewer_name: self.reviewer_name,
        })
    }
}
