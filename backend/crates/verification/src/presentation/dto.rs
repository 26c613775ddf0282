//! Data Transfer Objects

use serde::{Deserialize, Serialize};

use crate::domain::entity::verification_request::AdminRequestView;
use crate::domain::value_object::status::VerificationStatus;

/// Landowner login request body
#[derive(Debug, Deserialize)]
pub struct LandownerLoginRequest {
    pub email: String,
    pub password: String,
}

/// Approve/reject request body
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRequestBody {
    pub admin_notes: Option<String>,
}

/// Admin list query
#[derive(Debug, Deserialize, Default)]
pub struct StatusQuery {
    pub status: Option<String>,
}

/// Submitter identity embedded in the admin queue
#[derive(Debug, Serialize)]
pub struct SubmitterResponse {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// One entry of the admin review queue
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminRequestResponse {
    pub id: String,
    pub user: SubmitterResponse,
    pub status: VerificationStatus,
    pub admin_notes: Option<String>,
    pub reviewed_by: Option<String>,
    pub reviewed_at: Option<chrono::DateTime<chrono::Utc>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<&AdminRequestView> for AdminRequestResponse {
    fn from(view: &AdminRequestView) -> Self {
        Self {
            id: view.request.id.to_string(),
            user: SubmitterResponse {
                id: view.request.user_id.to_string(),
                name: view.submitter_name.clone(),
                email: view.submitter_email.clone(),
            },
            status: view.request.status,
            admin_notes: view.request.admin_notes.clone(),
            reviewed_by: view.reviewer_name.clone(),
            reviewed_at: view.request.reviewed_at,
            created_at: view.request.created_at,
        }
    }
}
