//! HTTP Handlers
//!
//! Registration and re-submission arrive as multipart forms (the ownership
//! document rides along with the fields); everything else is JSON.

use std::sync::Arc;

use auth::AuthConfig;
use auth::domain::repository::UserRepository;
use auth::middleware::AuthUser;
use auth::models::{AuthResponse, UserResponse};
use axum::Json;
use axum::extract::{Extension, Multipart, Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use kernel::id::VerificationRequestId;
use platform::mailer::Mailer;
use platform::storage::DocumentStore;

use crate::application::{
    DocumentUpload, GetDocumentUseCase, LandownerLoginUseCase, ListRequestsUseCase,
    RegisterLandownerUseCase, RequestVerificationUseCase, ReviewRequestUseCase,
};
use crate::domain::repository::VerificationRepository;
use crate::domain::value_object::status::StatusFilter;
use crate::error::{VerificationError, VerificationResult};
use crate::presentation::dto::{
    AdminRequestResponse, LandownerLoginRequest, ReviewRequestBody, StatusQuery,
};

/// Shared handler state
pub struct VerificationAppState<R, U, M> {
    pub requests: Arc<R>,
    pub users: Arc<U>,
    pub store: DocumentStore,
    pub mailer: Arc<M>,
    pub config: Arc<AuthConfig>,
}

impl<R, U, M> Clone for VerificationAppState<R, U, M> {
    fn clone(&self) -> Self {
        Self {
            requests: self.requests.clone(),
            users: self.users.clone(),
            store: self.store.clone(),
            mailer: self.mailer.clone(),
            config: self.config.clone(),
        }
    }
}

/// Registration form fields
struct RegistrationForm {
    name: String,
    email: String,
    password: String,
    document: Option<DocumentUpload>,
}

async fn read_registration_form(mut multipart: Multipart) -> VerificationResult<RegistrationForm> {
    let mut form = RegistrationForm {
        name: String::new(),
        email: String::new(),
        password: String::new(),
        document: None,
    };

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| VerificationError::Validation(e.to_string()))?
    {
        match field.name().unwrap_or_default() {
            "name" => {
                form.name = field
                    .text()
                    .await
                    .map_err(|e| VerificationError::Validation(e.to_string()))?;
            }
            "email" => {
                form.email = field
                    .text()
                    .await
                    .map_err(|e| VerificationError::Validation(e.to_string()))?;
            }
            "password" => {
                form.password = field
                    .text()
                    .await
                    .map_err(|e| VerificationError::Validation(e.to_string()))?;
            }
            "document" => {
                form.document = Some(read_document_field(field).await?);
            }
            _ => {}
        }
    }

    Ok(form)
}

async fn read_document_field(
    field: axum::extract::multipart::Field<'_>,
) -> VerificationResult<DocumentUpload> {
    let content_type = field.content_type().unwrap_or_default().to_string();
    let bytes = field
        .bytes()
        .await
        .map_err(|e| VerificationError::Validation(e.to_string()))?;

    Ok(DocumentUpload {
        bytes: bytes.to_vec(),
        content_type,
    })
}

/// POST /landowner/register (multipart)
pub async fn landowner_register<R, U, M>(
    State(state): State<VerificationAppState<R, U, M>>,
    multipart: Multipart,
) -> Result<Response, VerificationError>
where
    R: VerificationRepository + Send + Sync,
    U: UserRepository + Send + Sync,
    M: Send + Sync,
{
    let form = read_registration_form(multipart).await?;

    let use_case = RegisterLandownerUseCase::new(
        state.requests,
        state.users,
        state.store,
        state.config,
    );
    let user = use_case
        .execute(&form.name, &form.email, form.password, form.document)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "message": "Registration received; your account is pending verification",
            "user": UserResponse::from(&user),
        })),
    )
        .into_response())
}

/// POST /landowner/login
pub async fn landowner_login<R, U, M>(
    State(state): State<VerificationAppState<R, U, M>>,
    Json(body): Json<LandownerLoginRequest>,
) -> Result<Response, VerificationError>
where
    U: UserRepository + Send + Sync,
    R: Send + Sync,
    M: Send + Sync,
{
    let use_case = LandownerLoginUseCase::new(state.users, state.config.clone());
    let outcome = use_case.execute(&body.email, body.password).await?;

    let cookie = state
        .config
        .cookie_config()
        .build_set_cookie(&outcome.token);

    Ok((
        [(header::SET_COOKIE, cookie)],
        Json(AuthResponse {
            user: UserResponse::from(&outcome.user),
            token: Some(outcome.token),
        }),
    )
        .into_response())
}

/// POST /landowner/request-verification (multipart)
pub async fn request_verification<R, U, M>(
    State(state): State<VerificationAppState<R, U, M>>,
    Extension(auth_user): Extension<AuthUser>,
    mut multipart: Multipart,
) -> Result<Response, VerificationError>
where
    R: VerificationRepository + Send + Sync,
    U: UserRepository + Send + Sync,
    M: Send + Sync,
{
    let mut document = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| VerificationError::Validation(e.to_string()))?
    {
        if field.name() == Some("document") {
            document = Some(read_document_field(field).await?);
        }
    }

    let use_case = RequestVerificationUseCase::new(state.requests, state.users, state.store);
    let user = use_case.execute(&auth_user.user_id, document).await?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "message": "Verification request submitted",
            "user": UserResponse::from(&user),
        })),
    )
        .into_response())
}

/// GET /admin/verification-requests?status=pending|all
pub async fn list_requests<R, U, M>(
    State(state): State<VerificationAppState<R, U, M>>,
    Query(query): Query<StatusQuery>,
) -> Result<Json<Vec<AdminRequestResponse>>, VerificationError>
where
    R: VerificationRepository + Send + Sync,
    U: Send + Sync,
    M: Send + Sync,
{
    let filter = StatusFilter::from_query(query.status.as_deref());
    let views = ListRequestsUseCase::new(state.requests).execute(filter).await?;

    Ok(Json(views.iter().map(AdminRequestResponse::from).collect()))
}

/// GET /admin/verification-documents/{requestId}
pub async fn get_document<R, U, M>(
    State(state): State<VerificationAppState<R, U, M>>,
    Path(request_id): Path<uuid::Uuid>,
) -> Result<Response, VerificationError>
where
    R: VerificationRepository + Send + Sync,
    U: Send + Sync,
    M: Send + Sync,
{
    let use_case = GetDocumentUseCase::new(state.requests, state.store);
    let content = use_case
        .execute(&VerificationRequestId::from_uuid(request_id))
        .await?;

    Ok((
        [(header::CONTENT_TYPE, content.content_type)],
        content.bytes,
    )
        .into_response())
}

/// POST /admin/verification-requests/{id}/approve
pub async fn approve_request<R, U, M>(
    State(state): State<VerificationAppState<R, U, M>>,
    Extension(auth_user): Extension<AuthUser>,
    Path(request_id): Path<uuid::Uuid>,
    body: Option<Json<ReviewRequestBody>>,
) -> Result<Json<serde_json::Value>, VerificationError>
where
    R: VerificationRepository + Send + Sync,
    U: UserRepository + Send + Sync,
    M: Mailer + Send + Sync,
{
    let notes = body.and_then(|Json(b)| b.admin_notes);

    let use_case = ReviewRequestUseCase::new(state.requests, state.users, state.mailer);
    use_case
        .approve(
            &VerificationRequestId::from_uuid(request_id),
            &auth_user.user_id,
            notes,
        )
        .await?;

    Ok(Json(serde_json::json!({ "message": "Request approved" })))
}

/// POST /admin/verification-requests/{id}/reject
pub async fn reject_request<R, U, M>(
    State(state): State<VerificationAppState<R, U, M>>,
    Extension(auth_user): Extension<AuthUser>,
    Path(request_id): Path<uuid::Uuid>,
    body: Option<Json<ReviewRequestBody>>,
) -> Result<Json<serde_json::Value>, VerificationError>
where
    R: VerificationRepository + Send + Sync,
    U: UserRepository + Send + Sync,
    M: Mailer + Send + Sync,
{
    let notes = body.and_then(|Json(b)| b.admin_notes).unwrap_or_default();

    let use_case = ReviewRequestUseCase::new(state.requests, state.users, state.mailer);
    use_case
        .reject(
            &VerificationRequestId::from_uuid(request_id),
            &auth_user.user_id,
            notes,
        )
        .await?;

    Ok(Json(serde_json::json!({ "message": "Request rejected" })))
}
