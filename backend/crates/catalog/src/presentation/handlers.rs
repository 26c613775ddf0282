//! HTTP Handlers

use std::sync::Arc;

use auth::AuthConfig;
use auth::middleware::AuthUser;
use axum::Json;
use axum::extract::{Extension, Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::id::{PostId, UniversityId, VisaId};

use crate::application::{
    CreatePostUseCase, CreateUniversityUseCase, CreateVisaUseCase, DeletePostUseCase,
    DeleteUniversityUseCase, DeleteVisaUseCase, GetPostUseCase, GetUniversityUseCase,
    GetVisaUseCase, ListPostsUseCase, ListUniversitiesUseCase, ListVisasUseCase,
    UpdatePostUseCase, UpdateUniversityUseCase, UpdateVisaUseCase,
};
use crate::domain::repository::{PostRepository, UniversityRepository, VisaRepository};
use crate::error::CatalogError;
use crate::presentation::dto::{
    PostQuery, PostRequest, PostResponse, UniversityQuery, UniversityRequest, UniversityResponse,
    VisaQuery, VisaRequest, VisaResponse,
};

/// Shared handler state; `repo` carries both catalog tables
pub struct CatalogAppState<R> {
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

impl<R> Clone for CatalogAppState<R> {
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            config: self.config.clone(),
        }
    }
}

// ============================================================================
// Guide posts
// ============================================================================

/// GET /posts
pub async fn list_posts<R>(
    State(state): State<CatalogAppState<R>>,
    Query(query): Query<PostQuery>,
) -> Result<Json<Vec<PostResponse>>, CatalogError>
where
    R: PostRepository + Send + Sync,
{
    let filter = query.into_filter()?;
    let posts = ListPostsUseCase::new(state.repo).execute(&filter).await?;

    Ok(Json(posts.iter().map(PostResponse::from).collect()))
}

/// GET /posts/{id}
pub async fn get_post<R>(
    State(state): State<CatalogAppState<R>>,
    Path(id): Path<uuid::Uuid>,
) -> Result<Json<PostResponse>, CatalogError>
where
    R: PostRepository + Send + Sync,
{
    let post = GetPostUseCase::new(state.repo)
        .execute(&PostId::from_uuid(id))
        .await?;

    Ok(Json(PostResponse::from(&post)))
}

/// POST /posts (admin)
pub async fn create_post<R>(
    State(state): State<CatalogAppState<R>>,
    Extension(auth_user): Extension<AuthUser>,
    Json(body): Json<PostRequest>,
) -> Result<Response, CatalogError>
where
    R: PostRepository + Send + Sync,
{
    let post = CreatePostUseCase::new(state.repo)
        .execute(&auth_user.user_id, body.into_draft())
        .await?;

    Ok((StatusCode::CREATED, Json(PostResponse::from(&post))).into_response())
}

/// PUT /posts/{id} (admin)
pub async fn update_post<R>(
    State(state): State<CatalogAppState<R>>,
    Path(id): Path<uuid::Uuid>,
    Json(body): Json<PostRequest>,
) -> Result<Json<PostResponse>, CatalogError>
where
    R: PostRepository + Send + Sync,
{
    let post = UpdatePostUseCase::new(state.repo)
        .execute(&PostId::from_uuid(id), body.into_draft())
        .await?;

    Ok(Json(PostResponse::from(&post)))
}

/// DELETE /posts/{id} (admin)
pub async fn delete_post<R>(
    State(state): State<CatalogAppState<R>>,
    Path(id): Path<uuid::Uuid>,
) -> Result<Json<serde_json::Value>, CatalogError>
where
    R: PostRepository + Send + Sync,
{
    DeletePostUseCase::new(state.repo)
        .execute(&PostId::from_uuid(id))
        .await?;

    Ok(Json(serde_json::json!({ "message": "Post deleted" })))
}

// ============================================================================
// Universities
// ============================================================================

/// GET /universities
pub async fn list_universities<R>(
    State(state): State<CatalogAppState<R>>,
    Query(query): Query<UniversityQuery>,
) -> Result<Json<Vec<UniversityResponse>>, CatalogError>
where
    R: UniversityRepository + Send + Sync,
{
    let universities = ListUniversitiesUseCase::new(state.repo)
        .execute(&query.into_filter())
        .await?;

    Ok(Json(
        universities.iter().map(UniversityResponse::from).collect(),
    ))
}

/// GET /universities/{id}
pub async fn get_university<R>(
    State(state): State<CatalogAppState<R>>,
    Path(id): Path<uuid::Uuid>,
) -> Result<Json<UniversityResponse>, CatalogError>
where
    R: UniversityRepository + Send + Sync,
{
    let university = GetUniversityUseCase::new(state.repo)
        .execute(&UniversityId::from_uuid(id))
        .await?;

    Ok(Json(UniversityResponse::from(&university)))
}

/// POST /universities (admin)
pub async fn create_university<R>(
    State(state): State<CatalogAppState<R>>,
    Json(body): Json<UniversityRequest>,
) -> Result<Response, CatalogError>
where
    R: UniversityRepository + Send + Sync,
{
    let university = CreateUniversityUseCase::new(state.repo)
        .execute(body.into_draft())
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(UniversityResponse::from(&university)),
    )
        .into_response())
}

/// PUT /universities/{id} (admin)
pub async fn update_university<R>(
    State(state): State<CatalogAppState<R>>,
    Path(id): Path<uuid::Uuid>,
    Json(body): Json<UniversityRequest>,
) -> Result<Json<UniversityResponse>, CatalogError>
where
    R: UniversityRepository + Send + Sync,
{
    let university = UpdateUniversityUseCase::new(state.repo)
        .execute(&UniversityId::from_uuid(id), body.into_draft())
        .await?;

    Ok(Json(UniversityResponse::from(&university)))
}

/// DELETE /universities/{id} (admin)
pub async fn delete_university<R>(
    State(state): State<CatalogAppState<R>>,
    Path(id): Path<uuid::Uuid>,
) -> Result<Json<serde_json::Value>, CatalogError>
where
    R: UniversityRepository + Send + Sync,
{
    DeleteUniversityUseCase::new(state.repo)
        .execute(&UniversityId::from_uuid(id))
        .await?;

    Ok(Json(serde_json::json!({ "message": "University deleted" })))
}

// ============================================================================
// Visa directory
// ============================================================================

/// GET /visas
pub async fn list_visas<R>(
    State(state): State<CatalogAppState<R>>,
    Query(query): Query<VisaQuery>,
) -> Result<Json<Vec<VisaResponse>>, CatalogError>
where
    R: VisaRepository + Send + Sync,
{
    let filter = query.into_filter()?;
    let visas = ListVisasUseCase::new(state.repo).execute(&filter).await?;

    Ok(Json(visas.iter().map(VisaResponse::from).collect()))
}

/// GET /visas/{id}
pub async fn get_visa<R>(
    State(state): State<CatalogAppState<R>>,
    Path(id): Path<uuid::Uuid>,
) -> Result<Json<VisaResponse>, CatalogError>
where
    R: VisaRepository + Send + Sync,
{
    let visa = GetVisaUseCase::new(state.repo)
        .execute(&VisaId::from_uuid(id))
        .await?;

    Ok(Json(VisaResponse::from(&visa)))
}

/// POST /visas (admin)
pub async fn create_visa<R>(
    State(state): State<CatalogAppState<R>>,
    Json(body): Json<VisaRequest>,
) -> Result<Response, CatalogError>
where
    R: VisaRepository + Send + Sync,
{
    let visa = CreateVisaUseCase::new(state.repo)
        .execute(body.into_draft())
        .await?;

    Ok((StatusCode::CREATED, Json(VisaResponse::from(&visa))).into_response())
}

/// PUT /visas/{id} (admin)
pub async fn update_visa<R>(
    State(state): State<CatalogAppState<R>>,
    Path(id): Path<uuid::Uuid>,
    Json(body): Json<VisaRequest>,
) -> Result<Json<VisaResponse>, CatalogError>
where
    R: VisaRepository + Send + Sync,
{
    let visa = UpdateVisaUseCase::new(state.repo)
        .execute(&VisaId::from_uuid(id), body.into_draft())
        .await?;

    Ok(Json(VisaResponse::from(&visa)))
}

/// DELETE /visas/{id} (admin)
pub async fn delete_visa<R>(
    State(state): State<CatalogAppState<R>>,
    Path(id): Path<uuid::Uuid>,
) -> Result<Json<serde_json::Value>, CatalogError>
where
    R: VisaRepository + Send + Sync,
{
    DeleteVisaUseCase::new(state.repo)
        .execute(&VisaId::from_uuid(id))
        .await?;

    Ok(Json(serde_json::json!({ "message": "Visa information deleted" })))
}
