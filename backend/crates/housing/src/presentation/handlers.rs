//! HTTP Handlers

use std::sync::Arc;

use auth::AuthConfig;
use auth::domain::repository::UserRepository;
use auth::middleware::AuthUser;
use axum::Json;
use axum::extract::{Extension, Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::id::{BookmarkId, NotificationId, PropertyId};
use platform::mailer::Mailer;

use crate::application::{
    AddBookmarkUseCase, CreatePropertyUseCase, DeletePropertyUseCase, GetPropertyUseCase,
    ListBookmarksUseCase, ListMineUseCase, ListNotificationsUseCase, ListPropertiesUseCase,
    MarkNotificationReadUseCase, PropertyDraft, RemoveBookmarkUseCase, RequestContactUseCase,
    UpdatePropertyUseCase,
};
use crate::domain::repository::{BookmarkRepository, NotificationRepository, PropertyRepository};
use crate::error::HousingError;
use crate::presentation::dto::{
    BookmarkRequest, BookmarkResponse, ContactResponse, NotificationResponse, PropertyQuery,
    PropertyRequest, PropertyResponse,
};

/// Shared handler state; `repo` carries all three housing tables
pub struct HousingAppState<R, U, M> {
    pub repo: Arc<R>,
    pub users: Arc<U>,
    pub mailer: Arc<M>,
    pub config: Arc<AuthConfig>,
}

impl<R, U, M> Clone for HousingAppState<R, U, M> {
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            users: self.users.clone(),
            mailer: self.mailer.clone(),
            config: self.config.clone(),
        }
    }
}

impl PropertyRequest {
    fn into_draft(self) -> PropertyDraft {
        PropertyDraft {
            title: self.title,
            location: self.location,
            price: self.price,
            category: self.category,
            photos: self.photos,
            description: self.description,
            amenities: self.amenities,
            terms: self.terms,
            rented: self.rented,
            duration: self.duration,
        }
    }
}

// ============================================================================
// Properties
// ============================================================================

/// GET /properties
pub async fn list_properties<R, U, M>(
    State(state): State<HousingAppState<R, U, M>>,
    Query(query): Query<PropertyQuery>,
) -> Result<Json<Vec<PropertyResponse>>, HousingError>
where
    R: PropertyRepository + Send + Sync,
    U: Send + Sync,
    M: Send + Sync,
{
    let filter = query.into_filter()?;
    let properties = ListPropertiesUseCase::new(state.repo).execute(&filter).await?;

    Ok(Json(properties.iter().map(PropertyResponse::from).collect()))
}

/// GET /properties/{id}
pub async fn get_property<R, U, M>(
    State(state): State<HousingAppState<R, U, M>>,
    Path(id): Path<uuid::Uuid>,
) -> Result<Json<PropertyResponse>, HousingError>
where
    R: PropertyRepository + Send + Sync,
    U: Send + Sync,
    M: Send + Sync,
{
    let property = GetPropertyUseCase::new(state.repo)
        .execute(&PropertyId::from_uuid(id))
        .await?;

    Ok(Json(PropertyResponse::from(&property)))
}

/// GET /properties/mine
pub async fn list_mine<R, U, M>(
    State(state): State<HousingAppState<R, U, M>>,
    Extension(auth_user): Extension<AuthUser>,
) -> Result<Json<Vec<PropertyResponse>>, HousingError>
where
    R: PropertyRepository + Send + Sync,
    U: UserRepository + Send + Sync,
    M: Send + Sync,
{
    let properties = ListMineUseCase::new(state.repo, state.users)
        .execute(&auth_user)
        .await?;

    Ok(Json(properties.iter().map(PropertyResponse::from).collect()))
}

/// POST /properties
pub async fn create_property<R, U, M>(
    State(state): State<HousingAppState<R, U, M>>,
    Extension(auth_user): Extension<AuthUser>,
    Json(body): Json<PropertyRequest>,
) -> Result<Response, HousingError>
where
    R: PropertyRepository + BookmarkRepository + NotificationRepository + Send + Sync,
    U: UserRepository + Send + Sync,
    M: Mailer + Send + Sync,
{
    let use_case = CreatePropertyUseCase::new(
        state.repo.clone(),
        state.repo.clone(),
        state.repo,
        state.users,
        state.mailer,
    );
    let property = use_case.execute(&auth_user, body.into_draft()).await?;

    Ok((StatusCode::CREATED, Json(PropertyResponse::from(&property))).into_response())
}

/// PUT /properties/{id}
pub async fn update_property<R, U, M>(
    State(state): State<HousingAppState<R, U, M>>,
    Extension(auth_user): Extension<AuthUser>,
    Path(id): Path<uuid::Uuid>,
    Json(body): Json<PropertyRequest>,
) -> Result<Json<PropertyResponse>, HousingError>
where
    R: PropertyRepository + Send + Sync,
    U: UserRepository + Send + Sync,
    M: Send + Sync,
{
    let use_case = UpdatePropertyUseCase::new(state.repo, state.users);
    let property = use_case
        .execute(&auth_user, &PropertyId::from_uuid(id), body.into_draft())
        .await?;

    Ok(Json(PropertyResponse::from(&property)))
}

/// DELETE /properties/{id}
pub async fn delete_property<R, U, M>(
    State(state): State<HousingAppState<R, U, M>>,
    Extension(auth_user): Extension<AuthUser>,
    Path(id): Path<uuid::Uuid>,
) -> Result<Json<serde_json::Value>, HousingError>
where
    R: PropertyRepository + Send + Sync,
    U: UserRepository + Send + Sync,
    M: Send + Sync,
{
    DeletePropertyUseCase::new(state.repo, state.users)
        .execute(&auth_user, &PropertyId::from_uuid(id))
        .await?;

    Ok(Json(serde_json::json!({ "message": "Listing deleted" })))
}

/// POST /properties/{id}/request-contact
pub async fn request_contact<R, U, M>(
    State(state): State<HousingAppState<R, U, M>>,
    Extension(auth_user): Extension<AuthUser>,
    Path(id): Path<uuid::Uuid>,
) -> Result<Json<ContactResponse>, HousingError>
where
    R: PropertyRepository + Send + Sync,
    U: UserRepository + Send + Sync,
    M: Mailer + Send + Sync,
{
    let use_case = RequestContactUseCase::new(state.repo, state.users, state.mailer);
    let disclosure = use_case
        .execute(&auth_user, &PropertyId::from_uuid(id))
        .await?;

    Ok(Json(ContactResponse {
        message: "Contact details sent to your email".to_string(),
        preview_url: disclosure.receipt.preview_url,
    }))
}

// ============================================================================
// Bookmarks
// ============================================================================

/// POST /bookmarks
pub async fn add_bookmark<R, U, M>(
    State(state): State<HousingAppState<R, U, M>>,
    Extension(auth_user): Extension<AuthUser>,
    Json(body): Json<BookmarkRequest>,
) -> Result<Response, HousingError>
where
    R: BookmarkRepository + Send + Sync,
    U: Send + Sync,
    M: Send + Sync,
{
    let bookmark = AddBookmarkUseCase::new(state.repo)
        .execute(&auth_user.user_id, body.item_type, body.item_id)
        .await?;

    Ok((StatusCode::CREATED, Json(BookmarkResponse::from(&bookmark))).into_response())
}

/// GET /bookmarks
pub async fn list_bookmarks<R, U, M>(
    State(state): State<HousingAppState<R, U, M>>,
    Extension(auth_user): Extension<AuthUser>,
) -> Result<Json<Vec<BookmarkResponse>>, HousingError>
where
    R: BookmarkRepository + Send + Sync,
    U: Send + Sync,
    M: Send + Sync,
{
    let bookmarks = ListBookmarksUseCase::new(state.repo)
        .execute(&auth_user.user_id)
        .await?;

    Ok(Json(bookmarks.iter().map(BookmarkResponse::from).collect()))
}

/// DELETE /bookmarks/{id}
pub async fn remove_bookmark<R, U, M>(
    State(state): State<HousingAppState<R, U, M>>,
    Extension(auth_user): Extension<AuthUser>,
    Path(id): Path<uuid::Uuid>,
) -> Result<Json<serde_json::Value>, HousingError>
where
    R: BookmarkRepository + Send + Sync,
    U: Send + Sync,
    M: Send + Sync,
{
    RemoveBookmarkUseCase::new(state.repo)
        .execute(&auth_user.user_id, &BookmarkId::from_uuid(id))
        .await?;

    Ok(Json(serde_json::json!({ "message": "Bookmark removed" })))
}

// ============================================================================
// Notifications
// ============================================================================

/// GET /notifications
pub async fn list_notifications<R, U, M>(
    State(state): State<HousingAppState<R, U, M>>,
    Extension(auth_user): Extension<AuthUser>,
) -> Result<Json<Vec<NotificationResponse>>, HousingError>
where
    R: NotificationRepository + Send + Sync,
    U: Send + Sync,
    M: Send + Sync,
{
    let notifications = ListNotificationsUseCase::new(state.repo)
        .execute(&auth_user.user_id)
        .await?;

    Ok(Json(
        notifications.iter().map(NotificationResponse::from).collect(),
    ))
}

/// PUT /notifications/{id}/read
pub async fn mark_notification_read<R, U, M>(
    State(state): State<HousingAppState<R, U, M>>,
    Extension(auth_user): Extension<AuthUser>,
    Path(id): Path<uuid::Uuid>,
) -> Result<Json<serde_json::Value>, HousingError>
where
    R: NotificationRepository + Send + Sync,
    U: Send + Sync,
    M: Send + Sync,
{
    MarkNotificationReadUseCase::new(state.repo)
        .execute(&auth_user.user_id, &NotificationId::from_uuid(id))
        .await?;

    Ok(Json(serde_json::json!({ "message": "Notification marked as read" })))
}
