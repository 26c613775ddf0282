//! HTTP Handlers

use std::sync::Arc;

use axum::Json;
use axum::extract::{Extension, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::application::config::AuthConfig;
use crate::application::login::LoginUseCase;
use crate::application::profile::{
    ContactChanges, GetProfileUseCase, ProfileChanges, UpdateContactUseCase, UpdateProfileUseCase,
};
use crate::application::register::RegisterUseCase;
use crate::domain::repository::UserRepository;
use crate::error::AuthError;
use crate::presentation::dto::{
    AuthResponse, LoginRequest, RegisterRequest, UpdateContactRequest, UpdateProfileRequest,
    UserResponse,
};
use crate::presentation::middleware::AuthUser;

/// Shared handler state
#[derive(Clone)]
pub struct AuthAppState<R> {
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

/// POST /auth/register
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    Json(body): Json<RegisterRequest>,
) -> Result<Response, AuthError>
where
    R: UserRepository + Send + Sync,
{
    let use_case = RegisterUseCase::new(state.repo.clone(), state.config.clone());
    let user = use_case.execute(&body.name, &body.email, body.password).await?;

    // Registration logs the student straight in
    let token = LoginUseCase::new(state.repo, state.config.clone()).issue_token(&user);
    let cookie = state.config.cookie_config().build_set_cookie(&token);

    Ok((
        StatusCode::CREATED,
        [(header::SET_COOKIE, cookie)],
        Json(AuthResponse {
            user: UserResponse::from(&user),
            token: Some(token),
        }),
    )
        .into_response())
}

/// POST /auth/login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    Json(body): Json<LoginRequest>,
) -> Result<Response, AuthError>
where
    R: UserRepository + Send + Sync,
{
    let use_case = LoginUseCase::new(state.repo, state.config.clone());
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

/// POST /auth/logout
pub async fn logout<R>(State(state): State<AuthAppState<R>>) -> Response {
    let cookie = state.config.cookie_config().build_delete_cookie();

    (
        [(header::SET_COOKIE, cookie)],
        Json(serde_json::json!({ "message": "Logged out" })),
    )
        .into_response()
}

/// GET /me
pub async fn me<R>(
    State(state): State<AuthAppState<R>>,
    Extension(auth_user): Extension<AuthUser>,
) -> Result<Json<UserResponse>, AuthError>
where
    R: UserRepository + Send + Sync,
{
    let user = GetProfileUseCase::new(state.repo)
        .execute(&auth_user.user_id)
        .await?;

    Ok(Json(UserResponse::from(&user)))
}

/// PUT /me
pub async fn update_me<R>(
    State(state): State<AuthAppState<R>>,
    Extension(auth_user): Extension<AuthUser>,
    Json(body): Json<UpdateProfileRequest>,
) -> Result<Json<UserResponse>, AuthError>
where
    R: UserRepository + Send + Sync,
{
    let use_case = UpdateProfileUseCase::new(state.repo, state.config.clone());
    let user = use_case
        .execute(
            &auth_user.user_id,
            ProfileChanges {
                name: body.name,
                password: body.password,
            },
        )
        .await?;

    Ok(Json(UserResponse::from(&user)))
}

/// PUT /me/contact
pub async fn update_contact<R>(
    State(state): State<AuthAppState<R>>,
    Extension(auth_user): Extension<AuthUser>,
    Json(body): Json<UpdateContactRequest>,
) -> Result<Json<UserResponse>, AuthError>
where
    R: UserRepository + Send + Sync,
{
    let use_case = UpdateContactUseCase::new(state.repo);
    let user = use_case
        .execute(
            &auth_user.user_id,
            ContactChanges {
                phone: body.phone,
                whatsapp_ref: body.whatsapp_url,
                social_ref: body.social_url,
            },
        )
        .await?;

    Ok(Json(UserResponse::from(&user)))
}
