//! Housing Router

use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};
use std::sync::Arc;

use auth::application::config::AuthConfig;
use auth::domain::repository::UserRepository;
use auth::infra::postgres::PgUserRepository;
use auth::presentation::middleware::{AuthGate, require_auth};
use platform::mailer::Mailer;

use crate::domain::repository::{BookmarkRepository, NotificationRepository, PropertyRepository};
use crate::infra::postgres::PgHousingRepository;
use crate::presentation::handlers::{self, HousingAppState};

/// Create the housing router with the PostgreSQL repositories
pub fn housing_router<M>(
    repo: PgHousingRepository,
    users: PgUserRepository,
    mailer: M,
    config: AuthConfig,
) -> Router
where
    M: Mailer + Send + Sync + 'static,
{
    housing_router_generic(repo, users, mailer, config)
}

/// Create a generic housing router for any repository implementation
pub fn housing_router_generic<R, U, M>(repo: R, users: U, mailer: M, config: AuthConfig) -> Router
where
    R: PropertyRepository + BookmarkRepository + NotificationRepository + Send + Sync + 'static,
    U: UserRepository + Send + Sync + 'static,
    M: Mailer + Send + Sync + 'static,
{
    let config = Arc::new(config);
    let state = HousingAppState {
        repo: Arc::new(repo),
        users: Arc::new(users),
        mailer: Arc::new(mailer),
        config: config.clone(),
    };
    let gate = AuthGate::new(config);

    let public = Router::new()
        .route("/properties", get(handlers::list_properties::<R, U, M>))
        .route("/properties/{id}", get(handlers::get_property::<R, U, M>));

    let protected = Router::new()
        .route("/properties", post(handlers::create_property::<R, U, M>))
        .route("/properties/mine", get(handlers::list_mine::<R, U, M>))
        .route(
            "/properties/{id}",
            put(handlers::update_property::<R, U, M>)
                .delete(handlers::delete_property::<R, U, M>),
        )
        .route(
            "/properties/{id}/request-contact",
            post(handlers::request_contact::<R, U, M>),
        )
        .route(
            "/bookmarks",
            get(handlers::list_bookmarks::<R, U, M>).post(handlers::add_bookmark::<R, U, M>),
        )
        .route("/bookmarks/{id}", delete(handlers::remove_bookmark::<R, U, M>))
        .route("/notifications", get(handlers::list_notifications::<R, U, M>))
        .route(
            "/notifications/{id}/read",
            put(handlers::mark_notification_read::<R, U, M>),
        )
        .route_layer(middleware::from_fn_with_state(gate, require_auth));

    public.merge(protected).with_state(state)
}
