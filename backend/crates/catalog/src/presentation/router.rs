//! Catalog Router

use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use std::sync::Arc;

use auth::application::config::AuthConfig;
use auth::presentation::middleware::{AuthGate, require_admin};

use crate::domain::repository::{PostRepository, UniversityRepository, VisaRepository};
use crate::infra::postgres::PgCatalogRepository;
use crate::presentation::handlers::{self, CatalogAppState};

/// Create the catalog router with the PostgreSQL repository
pub fn catalog_router(repo: PgCatalogRepository, config: AuthConfig) -> Router {
    catalog_router_generic(repo, config)
}

/// Create a generic catalog router for any repository implementation
pub fn catalog_router_generic<R>(repo: R, config: AuthConfig) -> Router
where
    R: PostRepository + UniversityRepository + VisaRepository + Send + Sync + 'static,
{
    let config = Arc::new(config);
    let state = CatalogAppState {
        repo: Arc::new(repo),
        config: config.clone(),
    };
    let gate = AuthGate::new(config);

    let public = Router::new()
        .route("/posts", get(handlers::list_posts::<R>))
        .route("/posts/{id}", get(handlers::get_post::<R>))
        .route("/universities", get(handlers::list_universities::<R>))
        .route("/universities/{id}", get(handlers::get_university::<R>))
        .route("/visas", get(handlers::list_visas::<R>))
        .route("/visas/{id}", get(handlers::get_visa::<R>));

    let admin = Router::new()
        .route("/posts", post(handlers::create_post::<R>))
        .route(
            "/posts/{id}",
            put(handlers::update_post::<R>).delete(handlers::delete_post::<R>),
        )
        .route("/universities", post(handlers::create_university::<R>))
        .route(
            "/universities/{id}",
            put(handlers::update_university::<R>).delete(handlers::delete_university::<R>),
        )
        .route("/visas", post(handlers::create_visa::<R>))
        .route(
            "/visas/{id}",
            put(handlers::update_visa::<R>).delete(handlers::delete_visa::<R>),
        )
        .route_layer(middleware::from_fn_with_state(gate, require_admin));

    public.merge(admin).with_state(state)
}
