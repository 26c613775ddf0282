//! Verification Routers
//!
//! Two routers with different trust levels: the landowner-facing flow and
//! the admin review queue. Both are nested under `/api` by the binary.

use std::sync::Arc;

use auth::AuthConfig;
use auth::domain::repository::UserRepository;
use auth::middleware::{AuthGate, require_admin, require_auth};
use axum::{
    Router, middleware,
    routing::{get, post},
};
use platform::mailer::Mailer;
use platform::storage::DocumentStore;

use crate::domain::repository::VerificationRepository;
use crate::presentation::handlers::{self, VerificationAppState};

/// Landowner-facing routes: register, login, re-submission
pub fn landowner_router<R, U, M>(
    requests: Arc<R>,
    users: Arc<U>,
    store: DocumentStore,
    mailer: Arc<M>,
    config: Arc<AuthConfig>,
) -> Router
where
    R: VerificationRepository + Send + Sync + 'static,
    U: UserRepository + Send + Sync + 'static,
    M: Mailer + Send + Sync + 'static,
{
    let gate = AuthGate::new(config.clone());
    let state = VerificationAppState {
        requests,
        users,
        store,
        mailer,
        config,
    };

    Router::new()
        .route(
            "/landowner/request-verification",
            post(handlers::request_verification::<R, U, M>)
                .route_layer(middleware::from_fn_with_state(gate, require_auth)),
        )
        .route("/landowner/register", post(handlers::landowner_register::<R, U, M>))
        .route("/landowner/login", post(handlers::landowner_login::<R, U, M>))
        .with_state(state)
}

/// Admin review queue routes; every route requires the admin role
pub fn admin_verification_router<R, U, M>(
    requests: Arc<R>,
    users: Arc<U>,
    store: DocumentStore,
    mailer: Arc<M>,
    config: Arc<AuthConfig>,
) -> Router
where
    R: VerificationRepository + Send + Sync + 'static,
    U: UserRepository + Send + Sync + 'static,
    M: Mailer + Send + Sync + 'static,
{
    let gate = AuthGate::new(config.clone());
    let state = VerificationAppState {
        requests,
        users,
        store,
        mailer,
        config,
    };

    Router::new()
        .route(
            "/admin/verification-requests",
            get(handlers::list_requests::<R, U, M>),
        )
        .route(
            "/admin/verification-requests/{id}/approve",
            post(handlers::approve_request::<R, U, M>),
        )
        .route(
            "/admin/verification-requests/{id}/reject",
            post(handlers::reject_request::<R, U, M>),
        )
        .route(
            "/admin/verification-documents/{id}",
            get(handlers::get_document::<R, U, M>),
        )
        .route_layer(middleware::from_fn_with_state(gate, require_admin))
        .with_state(state)
}
