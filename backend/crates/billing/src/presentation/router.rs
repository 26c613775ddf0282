//! Billing Router

use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::sync::Arc;

use auth::application::config::AuthConfig;
use auth::domain::repository::UserRepository;
use auth::infra::postgres::PgUserRepository;
use auth::presentation::middleware::{AuthGate, require_auth};

use crate::domain::provider::BillingProvider;
use crate::infra::http::HttpBillingProvider;
use crate::presentation::handlers::{self, BillingAppState};

/// Create the billing router with the HTTP provider
pub fn billing_router(
    provider: HttpBillingProvider,
    users: PgUserRepository,
    config: AuthConfig,
) -> Router {
    billing_router_generic(provider, users, config)
}

/// Create a generic billing router for any provider implementation
pub fn billing_router_generic<P, U>(provider: P, users: U, config: AuthConfig) -> Router
where
    P: BillingProvider + Send + Sync + 'static,
    U: UserRepository + Send + Sync + 'static,
{
    let config = Arc::new(config);
    let state = BillingAppState {
        provider: Arc::new(provider),
        users: Arc::new(users),
        config: config.clone(),
    };
    let gate = AuthGate::new(config);

    Router::new()
        .route(
            "/billing/checkout-session",
            post(handlers::create_checkout_session::<P, U>),
        )
        .route("/billing/session/{id}", get(handlers::get_session::<P, U>))
        .route(
            "/billing/subscribe-free",
            post(handlers::subscribe_free::<P, U>),
        )
        .route(
            "/billing/subscribe-premium",
            post(handlers::subscribe_premium::<P, U>),
        )
        .route(
            "/billing/cancel-subscription",
            post(handlers::cancel_subscription::<P, U>),
        )
        .route_layer(middleware::from_fn_with_state(gate, require_auth))
        .with_state(state)
}
