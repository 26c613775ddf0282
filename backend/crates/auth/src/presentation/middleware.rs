//! Auth Middleware
//!
//! Token-gate middleware for protected routes. Pure precondition checks:
//! the token is verified and the caller identity inserted as a request
//! extension, nothing is mutated.

use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use kernel::id::UserId;

use crate::application::config::AuthConfig;
use crate::domain::value_object::UserRole;

/// Authenticated caller identity, inserted by [`require_auth`]
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub user_id: UserId,
    pub role: UserRole,
}

impl AuthUser {
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// Middleware state shared by the token gates
#[derive(Clone)]
pub struct AuthGate {
    pub config: Arc<AuthConfig>,
}

impl AuthGate {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self { config }
    }

    /// Verify the request's token, from cookie or Authorization header
    fn authenticate(&self, req: &Request<Body>) -> Result<AuthUser, AppError> {
        let headers = req.headers();

        let token = platform::cookie::extract_cookie(headers, &self.config.cookie_name)
            .or_else(|| platform::cookie::extract_bearer(headers))
            .ok_or_else(|| {
                AppError::unauthorized("Authentication required")
                    .with_action("Log in and retry with the session cookie")
            })?;

        let claims = self
            .config
            .signer()
            .verify(&token)
            .map_err(|e| AppError::unauthorized(e.to_string()))?;

        let role = UserRole::parse(&claims.role)
            .map_err(|_| AppError::unauthorized("Invalid session token"))?;

        Ok(AuthUser {
            user_id: UserId::from_uuid(claims.user_id),
            role,
        })
    }
}

/// Middleware that requires a valid session token
pub async fn require_auth(
    State(gate): State<AuthGate>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response> {
    match gate.authenticate(&req) {
        Ok(auth_user) => {
            req.extensions_mut().insert(auth_user);
            Ok(next.run(req).await)
        }
        Err(e) => Err(e.into_response()),
    }
}

/// Middleware that additionally requires the admin role
pub async fn require_admin(
    State(gate): State<AuthGate>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response> {
    match gate.authenticate(&req) {
        Ok(auth_user) if auth_user.is_admin() => {
            req.extensions_mut().insert(auth_user);
            Ok(next.run(req).await)
        }
        Ok(_) => Err(AppError::new(ErrorKind::Forbidden, "Admin access required")
            .into_response()),
        Err(e) => Err(e.into_response()),
    }
}
