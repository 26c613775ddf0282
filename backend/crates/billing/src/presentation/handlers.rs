//! HTTP Handlers

use std::sync::Arc;

use auth::AuthConfig;
use auth::domain::repository::UserRepository;
use auth::middleware::AuthUser;
use axum::Json;
use axum::extract::{Extension, Path, State};

use crate::application::{
    CancelSubscriptionUseCase, CreateCheckoutSessionUseCase, GetSessionUseCase,
    SubscribeFreeUseCase, SubscribePremiumUseCase,
};
use crate::domain::provider::BillingProvider;
use crate::error::BillingError;
use crate::presentation::dto::{
    CheckoutRequest, CheckoutResponse, PlanResponse, SessionDetailsResponse,
    SubscribePremiumRequest,
};

/// Shared handler state
pub struct BillingAppState<P, U> {
    pub provider: Arc<P>,
    pub users: Arc<U>,
    pub config: Arc<AuthConfig>,
}

impl<P, U> Clone for BillingAppState<P, U> {
    fn clone(&self) -> Self {
        Self {
            provider: self.provider.clone(),
            users: self.users.clone(),
            config: self.config.clone(),
        }
    }
}

/// POST /billing/checkout-session
pub async fn create_checkout_session<P, U>(
    State(state): State<BillingAppState<P, U>>,
    Extension(_auth_user): Extension<AuthUser>,
    Json(body): Json<CheckoutRequest>,
) -> Result<Json<CheckoutResponse>, BillingError>
where
    P: BillingProvider + Send + Sync,
    U: Send + Sync,
{
    let session = CreateCheckoutSessionUseCase::new(state.provider)
        .execute(&body.price_id)
        .await?;

    Ok(Json(CheckoutResponse { url: session.url }))
}

/// GET /billing/session/{id}
pub async fn get_session<P, U>(
    State(state): State<BillingAppState<P, U>>,
    Extension(_auth_user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<Json<SessionDetailsResponse>, BillingError>
where
    P: BillingProvider + Send + Sync,
    U: Send + Sync,
{
    let details = GetSessionUseCase::new(state.provider).execute(&id).await?;

    Ok(Json(SessionDetailsResponse {
        subscription_id: details.subscription_id,
    }))
}

/// POST /billing/subscribe-free
pub async fn subscribe_free<P, U>(
    State(state): State<BillingAppState<P, U>>,
    Extension(auth_user): Extension<AuthUser>,
) -> Result<Json<PlanResponse>, BillingError>
where
    P: Send + Sync,
    U: UserRepository + Send + Sync,
{
    let user = SubscribeFreeUseCase::new(state.users)
        .execute(&auth_user.user_id)
        .await?;

    Ok(Json(PlanResponse::new("Free plan activated", &user)))
}

/// POST /billing/subscribe-premium
pub async fn subscribe_premium<P, U>(
    State(state): State<BillingAppState<P, U>>,
    Extension(auth_user): Extension<AuthUser>,
    Json(body): Json<SubscribePremiumRequest>,
) -> Result<Json<PlanResponse>, BillingError>
where
    P: BillingProvider + Send + Sync,
    U: UserRepository + Send + Sync,
{
    let user = SubscribePremiumUseCase::new(state.provider, state.users)
        .execute(&auth_user.user_id, &body.session_id)
        .await?;

    Ok(Json(PlanResponse::new("Premium plan activated", &user)))
}

/// POST /billing/cancel-subscription
pub async fn cancel_subscription<P, U>(
    State(state): State<BillingAppState<P, U>>,
    Extension(auth_user): Extension<AuthUser>,
) -> Result<Json<PlanResponse>, BillingError>
where
    P: BillingProvider + Send + Sync,
    U: UserRepository + Send + Sync,
{
    let user = CancelSubscriptionUseCase::new(state.provider, state.users)
        .execute(&auth_user.user_id)
        .await?;

    Ok(Json(PlanResponse::new("Subscription cancelled", &user)))
}
