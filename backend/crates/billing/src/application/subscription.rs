//! Subscription Use Cases
//!
//! Free-plan activation never touches the provider. Premium activation and
//! cancellation talk to the provider first and write locally only after it
//! acknowledges, so a provider failure leaves the stored sub-record exactly
//! as it was.

use std::sync::Arc;

use auth::domain::repository::UserRepository;
use auth::models::{Subscription, User};
use kernel::id::UserId;

use crate::domain::provider::{BillingProvider, CheckoutSession, SessionDetails};
use crate::error::{BillingError, BillingResult};

async fn load_user<U: UserRepository>(users: &U, user_id: &UserId) -> BillingResult<User> {
    users
        .find_by_id(user_id)
        .await?
        .ok_or(BillingError::UserNotFound)
}

pub struct CreateCheckoutSessionUseCase<P> {
    provider: Arc<P>,
}

impl<P: BillingProvider> CreateCheckoutSessionUseCase<P> {
    pub fn new(provider: Arc<P>) -> Self {
        Self { provider }
    }

    pub async fn execute(&self, price_ref: &str) -> BillingResult<CheckoutSession> {
        if price_ref.trim().is_empty() {
            return Err(BillingError::Validation(
                "A price reference is required".to_string(),
            ));
        }
        self.provider.create_checkout_session(price_ref.trim()).await
    }
}

pub struct GetSessionUseCase<P> {
    provider: Arc<P>,
}

impl<P: BillingProvider> GetSessionUseCase<P> {
    pub fn new(provider: Arc<P>) -> Self {
        Self { provider }
    }

    pub async fn execute(&self, session_ref: &str) -> BillingResult<SessionDetails> {
        self.provider.retrieve_session(session_ref).await
    }
}

/// Activate the free plan; a purely local write
pub struct SubscribeFreeUseCase<U> {
    users: Arc<U>,
}

impl<U: UserRepository> SubscribeFreeUseCase<U> {
    pub fn new(users: Arc<U>) -> Self {
        Self { users }
    }

    pub async fn execute(&self, user_id: &UserId) -> BillingResult<User> {
        let mut user = load_user(self.users.as_ref(), user_id).await?;

        user.subscription = Subscription::free();
        user.has_chosen_plan = true;
        user.touch();
        self.users.update(&user).await?;

        tracing::info!(user_id = %user.id, "Free plan activated");

        Ok(user)
    }
}

/// Activate premium after checkout, keyed to the provider's subscription id
pub struct SubscribePremiumUseCase<P, U> {
    provider: Arc<P>,
    users: Arc<U>,
}

impl<P, U> SubscribePremiumUseCase<P, U>
where
    P: BillingProvider,
    U: UserRepository,
{
    pub fn new(provider: Arc<P>, users: Arc<U>) -> Self {
        Self { provider, users }
    }

    /// The session reference comes back with the user from the provider's
    /// success redirect; the subscription id is read from the provider
    /// rather than trusted from the client.
    pub async fn execute(&self, user_id: &UserId, session_ref: &str) -> BillingResult<User> {
        let details = self.provider.retrieve_session(session_ref).await?;
        let subscription_id = details.subscription_id.ok_or_else(|| {
            BillingError::InvalidState("Checkout session has no subscription yet".to_string())
        })?;

        let mut user = load_user(self.users.as_ref(), user_id).await?;

        user.subscription = Subscription::premium(subscription_id);
        user.has_chosen_plan = true;
        user.touch();
        self.users.update(&user).await?;

        tracing::info!(user_id = %user.id, "Premium plan activated");

        Ok(user)
    }
}

/// Cancel on the provider side, then reset the local sub-record
pub struct CancelSubscriptionUseCase<P, U> {
    provider: Arc<P>,
    users: Arc<U>,
}

impl<P, U> CancelSubscriptionUseCase<P, U>
where
    P: BillingProvider,
    U: UserRepository,
{
    pub fn new(provider: Arc<P>, users: Arc<U>) -> Self {
        Self { provider, users }
    }

    pub async fn execute(&self, user_id: &UserId) -> BillingResult<User> {
        let mut user = load_user(self.users.as_ref(), user_id).await?;

        let Some(subscription_id) = user.subscription.external_subscription_id.clone() else {
            return Err(BillingError::InvalidState(
                "No active provider subscription to cancel".to_string(),
            ));
        };

        // Provider first; on failure the stored record stays untouched
        self.provider.cancel_subscription(&subscription_id).await?;

        user.subscription = Subscription::default();
        user.has_chosen_plan = false;
        user.touch();
        self.users.update(&user).await?;

        tracing::info!(user_id = %user.id, "Subscription cancelled");

        Ok(user)
    }
}
