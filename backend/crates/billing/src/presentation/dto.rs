//! Data Transfer Objects

use auth::models::{SubscriptionResponse, User};
use serde::{Deserialize, Serialize};

/// Checkout session creation body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    pub price_id: String,
}

/// Hosted checkout handle
#[derive(Debug, Serialize)]
pub struct CheckoutResponse {
    pub url: String,
}

/// Session lookup projection
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionDetailsResponse {
    pub subscription_id: Option<String>,
}

/// Premium activation body; the session reference from the success redirect
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscribePremiumRequest {
    pub session_id: String,
}

/// Plan mutation outcome
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanResponse {
    pub message: String,
    pub subscription: SubscriptionResponse,
}

impl PlanResponse {
    pub fn new(message: &str, user: &User) -> Self {
        Self {
            message: message.to_string(),
            subscription: SubscriptionResponse {
                plan: user.subscription.plan,
                status: user.subscription.status,
                start_date: user.subscription.start_date,
            },
        }
    }
}
