//! Data Transfer Objects
//!
//! Wire types for the identity endpoints. `UserResponse` is the safe
//! projection used everywhere a user leaves the system: it never carries the
//! password hash.

use serde::{Deserialize, Serialize};

use crate::domain::entity::user::User;
use crate::domain::value_object::{SubscriptionPlan, SubscriptionStatus, UserRole};

/// Registration request body
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Login request body
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Profile update request body; omitted fields are left untouched
#[derive(Debug, Deserialize, Default)]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub password: Option<String>,
}

/// Contact channel update; empty strings clear the channel
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateContactRequest {
    pub phone: Option<String>,
    pub whatsapp_url: Option<String>,
    pub social_url: Option<String>,
}

/// Subscription projection
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionResponse {
    pub plan: SubscriptionPlan,
    pub status: SubscriptionStatus,
    pub start_date: Option<chrono::DateTime<chrono::Utc>>,
}

/// Safe user projection (no password hash, no internal document reference)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub is_verified_landowner: bool,
    pub phone: Option<String>,
    pub whatsapp_url: Option<String>,
    pub social_url: Option<String>,
    pub subscription: SubscriptionResponse,
    pub has_chosen_plan: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name.clone(),
            email: user.email.as_str().to_string(),
            role: user.role,
            is_verified_landowner: user.is_verified_landowner,
            phone: user.phone.clone(),
            whatsapp_url: user.whatsapp_ref.clone(),
            social_url: user.social_ref.clone(),
            subscription: SubscriptionResponse {
                plan: user.subscription.plan,
                status: user.subscription.status,
                start_date: user.subscription.start_date,
            },
            has_chosen_plan: user.has_chosen_plan,
            created_at: user.created_at,
        }
    }
}

/// Login/registration response
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub user: UserResponse,
    /// Also set as an HTTP-only cookie; exposed here for bearer clients
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}
