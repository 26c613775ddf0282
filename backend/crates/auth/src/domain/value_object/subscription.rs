//! Subscription Sub-Record
//!
//! Carried on every user; the billing bridge is the only writer. The
//! external provider is authoritative for paid plans, the local record is a
//! cache of the outcome.

use chrono::{DateTime, Utc};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown subscription code: {0}")]
pub struct UnknownSubscriptionCode(pub String);

/// Subscription plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionPlan {
    #[default]
    #[display("none")]
    None,
    #[display("free")]
    Free,
    #[display("premium")]
    Premium,
}

impl SubscriptionPlan {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionPlan::None => "none",
            SubscriptionPlan::Free => "free",
            SubscriptionPlan::Premium => "premium",
        }
    }

    pub fn parse(code: &str) -> Result<Self, UnknownSubscriptionCode> {
        match code {
            "none" => Ok(SubscriptionPlan::None),
            "free" => Ok(SubscriptionPlan::Free),
            "premium" => Ok(SubscriptionPlan::Premium),
            other => Err(UnknownSubscriptionCode(other.to_string())),
        }
    }
}

/// Subscription status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionStatus {
    #[default]
    #[display("inactive")]
    Inactive,
    #[display("active")]
    Active,
}

impl SubscriptionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionStatus::Inactive => "inactive",
            SubscriptionStatus::Active => "active",
        }
    }

    pub fn parse(code: &str) -> Result<Self, UnknownSubscriptionCode> {
        match code {
            "inactive" => Ok(SubscriptionStatus::Inactive),
            "active" => Ok(SubscriptionStatus::Active),
            other => Err(UnknownSubscriptionCode(other.to_string())),
        }
    }
}

/// Per-user subscription state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Subscription {
    pub plan: SubscriptionPlan,
    pub status: SubscriptionStatus,
    pub start_date: Option<DateTime<Utc>>,
    /// Provider-side subscription id; present only for premium
    pub external_subscription_id: Option<String>,
}

impl Subscription {
    /// Activate the free plan (no provider involvement)
    pub fn free() -> Self {
        Self {
            plan: SubscriptionPlan::Free,
            status: SubscriptionStatus::Active,
            start_date: Some(Utc::now()),
            external_subscription_id: None,
        }
    }

    /// Activate premium, keyed to the provider's subscription id
    pub fn premium(external_subscription_id: String) -> Self {
        Self {
            plan: SubscriptionPlan::Premium,
            status: SubscriptionStatus::Active,
            start_date: Some(Utc::now()),
            external_subscription_id: Some(external_subscription_id),
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == SubscriptionStatus::Active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_codes_roundtrip() {
        for plan in [
            SubscriptionPlan::None,
            SubscriptionPlan::Free,
            SubscriptionPlan::Premium,
        ] {
            assert_eq!(SubscriptionPlan::parse(plan.as_str()), Ok(plan));
        }
    }

    #[test]
    fn test_default_subscription_is_inactive() {
        let sub = Subscription::default();
        assert_eq!(sub.plan, SubscriptionPlan::None);
        assert!(!sub.is_active());
        assert!(sub.external_subscription_id.is_none());
    }

    #[test]
    fn test_premium_keeps_external_id() {
        let sub = Subscription::premium("sub_123".to_string());
        assert!(sub.is_active());
        assert_eq!(sub.external_subscription_id.as_deref(), Some("sub_123"));
    }
}
