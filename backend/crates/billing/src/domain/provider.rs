//! Payment Provider Contract
//!
//! The provider owns the checkout lifecycle end to end; this side only ever
//! asks for a hosted checkout URL, reads a finished session back, or cancels
//! a subscription it previously stored the id of.

use crate::error::BillingResult;

/// A hosted checkout session created by the provider
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutSession {
    pub session_id: String,
    /// Where to send the user to complete payment
    pub url: String,
}

/// What the provider reports about a finished checkout session
#[derive(Debug, Clone, PartialEq)]
pub struct SessionDetails {
    /// Absent until the checkout actually completed
    pub subscription_id: Option<String>,
}

/// External billing provider contract
#[trait_variant::make(BillingProvider: Send)]
pub trait LocalBillingProvider {
    /// Create a subscription checkout session for the given price reference
    async fn create_checkout_session(&self, price_ref: &str) -> BillingResult<CheckoutSession>;

    /// Look up a checkout session, typically after the user returns
    async fn retrieve_session(&self, session_ref: &str) -> BillingResult<SessionDetails>;

    /// Cancel a subscription on the provider side
    async fn cancel_subscription(&self, subscription_id: &str) -> BillingResult<()>;
}
