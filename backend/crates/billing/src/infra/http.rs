//! HTTP Payment Provider
//!
//! Stripe-style REST client. Requests are form-encoded with a bearer secret
//! key; every transport or non-2xx outcome maps to `ExternalService`, which
//! surfaces as a 502 rather than a 500.

use reqwest::Client;
use serde::Deserialize;

use crate::application::config::BillingConfig;
use crate::domain::provider::{BillingProvider, CheckoutSession, SessionDetails};
use crate::error::{BillingError, BillingResult};

/// Wire shape of a provider checkout session
#[derive(Debug, Deserialize)]
struct SessionPayload {
    id: String,
    #[serde(default)]
    url: Option<String>,
    /// Subscription id, set once the checkout completed
    #[serde(default)]
    subscription: Option<String>,
}

/// HTTP billing provider
#[derive(Clone)]
pub struct HttpBillingProvider {
    client: Client,
    config: BillingConfig,
}

impl HttpBillingProvider {
    pub fn new(config: BillingConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    async fn read_session(&self, response: reqwest::Response) -> BillingResult<SessionPayload> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BillingError::ExternalService(format!(
                "Provider returned {status}: {body}"
            )));
        }
        response
            .json::<SessionPayload>()
            .await
            .map_err(|e| BillingError::ExternalService(format!("Malformed provider response: {e}")))
    }
}

impl BillingProvider for HttpBillingProvider {
    async fn create_checkout_session(&self, price_ref: &str) -> BillingResult<CheckoutSession> {
        let url = format!("{}/v1/checkout/sessions", self.config.api_base);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .form(&[
                ("mode", "subscription"),
                ("payment_method_types[0]", "card"),
                ("line_items[0][price]", price_ref),
                ("line_items[0][quantity]", "1"),
                ("success_url", &self.config.success_url),
                ("cancel_url", &self.config.cancel_url),
            ])
            .send()
            .await
            .map_err(|e| BillingError::ExternalService(e.to_string()))?;

        let payload = self.read_session(response).await?;
        let checkout_url = payload.url.ok_or_else(|| {
            BillingError::ExternalService("Provider session carries no checkout URL".to_string())
        })?;

        tracing::debug!(session_id = %payload.id, "Checkout session created");

        Ok(CheckoutSession {
            session_id: payload.id,
            url: checkout_url,
        })
    }

    async fn retrieve_session(&self, session_ref: &str) -> BillingResult<SessionDetails> {
        let url = format!(
            "{}/v1/checkout/sessions/{session_ref}",
            self.config.api_base
        );
        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.config.api_key)
            .send()
            .await
            .map_err(|e| BillingError::ExternalService(e.to_string()))?;

        let payload = self.read_session(response).await?;

        Ok(SessionDetails {
            subscription_id: payload.subscription,
        })
    }

    async fn cancel_subscription(&self, subscription_id: &str) -> BillingResult<()> {
        let url = format!("{}/v1/subscriptions/{subscription_id}", self.config.api_base);
        let response = self
            .client
            .delete(&url)
            .bearer_auth(&self.config.api_key)
            .send()
            .await
            .map_err(|e| BillingError::ExternalService(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BillingError::ExternalService(format!(
                "Provider returned {status}: {body}"
            )));
        }

        tracing::debug!(subscription_id = %subscription_id, "Provider subscription cancelled");

        Ok(())
    }
}
