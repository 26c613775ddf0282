//! Billing Configuration

/// Billing application configuration
#[derive(Debug, Clone)]
pub struct BillingConfig {
    /// Provider API base URL, without a trailing slash
    pub api_base: String,
    /// Provider secret API key, sent as a bearer token
    pub api_key: String,
    /// Where the provider redirects after a completed checkout
    pub success_url: String,
    /// Where the provider redirects after an abandoned checkout
    pub cancel_url: String,
}

impl BillingConfig {
    /// Create config for development (points at a local provider stub)
    pub fn development() -> Self {
        Self {
            api_base: "http://localhost:12111".to_string(),
            api_key: "sk_test_dev".to_string(),
            success_url: "http://localhost:5173/success?session_id={CHECKOUT_SESSION_ID}"
                .to_string(),
            cancel_url: "http://localhost:5173/cancel".to_string(),
        }
    }
}
