//! Billing Backend Module
//!
//! A thin bridge to the external subscription provider. The provider is
//! authoritative for paid plans; the user's subscription sub-record is a
//! local cache reconciled only after the provider acknowledges.
//!
//! Clean Architecture structure:
//! - `domain/` - the `BillingProvider` contract
//! - `application/` - checkout and plan activation use cases
//! - `infra/` - HTTP provider implementation
//! - `presentation/` - HTTP handlers, DTOs, router

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::BillingConfig;
pub use domain::provider::BillingProvider;
pub use error::{BillingError, BillingResult};
pub use infra::http::HttpBillingProvider;
pub use presentation::router::billing_router;

pub mod models {
    pub use crate::domain::provider::{CheckoutSession, SessionDetails};
    pub use crate::presentation::dto::*;
}
