//! Landowner Verification Workflow
//!
//! The trust gate of the platform: a landowner registers with a proof of
//! ownership document, an admin reviews the document, and only approved
//! landowners may list housing.
//!
//! Request lifecycle: `unsubmitted → pending → {approved, rejected}`.
//! Re-submission after rejection creates a fresh pending request; at most
//! one pending request per user exists at any time (backed by a partial
//! unique index).
//!
//! Clean Architecture structure:
//! - `domain/` - Request entity, status, repository traits
//! - `application/` - Registration, login gate, review use cases
//! - `infra/` - PostgreSQL repository (CAS transitions)
//! - `presentation/` - Multipart handlers, admin endpoints, router

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use error::{VerificationError, VerificationResult};
pub use infra::postgres::PgVerificationRepository;
pub use presentation::router::{admin_verification_router, landowner_router};

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}
