//! Housing Backend Module
//!
//! Property listings plus everything that hangs off them:
//! - CRUD with the owner-or-admin authorization matrix
//! - Listing fan-out: bookmark-matching notification rows + best-effort emails
//! - Contact disclosure: emails the owner's channels to an interested student
//! - Bookmarks (posts, properties, universities) and notifications
//!
//! Clean Architecture structure:
//! - `domain/` - Property/Bookmark/Notification entities, repository traits
//! - `application/` - Use cases (CRUD, fan-out, disclosure)
//! - `infra/` - PostgreSQL repositories
//! - `presentation/` - HTTP handlers, DTOs, router

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use error::{HousingError, HousingResult};
pub use infra::postgres::PgHousingRepository;
pub use presentation::router::housing_router;

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}
