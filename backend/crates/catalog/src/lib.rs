//! Catalog Backend Module
//!
//! Public guide content: SOP/VISA posts, the university directory and the
//! visa directory. Reads are open; every mutation is admin-only. Posts and
//! universities are also the referents of POST/UNIVERSITY bookmarks in the
//! housing crate.
//!
//! Clean Architecture structure:
//! - `domain/` - Post/University/Visa entities, repository traits
//! - `application/` - Use cases
//! - `infra/` - PostgreSQL repositories
//! - `presentation/` - HTTP handlers, DTOs, router

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use error::{CatalogError, CatalogResult};
pub use infra::postgres::PgCatalogRepository;
pub use presentation::router::catalog_router;

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}
