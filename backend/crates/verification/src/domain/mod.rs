//! Domain Layer

pub mod entity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::verification_request::{AdminRequestView, VerificationRequest};
pub use repository::VerificationRepository;
pub use value_object::status::{StatusFilter, VerificationStatus};
