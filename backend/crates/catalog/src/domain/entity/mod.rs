//! Domain Entities

pub mod post;
pub mod university;
pub mod visa;

pub use post::Post;
pub use university::University;
pub use visa::{ChecklistItem, Visa, VisaFees};
