//! Value Objects

pub mod post_kind;
pub mod visa_type;

pub use post_kind::PostKind;
pub use visa_type::VisaType;
