//! Domain Layer

pub mod entity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::bookmark::Bookmark;
pub use entity::notification::Notification;
pub use entity::property::Property;
pub use repository::{BookmarkRepository, NotificationRepository, PropertyRepository};
