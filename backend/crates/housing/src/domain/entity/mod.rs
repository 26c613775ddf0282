pub mod bookmark;
pub mod notification;
pub mod property;

pub use bookmark::Bookmark;
pub use notification::Notification;
pub use property::Property;
