//! Application Layer

pub mod bookmarks;
pub mod contact;
pub mod emails;
pub mod fanout;
pub mod notifications;
pub mod properties;

pub use bookmarks::{AddBookmarkUseCase, ListBookmarksUseCase, RemoveBookmarkUseCase};
pub use contact::RequestContactUseCase;
pub use fanout::ListingFanOut;
pub use notifications::{ListNotificationsUseCase, MarkNotificationReadUseCase};
pub use properties::{
    CreatePropertyUseCase, DeletePropertyUseCase, GetPropertyUseCase, ListMineUseCase,
    ListPropertiesUseCase, PropertyDraft, UpdatePropertyUseCase,
};
