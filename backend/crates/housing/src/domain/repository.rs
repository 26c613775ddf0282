//! Repository Traits

use kernel::id::{BookmarkId, NotificationId, PropertyId, UserId};
use uuid::Uuid;

use crate::domain::entity::bookmark::Bookmark;
use crate::domain::entity::notification::Notification;
use crate::domain::entity::property::Property;
use crate::domain::value_object::{ItemType, PropertyCategory};
use crate::error::HousingResult;

/// Listing search filters; all optional, combined with AND
#[derive(Debug, Clone, Default)]
pub struct PropertyFilter {
    /// Case-insensitive substring on location
    pub location: Option<String>,
    pub category: Option<PropertyCategory>,
    pub max_price: Option<i64>,
}

/// Property repository trait
#[trait_variant::make(PropertyRepository: Send)]
pub trait LocalPropertyRepository {
    async fn create(&self, property: &Property) -> HousingResult<()>;

    async fn find_by_id(&self, id: &PropertyId) -> HousingResult<Option<Property>>;

    /// Public listing search, newest first
    async fn list(&self, filter: &PropertyFilter) -> HousingResult<Vec<Property>>;

    /// Listings owned by the caller (by id or email), newest first
    async fn list_by_owner(&self, owner_id: &UserId, owner_email: &str)
    -> HousingResult<Vec<Property>>;

    async fn update(&self, property: &Property) -> HousingResult<()>;

    async fn delete(&self, id: &PropertyId) -> HousingResult<()>;
}

/// Bookmark repository trait
#[trait_variant::make(BookmarkRepository: Send)]
pub trait LocalBookmarkRepository {
    /// Insert; `DuplicateBookmark` on the (user, item_type, item_id) unique key
    async fn create(&self, bookmark: &Bookmark) -> HousingResult<()>;

    async fn list_by_user(&self, user_id: &UserId) -> HousingResult<Vec<Bookmark>>;

    /// Every bookmark of the given item type, across all users (fan-out scan)
    async fn list_by_item_type(&self, item_type: ItemType) -> HousingResult<Vec<Bookmark>>;

    /// Delete the caller's own bookmark; false when nothing matched
    async fn delete(&self, id: &BookmarkId, user_id: &UserId) -> HousingResult<bool>;

    /// Delete by the item key instead of the bookmark id
    async fn delete_by_item(
        &self,
        user_id: &UserId,
        item_type: ItemType,
        item_id: Uuid,
    ) -> HousingResult<bool>;
}

/// Notification repository trait
#[trait_variant::make(NotificationRepository: Send)]
pub trait LocalNotificationRepository {
    async fn create(&self, notification: &Notification) -> HousingResult<()>;

    /// The caller's notifications, newest first
    async fn list_by_user(&self, user_id: &UserId) -> HousingResult<Vec<Notification>>;

    /// Mark the caller's own notification read; false when nothing matched
    async fn mark_read(&self, id: &NotificationId, user_id: &UserId) -> HousingResult<bool>;
}
