//! Notification Entity

use chrono::{DateTime, Utc};
use kernel::id::{NotificationId, PropertyId, UserId};

/// An in-app notification, currently only produced by the listing fan-out
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: NotificationId,
    pub user_id: UserId,
    pub message: String,
    pub read: bool,
    /// The listing that triggered this notification
    pub property_id: Option<PropertyId>,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn new_listing(user_id: UserId, property_id: PropertyId, message: String) -> Self {
        Self {
            id: NotificationId::new(),
            user_id,
            message,
            read: false,
            property_id: Some(property_id),
            created_at: Utc::now(),
        }
    }
}
