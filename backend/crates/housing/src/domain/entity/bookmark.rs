//! Bookmark Entity

use chrono::{DateTime, Utc};
use kernel::id::{BookmarkId, UserId};
use uuid::Uuid;

use crate::domain::value_object::ItemType;

/// A saved item; unique per (user, item type, item)
#[derive(Debug, Clone, PartialEq)]
pub struct Bookmark {
    pub id: BookmarkId,
    pub user_id: UserId,
    pub item_type: ItemType,
    /// Id of the bookmarked post/property/university
    pub item_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Bookmark {
    pub fn new(user_id: UserId, item_type: ItemType, item_id: Uuid) -> Self {
        Self {
            id: BookmarkId::new(),
            user_id,
            item_type,
            item_id,
            created_at: Utc::now(),
        }
    }
}
