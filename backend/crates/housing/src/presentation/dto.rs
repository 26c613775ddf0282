//! Data Transfer Objects

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entity::bookmark::Bookmark;
use crate::domain::entity::notification::Notification;
use crate::domain::entity::property::Property;
use crate::domain::repository::PropertyFilter;
use crate::domain::value_object::{ItemType, LeaseDuration, PropertyCategory};
use crate::error::{HousingError, HousingResult};

/// Create/update listing body
#[derive(Debug, Deserialize)]
pub struct PropertyRequest {
    pub title: String,
    pub location: String,
    pub price: i64,
    pub category: PropertyCategory,
    #[serde(default)]
    pub photos: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub terms: Option<String>,
    #[serde(default)]
    pub rented: bool,
    #[serde(default)]
    pub duration: LeaseDuration,
}

/// Listing search query
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PropertyQuery {
    pub location: Option<String>,
    pub category: Option<String>,
    pub max_price: Option<i64>,
}

impl PropertyQuery {
    pub fn into_filter(self) -> HousingResult<PropertyFilter> {
        let category = self
            .category
            .as_deref()
            .map(PropertyCategory::parse)
            .transpose()
            .map_err(|e| HousingError::Validation(e.to_string()))?;

        Ok(PropertyFilter {
            location: self.location.filter(|l| !l.trim().is_empty()),
            category,
            max_price: self.max_price,
        })
    }
}

/// Listing projection
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyResponse {
    pub id: String,
    pub title: String,
    pub location: String,
    pub price: i64,
    pub category: PropertyCategory,
    pub photos: Vec<String>,
    pub description: Option<String>,
    pub amenities: Vec<String>,
    pub terms: Option<String>,
    pub rented: bool,
    pub duration: LeaseDuration,
    pub owner_id: Option<String>,
    pub owner_email: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<&Property> for PropertyResponse {
    fn from(property: &Property) -> Self {
        Self {
            id: property.id.to_string(),
            title: property.title.clone(),
            location: property.location.clone(),
            price: property.price,
            category: property.category,
            photos: property.photos.clone(),
            description: property.description.clone(),
            amenities: property.amenities.clone(),
            terms: property.terms.clone(),
            rented: property.rented,
            duration: property.duration,
            owner_id: property.owner_id.map(|id| id.to_string()),
            owner_email: property.owner_email.clone(),
            created_at: property.created_at,
            updated_at: property.updated_at,
        }
    }
}

/// Bookmark creation body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkRequest {
    pub item_type: ItemType,
    pub item_id: Uuid,
}

/// Bookmark projection
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkResponse {
    pub id: String,
    pub item_type: ItemType,
    pub item_id: Uuid,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<&Bookmark> for BookmarkResponse {
    fn from(bookmark: &Bookmark) -> Self {
        Self {
            id: bookmark.id.to_string(),
            item_type: bookmark.item_type,
            item_id: bookmark.item_id,
            created_at: bookmark.created_at,
        }
    }
}

/// Notification projection
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationResponse {
    pub id: String,
    pub message: String,
    pub read: bool,
    pub property_id: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<&Notification> for NotificationResponse {
    fn from(notification: &Notification) -> Self {
        Self {
            id: notification.id.to_string(),
            message: notification.message.clone(),
            read: notification.read,
            property_id: notification.property_id.map(|id| id.to_string()),
            created_at: notification.created_at,
        }
    }
}

/// Contact disclosure response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactResponse {
    pub message: String,
    /// Mail preview handle, present outside production
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview_url: Option<String>,
}
