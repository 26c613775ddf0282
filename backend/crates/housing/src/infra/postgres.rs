//! PostgreSQL Repository Implementations
//!
//! One repository struct carries all three housing tables; the bookmark
//! uniqueness and the filters live in SQL.

use chrono::{DateTime, Utc};
use kernel::id::{BookmarkId, NotificationId, PropertyId, UserId};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::bookmark::Bookmark;
use crate::domain::entity::notification::Notification;
use crate::domain::entity::property::Property;
use crate::domain::repository::{
    BookmarkRepository, NotificationRepository, PropertyFilter, PropertyRepository,
};
use crate::domain::value_object::{ItemType, LeaseDuration, PropertyCategory};
use crate::error::{HousingError, HousingResult};

const PROPERTY_COLUMNS: &str = r#"
    id, title, location, price, category, photos, description, amenities,
    terms, rented, duration, owner_id, owner_email, created_at, updated_at
"#;

/// PostgreSQL-backed housing repository
#[derive(Clone)]
pub struct PgHousingRepository {
    pool: PgPool,
}

impl PgHousingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// Property Repository Implementation
// ============================================================================

impl PropertyRepository for PgHousingRepository {
    async fn create(&self, property: &Property) -> HousingResult<()> {
        sqlx::query(&format!(
            "INSERT INTO properties ({PROPERTY_COLUMNS}) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)"
        ))
        .bind(property.id.as_uuid())
        .bind(&property.title)
        .bind(&property.location)
        .bind(property.price)
        .bind(property.category.as_str())
        .bind(&property.photos)
        .bind(&property.description)
        .bind(&property.amenities)
        .bind(&property.terms)
        .bind(property.rented)
        .bind(property.duration.as_str())
        .bind(property.owner_id.as_ref().map(|id| *id.as_uuid()))
        .bind(&property.owner_email)
        .bind(property.created_at)
        .bind(property.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, id: &PropertyId) -> HousingResult<Option<Property>> {
        let row = sqlx::query_as::<_, PropertyRow>(&format!(
            "SELECT {PROPERTY_COLUMNS} FROM properties WHERE id = $1"
        ))
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_property()).transpose()
    }

    async fn list(&self, filter: &PropertyFilter) -> HousingResult<Vec<Property>> {
        let rows = sqlx::query_as::<_, PropertyRow>(&format!(
            r#"
            SELECT {PROPERTY_COLUMNS} FROM properties
            WHERE ($1::text IS NULL OR location ILIKE '%' || $1 || '%')
              AND ($2::text IS NULL OR category = $2)
              AND ($3::bigint IS NULL OR price <= $3)
            ORDER BY created_at DESC
            "#
        ))
        .bind(filter.location.as_deref())
        .bind(filter.category.map(|c| c.as_str()))
        .bind(filter.max_price)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(|r| r.into_property()).collect()
    }

    async fn list_by_owner(
        &self,
        owner_id: &UserId,
        owner_email: &str,
    ) -> HousingResult<Vec<Property>> {
        let rows = sqlx::query_as::<_, PropertyRow>(&format!(
            r#"
            SELECT {PROPERTY_COLUMNS} FROM properties
            WHERE owner_id = $1 OR LOWER(owner_email) = LOWER($2)
            ORDER BY created_at DESC
            "#
        ))
        .bind(owner_id.as_uuid())
        .bind(owner_email)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(|r| r.into_property()).collect()
    }

    async fn update(&self, property: &Property) -> HousingResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE properties SET
                title = $2, location = $3, price = $4, category = $5,
                photos = $6, description = $7, amenities = $8, terms = $9,
                rented = $10, duration = $11, updated_at = $12
            WHERE id = $1
            "#,
        )
        .bind(property.id.as_uuid())
        .bind(&property.title)
        .bind(&property.location)
        .bind(property.price)
        .bind(property.category.as_str())
        .bind(&property.photos)
        .bind(&property.description)
        .bind(&property.amenities)
        .bind(&property.terms)
        .bind(property.rented)
        .bind(property.duration.as_str())
        .bind(property.updated_at)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(HousingError::PropertyNotFound);
        }

        Ok(())
    }

    async fn delete(&self, id: &PropertyId) -> HousingResult<()> {
        let result = sqlx::query("DELETE FROM properties WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(HousingError::PropertyNotFound);
        }

        Ok(())
    }
}

// ============================================================================
// Bookmark Repository Implementation
// ============================================================================

impl BookmarkRepository for PgHousingRepository {
    async fn create(&self, bookmark: &Bookmark) -> HousingResult<()> {
        sqlx::query(
            r#"
            INSERT INTO bookmarks (id, user_id, item_type, item_id, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(bookmark.id.as_uuid())
        .bind(bookmark.user_id.as_uuid())
        .bind(bookmark.item_type.as_str())
        .bind(bookmark.item_id)
        .bind(bookmark.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| match &e {
            // Unique (user_id, item_type, item_id)
            sqlx::Error::Database(db) if db.code().as_deref() == Some("23505") => {
                HousingError::DuplicateBookmark
            }
            _ => HousingError::Database(e),
        })?;

        Ok(())
    }

    async fn list_by_user(&self, user_id: &UserId) -> HousingResult<Vec<Bookmark>> {
        let rows = sqlx::query_as::<_, BookmarkRow>(
            "SELECT id, user_id, item_type, item_id, created_at FROM bookmarks \
             WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(|r| r.into_bookmark()).collect()
    }

    async fn list_by_item_type(&self, item_type: ItemType) -> HousingResult<Vec<Bookmark>> {
        let rows = sqlx::query_as::<_, BookmarkRow>(
            "SELECT id, user_id, item_type, item_id, created_at FROM bookmarks \
             WHERE item_type = $1",
        )
        .bind(item_type.as_str())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(|r| r.into_bookmark()).collect()
    }

    async fn delete(&self, id: &BookmarkId, user_id: &UserId) -> HousingResult<bool> {
        let deleted = sqlx::query("DELETE FROM bookmarks WHERE id = $1 AND user_id = $2")
            .bind(id.as_uuid())
            .bind(user_id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }

    async fn delete_by_item(
        &self,
        user_id: &UserId,
        item_type: ItemType,
        item_id: Uuid,
    ) -> HousingResult<bool> {
        let deleted = sqlx::query(
            "DELETE FROM bookmarks WHERE user_id = $1 AND item_type = $2 AND item_id = $3",
        )
        .bind(user_id.as_uuid())
        .bind(item_type.as_str())
        .bind(item_id)
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(deleted > 0)
    }
}

// ============================================================================
// Notification Repository Implementation
// ============================================================================

impl NotificationRepository for PgHousingRepository {
    async fn create(&self, notification: &Notification) -> HousingResult<()> {
        sqlx::query(
            r#"
            INSERT INTO notifications (id, user_id, message, read, property_id, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(notification.id.as_uuid())
        .bind(notification.user_id.as_uuid())
        .bind(&notification.message)
        .bind(notification.read)
        .bind(notification.property_id.as_ref().map(|id| *id.as_uuid()))
        .bind(notification.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list_by_user(&self, user_id: &UserId) -> HousingResult<Vec<Notification>> {
        let rows = sqlx::query_as::<_, NotificationRow>(
            "SELECT id, user_id, message, read, property_id, created_at FROM notifications \
             WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_notification()).collect())
    }

    async fn mark_read(&self, id: &NotificationId, user_id: &UserId) -> HousingResult<bool> {
        let updated = sqlx::query(
            "UPDATE notifications SET read = TRUE WHERE id = $1 AND user_id = $2",
        )
        .bind(id.as_uuid())
        .bind(user_id.as_uuid())
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(updated > 0)
    }
}

// ============================================================================
// Row types
// ============================================================================

#[derive(sqlx::FromRow)]
struct PropertyRow {
    id: Uuid,
    title: String,
    location: String,
    price: i64,
    category: String,
    photos: Vec<String>,
    description: Option<String>,
    amenities: Vec<String>,
    terms: Option<String>,
    rented: bool,
    duration: String,
    owner_id: Option<Uuid>,
    owner_email: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl PropertyRow {
    fn into_property(self) -> HousingResult<Property> {
        let category = PropertyCategory::parse(&self.category)
            .map_err(|e| HousingError::Internal(e.to_string()))?;
        let duration = LeaseDuration::parse(&self.duration)
            .map_err(|e| HousingError::Internal(e.to_string()))?;

        Ok(Property {
            id: PropertyId::from_uuid(self.id),
            title: self.title,
            location: self.location,
            price: self.price,
            category,
            photos: self.photos,
            description: self.description,
            amenities: self.amenities,
            terms: self.terms,
            rented: self.rented,
            duration,
            owner_id: self.owner_id.map(UserId::from_uuid),
            owner_email: self.owner_email,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct BookmarkRow {
    id: Uuid,
    user_id: Uuid,
    item_type: String,
    item_id: Uuid,
    created_at: DateTime<Utc>,
}

impl BookmarkRow {
    fn into_bookmark(self) -> HousingResult<Bookmark> {
        let item_type = ItemType::parse(&self.item_type)
            .map_err(|e| HousingError::Internal(e.to_string()))?;

        Ok(Bookmark {
            id: BookmarkId::from_uuid(self.id),
            user_id: UserId::from_uuid(self.user_id),
            item_type,
            item_id: self.item_id,
            created_at: self.created_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct NotificationRow {
    id: Uuid,
    user_id: Uuid,
    message: String,
    read: bool,
    property_id: Option<Uuid>,
    created_at: DateTime<Utc>,
}

impl NotificationRow {
    fn into_notification(self) -> Notification {
        Notification {
            id: NotificationId::from_uuid(self.id),
            user_id: UserId::from_uuid(self.user_id),
            message: self.message,
            read: self.read,
            property_id: self.property_id.map(PropertyId::from_uuid),
            created_at: self.created_at,
        }
    }
}
