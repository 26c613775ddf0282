//! Property Use Cases (CRUD + authorization matrix)

use std::sync::Arc;

use auth::domain::repository::UserRepository;
use auth::middleware::AuthUser;
use auth::models::User;
use chrono::Utc;
use kernel::id::PropertyId;
use platform::mailer::Mailer;

use crate::application::fanout::ListingFanOut;
use crate::domain::entity::property::Property;
use crate::domain::repository::{
    BookmarkRepository, NotificationRepository, PropertyFilter, PropertyRepository,
};
use crate::domain::value_object::{LeaseDuration, PropertyCategory};
use crate::error::{HousingError, HousingResult};

/// Incoming listing fields, shared by create and update
#[derive(Debug, Clone)]
pub struct PropertyDraft {
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
}

impl PropertyDraft {
    fn validate(&self) -> HousingResult<()> {
        if self.title.trim().is_empty() {
            return Err(HousingError::Validation("Title is required".to_string()));
        }
        if self.location.trim().is_empty() {
            return Err(HousingError::Validation("Location is required".to_string()));
        }
        if self.price < 0 {
            return Err(HousingError::Validation(
                "Price cannot be negative".to_string(),
            ));
        }
        Ok(())
    }

    fn apply_to(self, property: &mut Property) {
        property.title = self.title.trim().to_string();
        property.location = self.location.trim().to_string();
        property.price = self.price;
        property.category = self.category;
        property.photos = self.photos;
        property.description = self.description;
        property.amenities = self.amenities;
        property.terms = self.terms;
        property.rented = self.rented;
        property.duration = self.duration;
    }
}

async fn load_caller<U: UserRepository>(users: &U, caller: &AuthUser) -> HousingResult<User> {
    users
        .find_by_id(&caller.user_id)
        .await?
        .ok_or(HousingError::UserNotFound)
}

/// Ownership matrix shared by update and delete
fn authorize_mutation(property: &Property, caller: &AuthUser, user: &User) -> HousingResult<()> {
    if caller.is_admin() || property.is_owned_by(&caller.user_id, user.email.as_str()) {
        return Ok(());
    }
    Err(HousingError::Forbidden(
        "Only the owner or an admin can modify this listing".to_string(),
    ))
}

/// Create a listing, then run the fan-out
pub struct CreatePropertyUseCase<P, B, N, U, M> {
    properties: Arc<P>,
    users: Arc<U>,
    fanout: ListingFanOut<P, B, N, U, M>,
}

impl<P, B, N, U, M> CreatePropertyUseCase<P, B, N, U, M>
where
    P: PropertyRepository,
    B: BookmarkRepository,
    N: NotificationRepository,
    U: UserRepository,
    M: Mailer + Sync,
{
    pub fn new(
        properties: Arc<P>,
        bookmarks: Arc<B>,
        notifications: Arc<N>,
        users: Arc<U>,
        mailer: Arc<M>,
    ) -> Self {
        let fanout = ListingFanOut::new(
            properties.clone(),
            bookmarks,
            notifications,
            users.clone(),
            mailer,
        );
        Self {
            properties,
            users,
            fanout,
        }
    }

    pub async fn execute(&self, caller: &AuthUser, draft: PropertyDraft) -> HousingResult<Property> {
        draft.validate()?;

        let user = load_caller(self.users.as_ref(), caller).await?;
        if !user.can_list_properties() {
            return Err(HousingError::Forbidden(
                "Only verified landowners or admins can create listings".to_string(),
            ));
        }

        let now = Utc::now();
        let mut property = Property {
            id: PropertyId::new(),
            title: String::new(),
            location: String::new(),
            price: 0,
            category: draft.category,
            photos: vec![],
            description: None,
            amenities: vec![],
            terms: None,
            rented: false,
            duration: LeaseDuration::Flexible,
            owner_id: Some(user.id),
            owner_email: Some(user.email.as_str().to_string()),
            created_at: now,
            updated_at: now,
        };
        draft.apply_to(&mut property);

        // The listing must be durable before anyone is told about it
        self.properties.create(&property).await?;

        tracing::info!(property_id = %property.id, owner_id = %user.id, "Listing created");

        self.fanout.notify_bookmarkers(&property).await;

        Ok(property)
    }
}

pub struct GetPropertyUseCase<P> {
    properties: Arc<P>,
}

impl<P: PropertyRepository> GetPropertyUseCase<P> {
    pub fn new(properties: Arc<P>) -> Self {
        Self { properties }
    }

    pub async fn execute(&self, id: &PropertyId) -> HousingResult<Property> {
        self.properties
            .find_by_id(id)
            .await?
            .ok_or(HousingError::PropertyNotFound)
    }
}

pub struct ListPropertiesUseCase<P> {
    properties: Arc<P>,
}

impl<P: PropertyRepository> ListPropertiesUseCase<P> {
    pub fn new(properties: Arc<P>) -> Self {
        Self { properties }
    }

    pub async fn execute(&self, filter: &PropertyFilter) -> HousingResult<Vec<Property>> {
        self.properties.list(filter).await
    }
}

pub struct ListMineUseCase<P, U> {
    properties: Arc<P>,
    users: Arc<U>,
}

impl<P, U> ListMineUseCase<P, U>
where
    P: PropertyRepository,
    U: UserRepository,
{
    pub fn new(properties: Arc<P>, users: Arc<U>) -> Self {
        Self { properties, users }
    }

    pub async fn execute(&self, caller: &AuthUser) -> HousingResult<Vec<Property>> {
        let user = load_caller(self.users.as_ref(), caller).await?;
        self.properties
            .list_by_owner(&caller.user_id, user.email.as_str())
            .await
    }
}

pub struct UpdatePropertyUseCase<P, U> {
    properties: Arc<P>,
    users: Arc<U>,
}

impl<P, U> UpdatePropertyUseCase<P, U>
where
    P: PropertyRepository,
    U: UserRepository,
{
    pub fn new(properties: Arc<P>, users: Arc<U>) -> Self {
        Self { properties, users }
    }

    pub async fn execute(
        &self,
        caller: &AuthUser,
        id: &PropertyId,
        draft: PropertyDraft,
    ) -> HousingResult<Property> {
        draft.validate()?;

        let mut property = self
            .properties
            .find_by_id(id)
            .await?
            .ok_or(HousingError::PropertyNotFound)?;

        let user = load_caller(self.users.as_ref(), caller).await?;
        authorize_mutation(&property, caller, &user)?;

        draft.apply_to(&mut property);
        property.touch();
        self.properties.update(&property).await?;

        Ok(property)
    }
}

pub struct DeletePropertyUseCase<P, U> {
    properties: Arc<P>,
    users: Arc<U>,
}

impl<P, U> DeletePropertyUseCase<P, U>
where
    P: PropertyRepository,
    U: UserRepository,
{
    pub fn new(properties: Arc<P>, users: Arc<U>) -> Self {
        Self { properties, users }
    }

    pub async fn execute(&self, caller: &AuthUser, id: &PropertyId) -> HousingResult<()> {
        let property = self
            .properties
            .find_by_id(id)
            .await?
            .ok_or(HousingError::PropertyNotFound)?;

        let user = load_caller(self.users.as_ref(), caller).await?;
        authorize_mutation(&property, caller, &user)?;

        self.properties.delete(id).await?;

        tracing::info!(property_id = %id, by = %caller.user_id, "Listing deleted");

        Ok(())
    }
}
