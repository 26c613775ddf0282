//! Use-case level tests for listings, fan-out, contact disclosure,
//! bookmarks, and notifications, over in-memory repositories and a
//! recording mailer.

use std::sync::{Arc, Mutex};

use auth::domain::repository::UserRepository;
use auth::middleware::AuthUser;
use auth::models::{Email, User, UserRole};
use chrono::Utc;
use kernel::id::{BookmarkId, NotificationId, PropertyId, UserId};
use platform::mailer::{MailReceipt, Mailer, MailerError, OutgoingMail};
use uuid::Uuid;

use crate::application::{
    AddBookmarkUseCase, CreatePropertyUseCase, DeletePropertyUseCase, ListBookmarksUseCase,
    ListMineUseCase, ListNotificationsUseCase, ListPropertiesUseCase, MarkNotificationReadUseCase,
    PropertyDraft, RemoveBookmarkUseCase, RequestContactUseCase, UpdatePropertyUseCase,
};
use crate::domain::entity::bookmark::Bookmark;
use crate::domain::entity::notification::Notification;
use crate::domain::entity::property::Property;
use crate::domain::repository::{
    BookmarkRepository, NotificationRepository, PropertyFilter, PropertyRepository,
};
use crate::domain::value_object::{ItemType, LeaseDuration, PropertyCategory};
use crate::error::{HousingError, HousingResult};

// ============================================================================
// Test doubles
// ============================================================================

#[derive(Clone, Default)]
struct MemoryUserRepository {
    users: Arc<Mutex<Vec<User>>>,
}

impl UserRepository for MemoryUserRepository {
    async fn create(&self, user: &User) -> auth::AuthResult<()> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == user.email) {
            return Err(auth::AuthError::EmailTaken);
        }
        users.push(user.clone());
        Ok(())
    }

    async fn find_by_id(&self, user_id: &UserId) -> auth::AuthResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| &u.id == user_id)
            .cloned())
    }

    async fn find_by_email(&self, email: &Email) -> auth::AuthResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| &u.email == email)
            .cloned())
    }

    async fn exists_by_email(&self, email: &Email) -> auth::AuthResult<bool> {
        Ok(self.users.lock().unwrap().iter().any(|u| &u.email == email))
    }

    async fn update(&self, user: &User) -> auth::AuthResult<()> {
        let mut users = self.users.lock().unwrap();
        let existing = users
            .iter_mut()
            .find(|u| u.id == user.id)
            .ok_or(auth::AuthError::UserNotFound)?;
        *existing = user.clone();
        Ok(())
    }
}

/// One in-memory repository for all three housing tables, mirroring the
/// PostgreSQL implementation's semantics (ordering, uniqueness, ownership)
#[derive(Clone, Default)]
struct MemoryHousingRepository {
    properties: Arc<Mutex<Vec<Property>>>,
    bookmarks: Arc<Mutex<Vec<Bookmark>>>,
    notifications: Arc<Mutex<Vec<Notification>>>,
}

impl PropertyRepository for MemoryHousingRepository {
    async fn create(&self, property: &Property) -> HousingResult<()> {
        self.properties.lock().unwrap().push(property.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &PropertyId) -> HousingResult<Option<Property>> {
        Ok(self
            .properties
            .lock()
            .unwrap()
            .iter()
            .find(|p| &p.id == id)
            .cloned())
    }

    async fn list(&self, filter: &PropertyFilter) -> HousingResult<Vec<Property>> {
        let mut matches: Vec<Property> = self
            .properties
            .lock()
            .unwrap()
            .iter()
            .filter(|p| match &filter.location {
                Some(loc) => p.location.to_lowercase().contains(&loc.to_lowercase()),
                None => true,
            })
            .filter(|p| filter.category.is_none_or(|c| p.category == c))
            .filter(|p| filter.max_price.is_none_or(|max| p.price <= max))
            .cloned()
            .collect();
        matches.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(matches)
    }

    async fn list_by_owner(
        &self,
        owner_id: &UserId,
        owner_email: &str,
    ) -> HousingResult<Vec<Property>> {
        let mut matches: Vec<Property> = self
            .properties
            .lock()
            .unwrap()
            .iter()
            .filter(|p| {
                p.owner_id.as_ref() == Some(owner_id)
                    || p.owner_email
                        .as_deref()
                        .is_some_and(|e| e.eq_ignore_ascii_case(owner_email))
            })
            .cloned()
            .collect();
        matches.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(matches)
    }

    async fn update(&self, property: &Property) -> HousingResult<()> {
        let mut properties = self.properties.lock().unwrap();
        let existing = properties
            .iter_mut()
            .find(|p| p.id == property.id)
            .ok_or(HousingError::PropertyNotFound)?;
        *existing = property.clone();
        Ok(())
    }

    async fn delete(&self, id: &PropertyId) -> HousingResult<()> {
        let mut properties = self.properties.lock().unwrap();
        let before = properties.len();
        properties.retain(|p| &p.id != id);
        if properties.len() == before {
            return Err(HousingError::PropertyNotFound);
        }
        Ok(())
    }
}

impl BookmarkRepository for MemoryHousingRepository {
    async fn create(&self, bookmark: &Bookmark) -> HousingResult<()> {
        let mut bookmarks = self.bookmarks.lock().unwrap();
        let duplicate = bookmarks.iter().any(|b| {
            b.user_id == bookmark.user_id
                && b.item_type == bookmark.item_type
                && b.item_id == bookmark.item_id
        });
        if duplicate {
            return Err(HousingError::DuplicateBookmark);
        }
        bookmarks.push(bookmark.clone());
        Ok(())
    }

    async fn list_by_user(&self, user_id: &UserId) -> HousingResult<Vec<Bookmark>> {
        let mut matches: Vec<Bookmark> = self
            .bookmarks
            .lock()
            .unwrap()
            .iter()
            .filter(|b| &b.user_id == user_id)
            .cloned()
            .collect();
        matches.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(matches)
    }

    async fn list_by_item_type(&self, item_type: ItemType) -> HousingResult<Vec<Bookmark>> {
        Ok(self
            .bookmarks
            .lock()
            .unwrap()
            .iter()
            .filter(|b| b.item_type == item_type)
            .cloned()
            .collect())
    }

    async fn delete(&self, id: &BookmarkId, user_id: &UserId) -> HousingResult<bool> {
        let mut bookmarks = self.bookmarks.lock().unwrap();
        let before = bookmarks.len();
        bookmarks.retain(|b| !(&b.id == id && &b.user_id == user_id));
        Ok(bookmarks.len() < before)
    }

    async fn delete_by_item(
        &self,
        user_id: &UserId,
        item_type: ItemType,
        item_id: Uuid,
    ) -> HousingResult<bool> {
        let mut bookmarks = self.bookmarks.lock().unwrap();
        let before = bookmarks.len();
        bookmarks.retain(|b| {
            !(&b.user_id == user_id && b.item_type == item_type && b.item_id == item_id)
        });
        Ok(bookmarks.len() < before)
    }
}

impl NotificationRepository for MemoryHousingRepository {
    async fn create(&self, notification: &Notification) -> HousingResult<()> {
        self.notifications.lock().unwrap().push(notification.clone());
        Ok(())
    }

    async fn list_by_user(&self, user_id: &UserId) -> HousingResult<Vec<Notification>> {
        let mut matches: Vec<Notification> = self
            .notifications
            .lock()
            .unwrap()
            .iter()
            .filter(|n| &n.user_id == user_id)
            .cloned()
            .collect();
        matches.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(matches)
    }

    async fn mark_read(&self, id: &NotificationId, user_id: &UserId) -> HousingResult<bool> {
        let mut notifications = self.notifications.lock().unwrap();
        match notifications
            .iter_mut()
            .find(|n| &n.id == id && &n.user_id == user_id)
        {
            Some(notification) => {
                notification.read = true;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

/// Mailer double that records every delivery
#[derive(Clone, Default)]
struct RecordingMailer {
    sent: Arc<Mutex<Vec<OutgoingMail>>>,
}

impl RecordingMailer {
    fn sent(&self) -> Vec<OutgoingMail> {
        self.sent.lock().unwrap().clone()
    }
}

impl Mailer for RecordingMailer {
    async fn send(&self, mail: &OutgoingMail) -> Result<MailReceipt, MailerError> {
        self.sent.lock().unwrap().push(mail.clone());
        Ok(MailReceipt {
            message_id: format!("msg-{}", self.sent.lock().unwrap().len()),
            preview_url: Some("https://mail.preview.invalid/test".to_string()),
        })
    }
}

struct FailingMailer;

impl Mailer for FailingMailer {
    async fn send(&self, _mail: &OutgoingMail) -> Result<MailReceipt, MailerError> {
        Err(MailerError::Transport("connection refused".to_string()))
    }
}

// ============================================================================
// Harness
// ============================================================================

struct Harness {
    repo: Arc<MemoryHousingRepository>,
    users: Arc<MemoryUserRepository>,
    mailer: Arc<RecordingMailer>,
}

impl Harness {
    fn new() -> Self {
        Self {
            repo: Arc::new(MemoryHousingRepository::default()),
            users: Arc::new(MemoryUserRepository::default()),
            mailer: Arc::new(RecordingMailer::default()),
        }
    }

    async fn student(&self, name: &str, email: &str) -> User {
        let user = User::new_student(
            name.to_string(),
            Email::new(email).unwrap(),
            "$argon2id$v=19$m=19456,t=2,p=1$AAAAAAAA$AAAAAAAA".to_string(),
        );
        self.users.create(&user).await.unwrap();
        user
    }

    async fn verified_landowner(&self, name: &str, email: &str) -> User {
        let mut user = User::new_landowner(
            name.to_string(),
            Email::new(email).unwrap(),
            "$argon2id$v=19$m=19456,t=2,p=1$AAAAAAAA$AAAAAAAA".to_string(),
            "deed.pdf".to_string(),
        );
        user.mark_verified();
        self.users.create(&user).await.unwrap();
        user
    }

    async fn admin(&self) -> User {
        let mut user = User::new_student(
            "Root".to_string(),
            Email::new("admin@example.com").unwrap(),
            "$argon2id$v=19$m=19456,t=2,p=1$AAAAAAAA$AAAAAAAA".to_string(),
        );
        user.role = UserRole::Admin;
        self.users.create(&user).await.unwrap();
        user
    }

    fn create(
        &self,
    ) -> CreatePropertyUseCase<
        MemoryHousingRepository,
        MemoryHousingRepository,
        MemoryHousingRepository,
        MemoryUserRepository,
        RecordingMailer,
    > {
        CreatePropertyUseCase::new(
            self.repo.clone(),
            self.repo.clone(),
            self.repo.clone(),
            self.users.clone(),
            self.mailer.clone(),
        )
    }

    fn update(&self) -> UpdatePropertyUseCase<MemoryHousingRepository, MemoryUserRepository> {
        UpdatePropertyUseCase::new(self.repo.clone(), self.users.clone())
    }

    fn delete(&self) -> DeletePropertyUseCase<MemoryHousingRepository, MemoryUserRepository> {
        DeletePropertyUseCase::new(self.repo.clone(), self.users.clone())
    }

    fn contact(
        &self,
    ) -> RequestContactUseCase<MemoryHousingRepository, MemoryUserRepository, RecordingMailer> {
        RequestContactUseCase::new(self.repo.clone(), self.users.clone(), self.mailer.clone())
    }

    /// Insert a listing directly, bypassing the create use case
    async fn seed_listing(
        &self,
        location: &str,
        owner_id: Option<UserId>,
        owner_email: Option<&str>,
    ) -> Property {
        let now = Utc::now();
        let property = Property {
            id: PropertyId::new(),
            title: format!("Listing in {location}"),
            location: location.to_string(),
            price: 700,
            category: PropertyCategory::Apartment,
            photos: vec![],
            description: None,
            amenities: vec![],
            terms: None,
            rented: false,
            duration: LeaseDuration::Flexible,
            owner_id,
            owner_email: owner_email.map(str::to_string),
            created_at: now,
            updated_at: now,
        };
        PropertyRepository::create(self.repo.as_ref(), &property)
            .await
            .unwrap();
        property
    }
}

fn auth(user: &User) -> AuthUser {
    AuthUser {
        user_id: user.id,
        role: user.role,
    }
}

fn draft(title: &str, location: &str, price: i64) -> PropertyDraft {
    PropertyDraft {
        title: title.to_string(),
        location: location.to_string(),
        price,
        category: PropertyCategory::Apartment,
        photos: vec![],
        description: None,
        amenities: vec![],
        terms: None,
        rented: false,
        duration: LeaseDuration::OneYear,
    }
}

// ============================================================================
// Listing creation
// ============================================================================

#[tokio::test]
async fn test_only_verified_landowners_or_admins_create_listings() {
    let h = Harness::new();

    let student = h.student("Aki", "aki@example.com").await;
    let denied = h
        .create()
        .execute(&auth(&student), draft("Flat", "Berlin", 700))
        .await;
    assert!(matches!(denied, Err(HousingError::Forbidden(_))));

    let mut unverified = User::new_landowner(
        "Lee".to_string(),
        Email::new("lee@example.com").unwrap(),
        "h".to_string(),
        "deed.pdf".to_string(),
    );
    unverified.is_verified_landowner = false;
    h.users.create(&unverified).await.unwrap();
    let gated = h
        .create()
        .execute(&auth(&unverified), draft("Flat", "Berlin", 700))
        .await;
    assert!(matches!(gated, Err(HousingError::Forbidden(_))));

    let owner = h.verified_landowner("Mia", "Mia@Example.Com").await;
    let property = h
        .create()
        .execute(&auth(&owner), draft("Flat", "Berlin", 700))
        .await
        .unwrap();

    // Both ownership keys are stamped; the email one lowercased
    assert_eq!(property.owner_id, Some(owner.id));
    assert_eq!(property.owner_email.as_deref(), Some("mia@example.com"));
}

#[tokio::test]
async fn test_create_validates_required_fields() {
    let h = Harness::new();
    let owner = h.verified_landowner("Mia", "mia@example.com").await;

    let blank_title = h
        .create()
        .execute(&auth(&owner), draft("   ", "Berlin", 700))
        .await;
    assert!(matches!(blank_title, Err(HousingError::Validation(_))));

    let negative_price = h
        .create()
        .execute(&auth(&owner), draft("Flat", "Berlin", -1))
        .await;
    assert!(matches!(negative_price, Err(HousingError::Validation(_))));
}

// ============================================================================
// Ownership matrix
// ============================================================================

#[tokio::test]
async fn test_update_and_delete_honor_the_ownership_matrix() {
    let h = Harness::new();
    let owner = h.verified_landowner("Mia", "mia@example.com").await;
    let stranger = h.verified_landowner("Lee", "lee@example.com").await;
    let admin = h.admin().await;

    let property = h
        .create()
        .execute(&auth(&owner), draft("Flat", "Berlin", 700))
        .await
        .unwrap();

    let denied = h
        .update()
        .execute(&auth(&stranger), &property.id, draft("Hijacked", "Berlin", 1))
        .await;
    assert!(matches!(denied, Err(HousingError::Forbidden(_))));

    let updated = h
        .update()
        .execute(&auth(&owner), &property.id, draft("Flat v2", "Berlin", 750))
        .await
        .unwrap();
    assert_eq!(updated.title, "Flat v2");
    assert_eq!(updated.price, 750);

    // Admins bypass ownership entirely
    h.delete().execute(&auth(&admin), &property.id).await.unwrap();
    let gone = h.delete().execute(&auth(&owner), &property.id).await;
    assert!(matches!(gone, Err(HousingError::PropertyNotFound)));
}

#[tokio::test]
async fn test_email_keyed_listing_is_editable_by_that_account() {
    let h = Harness::new();
    let owner = h.verified_landowner("Mia", "mia@example.com").await;

    // Created on the owner's behalf before they had an account id on it
    let property = h.seed_listing("Berlin", None, Some("MIA@example.com")).await;

    let updated = h
        .update()
        .execute(&auth(&owner), &property.id, draft("Claimed", "Berlin", 800))
        .await
        .unwrap();
    assert_eq!(updated.title, "Claimed");

    let mine = ListMineUseCase::new(h.repo.clone(), h.users.clone())
        .execute(&auth(&owner))
        .await
        .unwrap();
    assert_eq!(mine.len(), 1);
}

// ============================================================================
// Search
// ============================================================================

#[tokio::test]
async fn test_listing_search_filters_combine() {
    let h = Harness::new();
    h.seed_listing("Berlin Mitte", None, None).await;
    let mut cheap = h.seed_listing("Berlin Wedding", None, None).await;
    cheap.price = 400;
    cheap.category = PropertyCategory::Room;
    PropertyRepository::update(h.repo.as_ref(), &cheap).await.unwrap();
    h.seed_listing("Munich", None, None).await;

    let list = ListPropertiesUseCase::new(h.repo.clone());

    let berlin = list
        .execute(&PropertyFilter {
            location: Some("berlin".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(berlin.len(), 2);

    let cheap_rooms = list
        .execute(&PropertyFilter {
            location: Some("berlin".to_string()),
            category: Some(PropertyCategory::Room),
            max_price: Some(500),
        })
        .await
        .unwrap();
    assert_eq!(cheap_rooms.len(), 1);
    assert_eq!(cheap_rooms[0].location, "Berlin Wedding");

    let all = list.execute(&PropertyFilter::default()).await.unwrap();
    assert_eq!(all.len(), 3);
}

// ============================================================================
// Fan-out
// ============================================================================

#[tokio::test]
async fn test_fanout_notifies_matching_bookmarkers() {
    let h = Harness::new();
    let owner = h.verified_landowner("Mia", "mia@example.com").await;
    let matcher = h.student("Aki", "aki@example.com").await;
    let other = h.student("Bo", "bo@example.com").await;

    let berlin = h.seed_listing("Berlin", None, None).await;
    let munich = h.seed_listing("Munich", None, None).await;
    AddBookmarkUseCase::new(h.repo.clone())
        .execute(&matcher.id, ItemType::Property, *berlin.id.as_uuid())
        .await
        .unwrap();
    AddBookmarkUseCase::new(h.repo.clone())
        .execute(&other.id, ItemType::Property, *munich.id.as_uuid())
        .await
        .unwrap();

    let property = h
        .create()
        .execute(&auth(&owner), draft("Sunny flat", "Berlin Mitte", 700))
        .await
        .unwrap();

    let notifications = ListNotificationsUseCase::new(h.repo.clone())
        .execute(&matcher.id)
        .await
        .unwrap();
    assert_eq!(notifications.len(), 1);
    assert!(!notifications[0].read);
    assert_eq!(notifications[0].property_id, Some(property.id));
    assert_eq!(
        notifications[0].message,
        "New property in Berlin Mitte: Sunny flat"
    );

    // The Munich bookmarker hears nothing
    let silent = ListNotificationsUseCase::new(h.repo.clone())
        .execute(&other.id)
        .await
        .unwrap();
    assert!(silent.is_empty());

    let sent = h.mailer.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "aki@example.com");
    assert!(sent[0].subject.contains("Berlin Mitte"));
}

#[tokio::test]
async fn test_fanout_has_no_dedupe_across_bookmarks() {
    let h = Harness::new();
    let owner = h.verified_landowner("Mia", "mia@example.com").await;
    let student = h.student("Aki", "aki@example.com").await;

    let first = h.seed_listing("Berlin Mitte", None, None).await;
    let second = h.seed_listing("Berlin Wedding", None, None).await;
    let add = AddBookmarkUseCase::new(h.repo.clone());
    add.execute(&student.id, ItemType::Property, *first.id.as_uuid())
        .await
        .unwrap();
    add.execute(&student.id, ItemType::Property, *second.id.as_uuid())
        .await
        .unwrap();

    // Both bookmarked locations contain "berlin", so the student is told twice
    h.create()
        .execute(&auth(&owner), draft("Flat", "Berlin", 700))
        .await
        .unwrap();

    let notifications = ListNotificationsUseCase::new(h.repo.clone())
        .execute(&student.id)
        .await
        .unwrap();
    assert_eq!(notifications.len(), 2);
    assert_eq!(h.mailer.sent().len(), 2);
}

#[tokio::test]
async fn test_fanout_skips_dangling_bookmarks() {
    let h = Harness::new();
    let owner = h.verified_landowner("Mia", "mia@example.com").await;
    let student = h.student("Aki", "aki@example.com").await;

    // Bookmark pointing at a listing that no longer exists
    AddBookmarkUseCase::new(h.repo.clone())
        .execute(&student.id, ItemType::Property, Uuid::new_v4())
        .await
        .unwrap();

    let property = h
        .create()
        .execute(&auth(&owner), draft("Flat", "Berlin", 700))
        .await
        .unwrap();

    // The create itself still succeeds, silently
    assert_eq!(property.title, "Flat");
    let notifications = ListNotificationsUseCase::new(h.repo.clone())
        .execute(&student.id)
        .await
        .unwrap();
    assert!(notifications.is_empty());
}

// ============================================================================
// Contact disclosure
// ============================================================================

#[tokio::test]
async fn test_contact_disclosure_emails_the_requester() {
    let h = Harness::new();
    let mut owner = h.verified_landowner("Mia", "mia@example.com").await;
    owner.phone = Some("+49 30 1234".to_string());
    h.users.update(&owner).await.unwrap();
    let student = h.student("Aki", "aki@example.com").await;

    let property = h
        .create()
        .execute(&auth(&owner), draft("Flat", "Berlin", 700))
        .await
        .unwrap();

    let disclosure = h
        .contact()
        .execute(&auth(&student), &property.id)
        .await
        .unwrap();
    assert!(disclosure.receipt.preview_url.is_some());

    let sent = h.mailer.sent();
    let mail = sent.last().unwrap();
    assert_eq!(mail.to, "aki@example.com");
    assert!(mail.html_body.contains("+49 30 1234"));
    // WhatsApp and social were never set
    assert_eq!(mail.html_body.matches("Not provided").count(), 2);

    // Asking twice sends twice; nothing is recorded or deduped
    h.contact().execute(&auth(&student), &property.id).await.unwrap();
    assert_eq!(h.mailer.sent().len(), sent.len() + 1);
}

#[tokio::test]
async fn test_contact_disclosure_refuses_admins_and_owners() {
    let h = Harness::new();
    let owner = h.verified_landowner("Mia", "mia@example.com").await;
    let admin = h.admin().await;

    let property = h
        .create()
        .execute(&auth(&owner), draft("Flat", "Berlin", 700))
        .await
        .unwrap();

    let as_admin = h.contact().execute(&auth(&admin), &property.id).await;
    assert!(matches!(as_admin, Err(HousingError::Forbidden(_))));

    let as_owner = h.contact().execute(&auth(&owner), &property.id).await;
    assert!(matches!(as_owner, Err(HousingError::Forbidden(_))));
}

#[tokio::test]
async fn test_contact_disclosure_resolves_owner_by_email_key() {
    let h = Harness::new();
    let mut owner = h.verified_landowner("Mia", "mia@example.com").await;
    owner.whatsapp_ref = Some("https://wa.me/4930".to_string());
    h.users.update(&owner).await.unwrap();
    let student = h.student("Aki", "aki@example.com").await;

    // No owner_id on the row; resolution falls through to the email key
    let property = h.seed_listing("Berlin", None, Some("mia@example.com")).await;

    h.contact().execute(&auth(&student), &property.id).await.unwrap();
    let sent = h.mailer.sent();
    assert!(sent[0].html_body.contains("https://wa.me/4930"));

    // A listing with no resolvable owner is an error, not an empty email
    let orphan = h.seed_listing("Berlin", None, None).await;
    let result = h.contact().execute(&auth(&student), &orphan.id).await;
    assert!(matches!(result, Err(HousingError::OwnerNotFound)));
}

#[tokio::test]
async fn test_contact_disclosure_fails_when_delivery_fails() {
    let h = Harness::new();
    let owner = h.verified_landowner("Mia", "mia@example.com").await;
    let student = h.student("Aki", "aki@example.com").await;

    let property = h
        .create()
        .execute(&auth(&owner), draft("Flat", "Berlin", 700))
        .await
        .unwrap();

    // The disclosure IS the email; a transport failure must surface
    let use_case =
        RequestContactUseCase::new(h.repo.clone(), h.users.clone(), Arc::new(FailingMailer));
    let result = use_case.execute(&auth(&student), &property.id).await;
    assert!(matches!(result, Err(HousingError::Internal(_))));
}

// ============================================================================
// Bookmarks
// ============================================================================

#[tokio::test]
async fn test_duplicate_bookmark_is_a_conflict() {
    let h = Harness::new();
    let student = h.student("Aki", "aki@example.com").await;
    let item = Uuid::new_v4();

    let add = AddBookmarkUseCase::new(h.repo.clone());
    add.execute(&student.id, ItemType::Post, item).await.unwrap();

    let duplicate = add.execute(&student.id, ItemType::Post, item).await;
    assert!(matches!(duplicate, Err(HousingError::DuplicateBookmark)));

    // Same item under a different type is a distinct bookmark
    add.execute(&student.id, ItemType::University, item).await.unwrap();

    let bookmarks = ListBookmarksUseCase::new(h.repo.clone())
        .execute(&student.id)
        .await
        .unwrap();
    assert_eq!(bookmarks.len(), 2);
}

#[tokio::test]
async fn test_bookmark_removal_is_owner_scoped() {
    let h = Harness::new();
    let student = h.student("Aki", "aki@example.com").await;
    let other = h.student("Bo", "bo@example.com").await;

    let bookmark = AddBookmarkUseCase::new(h.repo.clone())
        .execute(&student.id, ItemType::Post, Uuid::new_v4())
        .await
        .unwrap();

    let remove = RemoveBookmarkUseCase::new(h.repo.clone());

    // Someone else's bookmark id reads as not found
    let denied = remove.execute(&other.id, &bookmark.id).await;
    assert!(matches!(denied, Err(HousingError::BookmarkNotFound)));

    remove.execute(&student.id, &bookmark.id).await.unwrap();
    let again = remove.execute(&student.id, &bookmark.id).await;
    assert!(matches!(again, Err(HousingError::BookmarkNotFound)));
}

// ============================================================================
// Notifications
// ============================================================================

#[tokio::test]
async fn test_notifications_are_newest_first_and_read_is_owner_scoped() {
    let h = Harness::new();
    let student = h.student("Aki", "aki@example.com").await;
    let other = h.student("Bo", "bo@example.com").await;

    let first = Notification::new_listing(student.id, PropertyId::new(), "first".to_string());
    NotificationRepository::create(h.repo.as_ref(), &first).await.unwrap();
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    let second = Notification::new_listing(student.id, PropertyId::new(), "second".to_string());
    NotificationRepository::create(h.repo.as_ref(), &second).await.unwrap();

    let list = ListNotificationsUseCase::new(h.repo.clone());
    let notifications = list.execute(&student.id).await.unwrap();
    assert_eq!(notifications[0].message, "second");
    assert_eq!(notifications[1].message, "first");

    let mark = MarkNotificationReadUseCase::new(h.repo.clone());

    // Only the recipient can mark it read
    let denied = mark.execute(&other.id, &first.id).await;
    assert!(matches!(denied, Err(HousingError::NotificationNotFound)));

    mark.execute(&student.id, &first.id).await.unwrap();
    let after = list.execute(&student.id).await.unwrap();
    assert!(after.iter().find(|n| n.id == first.id).unwrap().read);
    assert!(!after.iter().find(|n| n.id == second.id).unwrap().read);
}
