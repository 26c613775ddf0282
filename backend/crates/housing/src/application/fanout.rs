//! Listing Fan-Out
//!
//! After a listing is durably created, every PROPERTY bookmark in the system
//! is scanned: when the new location and the bookmarked listing's location
//! contain each other (case-insensitive, either direction) the bookmark's
//! owner gets one notification row and one best-effort email.
//!
//! Sequential, no retry, no dedupe; a user whose two bookmarks both match
//! gets notified twice. Nothing here can fail the create request.

use std::sync::Arc;

use auth::domain::repository::UserRepository;
use platform::mailer::{Mailer, send_best_effort};

use crate::application::emails;
use crate::domain::entity::notification::Notification;
use crate::domain::entity::property::{Property, locations_match};
use crate::domain::repository::{
    BookmarkRepository, NotificationRepository, PropertyRepository,
};
use crate::domain::value_object::ItemType;

pub struct ListingFanOut<P, B, N, U, M> {
    properties: Arc<P>,
    bookmarks: Arc<B>,
    notifications: Arc<N>,
    users: Arc<U>,
    mailer: Arc<M>,
}

impl<P, B, N, U, M> ListingFanOut<P, B, N, U, M>
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
        Self {
            properties,
            bookmarks,
            notifications,
            users,
            mailer,
        }
    }

    /// Notify everyone whose property bookmark matches the new listing's
    /// area. Returns the number of notifications written; errors are logged
    /// per recipient and swallowed.
    pub async fn notify_bookmarkers(&self, new_property: &Property) -> usize {
        let bookmarks = match self.bookmarks.list_by_item_type(ItemType::Property).await {
            Ok(bookmarks) => bookmarks,
            Err(e) => {
                tracing::warn!(error = %e, "Fan-out: bookmark scan failed, skipping");
                return 0;
            }
        };

        let mut notified = 0;

        for bookmark in bookmarks {
            let bookmarked_id = kernel::id::PropertyId::from_uuid(bookmark.item_id);
            let bookmarked = match self.properties.find_by_id(&bookmarked_id).await {
                Ok(Some(property)) => property,
                Ok(None) => continue,
                Err(e) => {
                    tracing::warn!(
                        bookmark_id = %bookmark.id,
                        error = %e,
                        "Fan-out: bookmarked property lookup failed, skipping"
                    );
                    continue;
                }
            };

            if !locations_match(&new_property.location, &bookmarked.location) {
                continue;
            }

            let user = match self.users.find_by_id(&bookmark.user_id).await {
                Ok(Some(user)) => user,
                Ok(None) => continue,
                Err(e) => {
                    tracing::warn!(
                        user_id = %bookmark.user_id,
                        error = %e,
                        "Fan-out: user lookup failed, skipping"
                    );
                    continue;
                }
            };

            let notification = Notification::new_listing(
                user.id,
                new_property.id,
                format!(
                    "New property in {}: {}",
                    new_property.location, new_property.title
                ),
            );
            if let Err(e) = self.notifications.create(&notification).await {
                tracing::warn!(
                    user_id = %user.id,
                    error = %e,
                    "Fan-out: notification write failed, skipping recipient"
                );
                continue;
            }
            notified += 1;

            send_best_effort(
                self.mailer.as_ref(),
                emails::new_listing_email(user.email.as_str(), new_property),
            )
            .await;
        }

        tracing::info!(
            property_id = %new_property.id,
            notified,
            "Listing fan-out complete"
        );

        notified
    }
}
