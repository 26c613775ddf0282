//! Bookmark Use Cases

use std::sync::Arc;

use kernel::id::{BookmarkId, UserId};
use uuid::Uuid;

use crate::domain::entity::bookmark::Bookmark;
use crate::domain::repository::BookmarkRepository;
use crate::domain::value_object::ItemType;
use crate::error::{HousingError, HousingResult};

pub struct AddBookmarkUseCase<B> {
    bookmarks: Arc<B>,
}

impl<B: BookmarkRepository> AddBookmarkUseCase<B> {
    pub fn new(bookmarks: Arc<B>) -> Self {
        Self { bookmarks }
    }

    /// Save an item; a duplicate (user, type, item) triple is a Conflict
    pub async fn execute(
        &self,
        user_id: &UserId,
        item_type: ItemType,
        item_id: Uuid,
    ) -> HousingResult<Bookmark> {
        let bookmark = Bookmark::new(*user_id, item_type, item_id);
        self.bookmarks.create(&bookmark).await?;

        tracing::debug!(user_id = %user_id, item_type = %item_type, %item_id, "Bookmark added");

        Ok(bookmark)
    }
}

pub struct ListBookmarksUseCase<B> {
    bookmarks: Arc<B>,
}

impl<B: BookmarkRepository> ListBookmarksUseCase<B> {
    pub fn new(bookmarks: Arc<B>) -> Self {
        Self { bookmarks }
    }

    pub async fn execute(&self, user_id: &UserId) -> HousingResult<Vec<Bookmark>> {
        self.bookmarks.list_by_user(user_id).await
    }
}

pub struct RemoveBookmarkUseCase<B> {
    bookmarks: Arc<B>,
}

impl<B: BookmarkRepository> RemoveBookmarkUseCase<B> {
    pub fn new(bookmarks: Arc<B>) -> Self {
        Self { bookmarks }
    }

    /// Remove the caller's own bookmark by id
    pub async fn execute(&self, user_id: &UserId, id: &BookmarkId) -> HousingResult<()> {
        if !self.bookmarks.delete(id, user_id).await? {
            return Err(HousingError::BookmarkNotFound);
        }
        Ok(())
    }
}
