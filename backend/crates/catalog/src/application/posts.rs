//! Guide Post Use Cases
//!
//! Reads are public; the admin gate on mutations is the router's concern,
//! so the use cases only validate and persist.

use std::sync::Arc;

use chrono::Utc;
use kernel::id::{PostId, UserId};

use crate::domain::entity::Post;
use crate::domain::repository::{PostFilter, PostRepository};
use crate::domain::value_object::PostKind;
use crate::error::{CatalogError, CatalogResult};

/// Incoming post fields, shared by create and update
#[derive(Debug, Clone)]
pub struct PostDraft {
    pub kind: PostKind,
    pub title: String,
    pub body: String,
    pub country: Option<String>,
    pub university: Option<String>,
    pub program: Option<String>,
    pub tags: Vec<String>,
}

impl PostDraft {
    fn validate(&self) -> CatalogResult<()> {
        if self.title.trim().is_empty() {
            return Err(CatalogError::Validation("Title is required".to_string()));
        }
        if self.body.trim().is_empty() {
            return Err(CatalogError::Validation("Body is required".to_string()));
        }
        Ok(())
    }

    fn apply_to(self, post: &mut Post) {
        post.kind = self.kind;
        post.title = self.title.trim().to_string();
        post.body = self.body;
        post.country = self.country;
        post.university = self.university;
        post.program = self.program;
        post.tags = self.tags;
    }
}

pub struct CreatePostUseCase<P> {
    posts: Arc<P>,
}

impl<P: PostRepository> CreatePostUseCase<P> {
    pub fn new(posts: Arc<P>) -> Self {
        Self { posts }
    }

    pub async fn execute(&self, author_id: &UserId, draft: PostDraft) -> CatalogResult<Post> {
        draft.validate()?;

        let now = Utc::now();
        let mut post = Post {
            id: PostId::new(),
            kind: draft.kind,
            title: String::new(),
            body: String::new(),
            country: None,
            university: None,
            program: None,
            tags: vec![],
            author_id: Some(*author_id),
            created_at: now,
            updated_at: now,
        };
        draft.apply_to(&mut post);

        self.posts.create(&post).await?;

        tracing::info!(post_id = %post.id, kind = %post.kind, "Guide post created");

        Ok(post)
    }
}

pub struct GetPostUseCase<P> {
    posts: Arc<P>,
}

impl<P: PostRepository> GetPostUseCase<P> {
    pub fn new(posts: Arc<P>) -> Self {
        Self { posts }
    }

    pub async fn execute(&self, id: &PostId) -> CatalogResult<Post> {
        self.posts
            .find_by_id(id)
            .await?
            .ok_or(CatalogError::PostNotFound)
    }
}

pub struct ListPostsUseCase<P> {
    posts: Arc<P>,
}

impl<P: PostRepository> ListPostsUseCase<P> {
    pub fn new(posts: Arc<P>) -> Self {
        Self { posts }
    }

    pub async fn execute(&self, filter: &PostFilter) -> CatalogResult<Vec<Post>> {
        self.posts.list(filter).await
    }
}

pub struct UpdatePostUseCase<P> {
    posts: Arc<P>,
}

impl<P: PostRepository> UpdatePostUseCase<P> {
    pub fn new(posts: Arc<P>) -> Self {
        Self { posts }
    }

    pub async fn execute(&self, id: &PostId, draft: PostDraft) -> CatalogResult<Post> {
        draft.validate()?;

        let mut post = self
            .posts
            .find_by_id(id)
            .await?
            .ok_or(CatalogError::PostNotFound)?;

        draft.apply_to(&mut post);
        post.touch();
        self.posts.update(&post).await?;

        Ok(post)
    }
}

pub struct DeletePostUseCase<P> {
    posts: Arc<P>,
}

impl<P: PostRepository> DeletePostUseCase<P> {
    pub fn new(posts: Arc<P>) -> Self {
        Self { posts }
    }

    pub async fn execute(&self, id: &PostId) -> CatalogResult<()> {
        self.posts.delete(id).await
    }
}
