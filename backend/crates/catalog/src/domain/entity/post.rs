//! Guide Post Entity

use chrono::{DateTime, Utc};
use kernel::id::{PostId, UserId};

use crate::domain::value_object::PostKind;

/// A guide article (SOP or visa content), written by admins, read by anyone
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: PostId,
    pub kind: PostKind,
    pub title: String,
    pub body: String,
    pub country: Option<String>,
    pub university: Option<String>,
    pub program: Option<String>,
    pub tags: Vec<String>,
    /// The admin who authored it
    pub author_id: Option<UserId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
