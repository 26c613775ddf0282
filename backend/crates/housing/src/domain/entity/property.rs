//! Property Entity

use chrono::{DateTime, Utc};
use kernel::id::{PropertyId, UserId};

use crate::domain::value_object::{LeaseDuration, PropertyCategory};

/// A housing listing
///
/// Ownership is dual-keyed: by account id and by email. The email key exists
/// because listings can be created by admins on behalf of owners who
/// registered later; the authorization matrix honors either.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub id: PropertyId,
    pub title: String,
    pub location: String,
    /// Monthly price in whole currency units
    pub price: i64,
    pub category: PropertyCategory,
    /// Ordered photo references
    pub photos: Vec<String>,
    pub description: Option<String>,
    pub amenities: Vec<String>,
    pub terms: Option<String>,
    pub rented: bool,
    pub duration: LeaseDuration,
    pub owner_id: Option<UserId>,
    /// Lowercased owner email
    pub owner_email: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Property {
    /// Whether `user_id`/`email` may modify this listing (admin bypasses
    /// this check entirely)
    pub fn is_owned_by(&self, user_id: &UserId, email: &str) -> bool {
        if self.owner_id.as_ref() == Some(user_id) {
            return true;
        }
        match &self.owner_email {
            Some(owner_email) => owner_email.eq_ignore_ascii_case(email.trim()),
            None => false,
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Case-insensitive substring containment, both directions
///
/// The fan-out's notion of "same area": "Berlin Mitte" matches a bookmark
/// in "berlin", and vice versa. Blank locations never match.
pub fn locations_match(a: &str, b: &str) -> bool {
    let a = a.trim().to_lowercase();
    let b = b.trim().to_lowercase();
    if a.is_empty() || b.is_empty() {
        return false;
    }
    a.contains(&b) || b.contains(&a)
}
