//! User Entity
//!
//! One canonical schema for every account role. Landowner-only fields
//! (`document_ref`, `is_verified_landowner`) stay at their defaults for
//! students and admins; `is_verified_landowner` is true only when
//! `role == Landowner`.

use chrono::{DateTime, Utc};
use kernel::id::UserId;

use crate::domain::value_object::{Email, Subscription, UserRole};

/// A platform account
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: Email,
    /// Argon2id PHC string; never serialized outward
    pub password_hash: String,
    pub role: UserRole,
    /// Opaque reference to the uploaded ownership document (landowners)
    pub document_ref: Option<String>,
    pub is_verified_landowner: bool,
    pub phone: Option<String>,
    pub whatsapp_ref: Option<String>,
    pub social_ref: Option<String>,
    pub subscription: Subscription,
    pub has_chosen_plan: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new student account
    pub fn new_student(name: String, email: Email, password_hash: String) -> Self {
        Self::new(name, email, password_hash, UserRole::Student, None)
    }

    /// Create a new unverified landowner account with its ownership document
    pub fn new_landowner(
        name: String,
        email: Email,
        password_hash: String,
        document_ref: String,
    ) -> Self {
        Self::new(
            name,
            email,
            password_hash,
            UserRole::Landowner,
            Some(document_ref),
        )
    }

    fn new(
        name: String,
        email: Email,
        password_hash: String,
        role: UserRole,
        document_ref: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: UserId::new(),
            name,
            email,
            password_hash,
            role,
            document_ref,
            is_verified_landowner: false,
            phone: None,
            whatsapp_ref: None,
            social_ref: None,
            subscription: Subscription::default(),
            has_chosen_plan: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Mark the entity as modified
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Grant the verified-landowner flag; only meaningful for landowners
    pub fn mark_verified(&mut self) {
        if self.role == UserRole::Landowner {
            self.is_verified_landowner = true;
            self.touch();
        }
    }

    /// Whether this account may create property listings
    pub fn can_list_properties(&self) -> bool {
        self.role.is_admin() || (self.role.is_landowner() && self.is_verified_landowner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email() -> Email {
        Email::new("user@example.com").unwrap()
    }

    #[test]
    fn test_new_student_defaults() {
        let user = User::new_student("Aki".to_string(), email(), "$argon2id$x".to_string());
        assert_eq!(user.role, UserRole::Student);
        assert!(!user.is_verified_landowner);
        assert!(user.document_ref.is_none());
        assert!(!user.has_chosen_plan);
    }

    #[test]
    fn test_mark_verified_only_applies_to_landowners() {
        let mut student = User::new_student("Aki".to_string(), email(), "h".to_string());
        student.mark_verified();
        assert!(!student.is_verified_landowner);

        let mut landowner =
            User::new_landowner("Lee".to_string(), email(), "h".to_string(), "doc.pdf".to_string());
        landowner.mark_verified();
        assert!(landowner.is_verified_landowner);
    }

    #[test]
    fn test_listing_permission_matrix() {
        let student = User::new_student("Aki".to_string(), email(), "h".to_string());
        assert!(!student.can_list_properties());

        let mut landowner =
            User::new_landowner("Lee".to_string(), email(), "h".to_string(), "doc.pdf".to_string());
        assert!(!landowner.can_list_properties());
        landowner.mark_verified();
        assert!(landowner.can_list_properties());

        let mut admin = User::new_student("Root".to_string(), email(), "h".to_string());
        admin.role = UserRole::Admin;
        assert!(admin.can_list_properties());
    }
}
