//! User Role Value Object

use derive_more::Display;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Role parsing errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown user role: {0}")]
pub struct UnknownRole(pub String);

/// Account role
///
/// Students browse and bookmark; landowners list housing (after
/// verification); admins review verification requests and manage catalog
/// content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    #[display("student")]
    Student,
    #[display("landowner")]
    Landowner,
    #[display("admin")]
    Admin,
}

impl UserRole {
    /// Stable storage/wire code
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Student => "student",
            UserRole::Landowner => "landowner",
            UserRole::Admin => "admin",
        }
    }

    pub fn parse(code: &str) -> Result<Self, UnknownRole> {
        match code {
            "student" => Ok(UserRole::Student),
            "landowner" => Ok(UserRole::Landowner),
            "admin" => Ok(UserRole::Admin),
            other => Err(UnknownRole(other.to_string())),
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }

    pub fn is_landowner(&self) -> bool {
        matches!(self, UserRole::Landowner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_codes_roundtrip() {
        for role in [UserRole::Student, UserRole::Landowner, UserRole::Admin] {
            assert_eq!(UserRole::parse(role.as_str()), Ok(role));
        }
    }

    #[test]
    fn test_unknown_role_rejected() {
        assert!(UserRole::parse("superadmin").is_err());
    }

    #[test]
    fn test_default_is_student() {
        assert_eq!(UserRole::default(), UserRole::Student);
    }
}
