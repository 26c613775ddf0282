//! Email Value Object
//!
//! Canonical form is lowercase; equality and uniqueness are defined on it.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum email length (RFC 5321 path limit)
const MAX_EMAIL_LENGTH: usize = 254;

/// Email validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmailError {
    #[error("Email cannot be empty")]
    Empty,

    #[error("Email is too long (max {MAX_EMAIL_LENGTH} characters)")]
    TooLong,

    #[error("Email format is invalid")]
    InvalidFormat,
}

/// Validated, lowercased email address
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    pub fn new(raw: impl AsRef<str>) -> Result<Self, EmailError> {
        let trimmed = raw.as_ref().trim();

        if trimmed.is_empty() {
            return Err(EmailError::Empty);
        }
        if trimmed.len() > MAX_EMAIL_LENGTH {
            return Err(EmailError::TooLong);
        }

        // local@domain, domain must contain a dot with content around it
        let (local, domain) = trimmed.split_once('@').ok_or(EmailError::InvalidFormat)?;
        if local.is_empty() || domain.is_empty() {
            return Err(EmailError::InvalidFormat);
        }
        let (host, tld) = domain.rsplit_once('.').ok_or(EmailError::InvalidFormat)?;
        if host.is_empty() || tld.is_empty() || trimmed.contains(char::is_whitespace) {
            return Err(EmailError::InvalidFormat);
        }

        Ok(Self(trimmed.to_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison against an arbitrary string
    pub fn matches(&self, other: &str) -> bool {
        self.0 == other.trim().to_lowercase()
    }
}

impl TryFrom<String> for Email {
    type Error = EmailError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email_is_lowercased() {
        let email = Email::new("Student@Example.COM").unwrap();
        assert_eq!(email.as_str(), "student@example.com");
    }

    #[test]
    fn test_surrounding_whitespace_trimmed() {
        let email = Email::new("  owner@example.com  ").unwrap();
        assert_eq!(email.as_str(), "owner@example.com");
    }

    #[test]
    fn test_invalid_emails_rejected() {
        assert_eq!(Email::new(""), Err(EmailError::Empty));
        assert_eq!(Email::new("no-at-sign"), Err(EmailError::InvalidFormat));
        assert_eq!(Email::new("@example.com"), Err(EmailError::InvalidFormat));
        assert_eq!(Email::new("user@"), Err(EmailError::InvalidFormat));
        assert_eq!(Email::new("user@nodot"), Err(EmailError::InvalidFormat));
        assert_eq!(Email::new("user @example.com"), Err(EmailError::InvalidFormat));
    }

    #[test]
    fn test_matches_is_case_insensitive() {
        let email = Email::new("owner@example.com").unwrap();
        assert!(email.matches("OWNER@Example.Com"));
        assert!(email.matches(" owner@example.com "));
        assert!(!email.matches("other@example.com"));
    }
}
