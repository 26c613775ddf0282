//! Profile Use Cases
//!
//! Fetch and update the caller's own account: display name, password, and
//! the contact channels disclosed to housing applicants.

use std::sync::Arc;

use kernel::id::UserId;
use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};

/// Fetch the caller's account
pub struct GetProfileUseCase<R> {
    repo: Arc<R>,
}

impl<R> GetProfileUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, user_id: &UserId) -> AuthResult<User> {
        self.repo
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)
    }
}

/// Changed fields for a profile update; `None` leaves the field untouched
#[derive(Debug, Default)]
pub struct ProfileChanges {
    pub name: Option<String>,
    pub password: Option<String>,
}

/// Update name and/or password
pub struct UpdateProfileUseCase<R> {
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> UpdateProfileUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, user_id: &UserId, changes: ProfileChanges) -> AuthResult<User> {
        let mut user = self
            .repo
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        if let Some(name) = changes.name {
            let name = name.trim().to_string();
            if name.is_empty() {
                return Err(AuthError::Validation("Name cannot be empty".to_string()));
            }
            user.name = name;
        }

        if let Some(password) = changes.password {
            let password = ClearTextPassword::new(password)?;
            let hash = password.hash(self.config.pepper())?;
            user.password_hash = hash.as_phc_string().to_string();
        }

        user.touch();
        self.repo.update(&user).await?;

        Ok(user)
    }
}

/// Changed contact channels; `None` leaves the field untouched
#[derive(Debug, Default)]
pub struct ContactChanges {
    pub phone: Option<String>,
    pub whatsapp_ref: Option<String>,
    pub social_ref: Option<String>,
}

/// Update the contact channels disclosed by `request-contact`
pub struct UpdateContactUseCase<R> {
    repo: Arc<R>,
}

impl<R> UpdateContactUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, user_id: &UserId, changes: ContactChanges) -> AuthResult<User> {
        let mut user = self
            .repo
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        // An empty string clears the channel
        if let Some(phone) = changes.phone {
            user.phone = non_empty(phone);
        }
        if let Some(whatsapp) = changes.whatsapp_ref {
            user.whatsapp_ref = non_empty(whatsapp);
        }
        if let Some(social) = changes.social_ref {
            user.social_ref = non_empty(social);
        }

        user.touch();
        self.repo.update(&user).await?;

        Ok(user)
    }
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
