//! Student Registration Use Case

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::Email;
use crate::error::{AuthError, AuthResult};

/// Registers a new student account
pub struct RegisterUseCase<R> {
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> RegisterUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    /// Create the account, rejecting duplicate emails with Conflict
    pub async fn execute(&self, name: &str, email: &str, password: String) -> AuthResult<User> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AuthError::Validation("Name is required".to_string()));
        }

        let email =
            Email::new(email).map_err(|e| AuthError::Validation(e.to_string()))?;

        let password = ClearTextPassword::new(password)?;
        let hash = password.hash(self.config.pepper())?;

        // Uniqueness is backed by the database index; this check only gives
        // the common case a clean Conflict instead of a constraint error
        if self.repo.exists_by_email(&email).await? {
            return Err(AuthError::EmailTaken);
        }

        let user = User::new_student(name.to_string(), email, hash.as_phc_string().to_string());
        self.repo.create(&user).await?;

        tracing::info!(user_id = %user.id, "Registered new student account");

        Ok(user)
    }
}
