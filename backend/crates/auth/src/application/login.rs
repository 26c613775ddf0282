//! Login Use Case
//!
//! Credential check and token issuance for students and admins. Landowner
//! login has its own flow (the verification gate) in the verification crate.

use std::sync::Arc;

use platform::password::{ClearTextPassword, HashedPassword};
use platform::token::TokenClaims;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::Email;
use crate::error::{AuthError, AuthResult};

/// Successful login outcome
pub struct LoginOutcome {
    pub user: User,
    pub token: String,
}

/// Verifies credentials and issues a signed session token
pub struct LoginUseCase<R> {
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> LoginUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, email: &str, password: String) -> AuthResult<LoginOutcome> {
        let email = Email::new(email).map_err(|_| AuthError::InvalidCredentials)?;
        let password = ClearTextPassword::new(password).map_err(|_| AuthError::InvalidCredentials)?;

        // Unknown email and wrong password are indistinguishable to the caller
        let user = self
            .repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let hash = HashedPassword::from_phc_string(&user.password_hash)
            .map_err(|_| AuthError::Internal("Stored password hash is corrupt".to_string()))?;

        if !hash.verify(&password, self.config.pepper()) {
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.issue_token(&user);

        tracing::info!(user_id = %user.id, role = %user.role, "User logged in");

        Ok(LoginOutcome { user, token })
    }

    /// Sign a session token for an already-authenticated user
    pub fn issue_token(&self, user: &User) -> String {
        let claims = TokenClaims::new(
            *user.id.as_uuid(),
            user.role.as_str(),
            self.config.token_ttl,
        );
        self.config.signer().sign(&claims)
    }
}
