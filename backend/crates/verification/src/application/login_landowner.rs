//! Landowner Login Gate
//!
//! Credential check plus the verification gate: a correct password on an
//! unverified landowner account is NOT a login. Only full success issues a
//! token.

use std::sync::Arc;

use auth::AuthConfig;
use auth::domain::repository::UserRepository;
use auth::models::{Email, User, UserRole};
use platform::password::{ClearTextPassword, HashedPassword};
use platform::token::TokenClaims;

use crate::error::{VerificationError, VerificationResult};

/// Successful landowner login outcome
pub struct LandownerLoginOutcome {
    pub user: User,
    pub token: String,
}

pub struct LandownerLoginUseCase<U> {
    users: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> LandownerLoginUseCase<U>
where
    U: UserRepository,
{
    pub fn new(users: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { users, config }
    }

    pub async fn execute(
        &self,
        email: &str,
        password: String,
    ) -> VerificationResult<LandownerLoginOutcome> {
        let email = Email::new(email).map_err(|_| VerificationError::InvalidCredentials)?;
        let password =
            ClearTextPassword::new(password).map_err(|_| VerificationError::InvalidCredentials)?;

        let user = self
            .users
            .find_by_email(&email)
            .await?
            .filter(|u| u.role == UserRole::Landowner)
            .ok_or(VerificationError::InvalidCredentials)?;

        let hash = HashedPassword::from_phc_string(&user.password_hash)
            .map_err(|_| VerificationError::Internal("Stored password hash is corrupt".to_string()))?;

        if !hash.verify(&password, self.config.pepper()) {
            return Err(VerificationError::InvalidCredentials);
        }

        // Credentials are fine; the verification gate decides last
        if !user.is_verified_landowner {
            return Err(VerificationError::NotVerified);
        }

        let claims = TokenClaims::new(
            *user.id.as_uuid(),
            user.role.as_str(),
            self.config.token_ttl,
        );
        let token = self.config.signer().sign(&claims);

        tracing::info!(user_id = %user.id, "Landowner logged in");

        Ok(LandownerLoginOutcome { user, token })
    }
}
