//! Use-case level tests over an in-memory repository.

use std::sync::{Arc, Mutex};

use kernel::id::UserId;

use crate::application::config::AuthConfig;
use crate::application::login::LoginUseCase;
use crate::application::profile::{
    ContactChanges, GetProfileUseCase, ProfileChanges, UpdateContactUseCase, UpdateProfileUseCase,
};
use crate::application::register::RegisterUseCase;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::Email;
use crate::error::{AuthError, AuthResult};

/// In-memory user repository
#[derive(Clone, Default)]
pub(crate) struct MemoryUserRepository {
    users: Arc<Mutex<Vec<User>>>,
}

impl UserRepository for MemoryUserRepository {
    async fn create(&self, user: &User) -> AuthResult<()> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == user.email) {
            return Err(AuthError::EmailTaken);
        }
        users.push(user.clone());
        Ok(())
    }

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| &u.id == user_id)
            .cloned())
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| &u.email == email)
            .cloned())
    }

    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool> {
        Ok(self.users.lock().unwrap().iter().any(|u| &u.email == email))
    }

    async fn update(&self, user: &User) -> AuthResult<()> {
        let mut users = self.users.lock().unwrap();
        let existing = users
            .iter_mut()
            .find(|u| u.id == user.id)
            .ok_or(AuthError::UserNotFound)?;
        *existing = user.clone();
        Ok(())
    }
}

fn setup() -> (Arc<MemoryUserRepository>, Arc<AuthConfig>) {
    (
        Arc::new(MemoryUserRepository::default()),
        Arc::new(AuthConfig::development()),
    )
}

#[tokio::test]
async fn test_register_creates_student_with_safe_defaults() {
    let (repo, config) = setup();

    let user = RegisterUseCase::new(repo.clone(), config)
        .execute("Aki Tanaka", "Aki@Example.com", "correct horse battery".to_string())
        .await
        .unwrap();

    assert_eq!(user.email.as_str(), "aki@example.com");
    assert!(!user.is_verified_landowner);
    assert!(user.password_hash.starts_with("$argon2"));
}

#[tokio::test]
async fn test_register_duplicate_email_conflicts() {
    let (repo, config) = setup();
    let use_case = RegisterUseCase::new(repo, config);

    use_case
        .execute("Aki", "aki@example.com", "correct horse battery".to_string())
        .await
        .unwrap();

    // Same address with different casing is still a duplicate
    let result = use_case
        .execute("Impostor", "AKI@example.com", "another password".to_string())
        .await;
    assert!(matches!(result, Err(AuthError::EmailTaken)));
}

#[tokio::test]
async fn test_register_rejects_short_password_and_bad_email() {
    let (repo, config) = setup();
    let use_case = RegisterUseCase::new(repo, config);

    let result = use_case
        .execute("Aki", "aki@example.com", "short".to_string())
        .await;
    assert!(matches!(result, Err(AuthError::PasswordValidation(_))));

    let result = use_case
        .execute("Aki", "not-an-email", "correct horse battery".to_string())
        .await;
    assert!(matches!(result, Err(AuthError::Validation(_))));
}

#[tokio::test]
async fn test_login_roundtrip_issues_verifiable_token() {
    let (repo, config) = setup();

    let user = RegisterUseCase::new(repo.clone(), config.clone())
        .execute("Aki", "aki@example.com", "correct horse battery".to_string())
        .await
        .unwrap();

    let outcome = LoginUseCase::new(repo, config.clone())
        .execute("aki@example.com", "correct horse battery".to_string())
        .await
        .unwrap();

    let claims = config.signer().verify(&outcome.token).unwrap();
    assert_eq!(claims.user_id, *user.id.as_uuid());
    assert_eq!(claims.role, "student");
}

#[tokio::test]
async fn test_login_wrong_password_and_unknown_email_look_identical() {
    let (repo, config) = setup();

    RegisterUseCase::new(repo.clone(), config.clone())
        .execute("Aki", "aki@example.com", "correct horse battery".to_string())
        .await
        .unwrap();

    let use_case = LoginUseCase::new(repo, config);

    let wrong_password = use_case
        .execute("aki@example.com", "wrong password!".to_string())
        .await;
    assert!(matches!(wrong_password, Err(AuthError::InvalidCredentials)));

    let unknown_email = use_case
        .execute("nobody@example.com", "correct horse battery".to_string())
        .await;
    assert!(matches!(unknown_email, Err(AuthError::InvalidCredentials)));
}

#[tokio::test]
async fn test_update_profile_changes_name_and_password() {
    let (repo, config) = setup();

    let user = RegisterUseCase::new(repo.clone(), config.clone())
        .execute("Aki", "aki@example.com", "correct horse battery".to_string())
        .await
        .unwrap();

    UpdateProfileUseCase::new(repo.clone(), config.clone())
        .execute(
            &user.id,
            ProfileChanges {
                name: Some("Aki T.".to_string()),
                password: Some("new horse battery staple".to_string()),
            },
        )
        .await
        .unwrap();

    let updated = GetProfileUseCase::new(repo.clone())
        .execute(&user.id)
        .await
        .unwrap();
    assert_eq!(updated.name, "Aki T.");

    // Old password no longer works, new one does
    let login = LoginUseCase::new(repo.clone(), config.clone());
    assert!(
        login
            .execute("aki@example.com", "correct horse battery".to_string())
            .await
            .is_err()
    );
    assert!(
        login
            .execute("aki@example.com", "new horse battery staple".to_string())
            .await
            .is_ok()
    );
}

#[tokio::test]
async fn test_update_contact_sets_and_clears_channels() {
    let (repo, config) = setup();

    let user = RegisterUseCase::new(repo.clone(), config)
        .execute("Lee", "lee@example.com", "correct horse battery".to_string())
        .await
        .unwrap();

    let use_case = UpdateContactUseCase::new(repo.clone());

    let updated = use_case
        .execute(
            &user.id,
            ContactChanges {
                phone: Some("+81 90 0000 0000".to_string()),
                whatsapp_ref: Some("https://wa.me/819000000000".to_string()),
                social_ref: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.phone.as_deref(), Some("+81 90 0000 0000"));
    assert!(updated.social_ref.is_none());

    // Empty string clears the channel
    let cleared = use_case
        .execute(
            &user.id,
            ContactChanges {
                phone: Some("".to_string()),
                whatsapp_ref: None,
                social_ref: None,
            },
        )
        .await
        .unwrap();
    assert!(cleared.phone.is_none());
    assert_eq!(
        cleared.whatsapp_ref.as_deref(),
        Some("https://wa.me/819000000000")
    );
}
