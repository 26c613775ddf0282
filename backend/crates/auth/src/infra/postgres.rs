//! PostgreSQL Repository Implementation

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use sqlx::PgPool;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    Email, Subscription, SubscriptionPlan, SubscriptionStatus, UserRole,
};
use crate::error::{AuthError, AuthResult};

const USER_COLUMNS: &str = r#"
    id,
    name,
    email,
    password_hash,
    role,
    document_ref,
    is_verified_landowner,
    phone,
    whatsapp_ref,
    social_ref,
    subscription_plan,
    subscription_status,
    subscription_start_at,
    external_subscription_id,
    has_chosen_plan,
    created_at,
    updated_at
"#;

/// PostgreSQL-backed user repository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl UserRepository for PgUserRepository {
    async fn create(&self, user: &User) -> AuthResult<()> {
        sqlx::query(&format!(
            "INSERT INTO users ({USER_COLUMNS}) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17)"
        ))
        .bind(user.id.as_uuid())
        .bind(&user.name)
        .bind(user.email.as_str())
        .bind(&user.password_hash)
        .bind(user.role.as_str())
        .bind(&user.document_ref)
        .bind(user.is_verified_landowner)
        .bind(&user.phone)
        .bind(&user.whatsapp_ref)
        .bind(&user.social_ref)
        .bind(user.subscription.plan.as_str())
        .bind(user.subscription.status.as_str())
        .bind(user.subscription.start_date)
        .bind(&user.subscription.external_subscription_id)
        .bind(user.has_chosen_plan)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| match &e {
            // Unique index on email; a racing duplicate lands here
            sqlx::Error::Database(db) if db.code().as_deref() == Some("23505") => {
                AuthError::EmailTaken
            }
            _ => AuthError::Database(e),
        })?;

        Ok(())
    }

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
                .bind(email.as_str())
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }

    async fn update(&self, user: &User) -> AuthResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE users SET
                name = $2,
                email = $3,
                password_hash = $4,
                role = $5,
                document_ref = $6,
                is_verified_landowner = $7,
                phone = $8,
                whatsapp_ref = $9,
                social_ref = $10,
                subscription_plan = $11,
                subscription_status = $12,
                subscription_start_at = $13,
                external_subscription_id = $14,
                has_chosen_plan = $15,
                updated_at = $16
            WHERE id = $1
            "#,
        )
        .bind(user.id.as_uuid())
        .bind(&user.name)
        .bind(user.email.as_str())
        .bind(&user.password_hash)
        .bind(user.role.as_str())
        .bind(&user.document_ref)
        .bind(user.is_verified_landowner)
        .bind(&user.phone)
        .bind(&user.whatsapp_ref)
        .bind(&user.social_ref)
        .bind(user.subscription.plan.as_str())
        .bind(user.subscription.status.as_str())
        .bind(user.subscription.start_date)
        .bind(&user.subscription.external_subscription_id)
        .bind(user.has_chosen_plan)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AuthError::UserNotFound);
        }

        Ok(())
    }
}

/// Raw database row for users
#[derive(sqlx::FromRow)]
struct UserRow {
    id: uuid::Uuid,
    name: String,
    email: String,
    password_hash: String,
    role: String,
    document_ref: Option<String>,
    is_verified_landowner: bool,
    phone: Option<String>,
    whatsapp_ref: Option<String>,
    social_ref: Option<String>,
    subscription_plan: String,
    subscription_status: String,
    subscription_start_at: Option<DateTime<Utc>>,
    external_subscription_id: Option<String>,
    has_chosen_plan: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> AuthResult<User> {
        let email = Email::new(&self.email)
            .map_err(|e| AuthError::Internal(format!("Stored email is invalid: {e}")))?;
        let role = UserRole::parse(&self.role)
            .map_err(|e| AuthError::Internal(e.to_string()))?;
        let plan = SubscriptionPlan::parse(&self.subscription_plan)
            .map_err(|e| AuthError::Internal(e.to_string()))?;
        let status = SubscriptionStatus::parse(&self.subscription_status)
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        Ok(User {
            id: UserId::from_uuid(self.id),
            name: self.name,
            email,
            password_hash: self.password_hash,
            role,
            document_ref: self.document_ref,
            is_verified_landowner: self.is_verified_landowner,
            phone: self.phone,
            whatsapp_ref: self.whatsapp_ref,
            social_ref: self.social_ref,
            subscription: Subscription {
                plan,
                status,
                start_date: self.subscription_start_at,
                external_subscription_id: self.external_subscription_id,
            },
            has_chosen_plan: self.has_chosen_plan,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
