//! Contact Disclosure Use Case
//!
//! A student asks for the owner's contact channels; the system emails them
//! to the requester. Deliberately stateless and not idempotent: asking twice
//! sends two emails, nothing is recorded.

use std::sync::Arc;

use auth::domain::repository::UserRepository;
use auth::middleware::AuthUser;
use auth::models::{Email, User};
use kernel::id::PropertyId;
use platform::mailer::{MailReceipt, Mailer};

use crate::application::emails;
use crate::domain::entity::property::Property;
use crate::domain::repository::PropertyRepository;
use crate::error::{HousingError, HousingResult};

/// Disclosure outcome; the preview handle is surfaced outside production
pub struct ContactDisclosure {
    pub receipt: MailReceipt,
}

pub struct RequestContactUseCase<P, U, M> {
    properties: Arc<P>,
    users: Arc<U>,
    mailer: Arc<M>,
}

impl<P, U, M> RequestContactUseCase<P, U, M>
where
    P: PropertyRepository,
    U: UserRepository,
    M: Mailer + Sync,
{
    pub fn new(properties: Arc<P>, users: Arc<U>, mailer: Arc<M>) -> Self {
        Self {
            properties,
            users,
            mailer,
        }
    }

    pub async fn execute(
        &self,
        caller: &AuthUser,
        property_id: &PropertyId,
    ) -> HousingResult<ContactDisclosure> {
        if caller.is_admin() {
            return Err(HousingError::Forbidden(
                "Admins cannot request contact details".to_string(),
            ));
        }

        let requester = self
            .users
            .find_by_id(&caller.user_id)
            .await?
            .ok_or(HousingError::UserNotFound)?;

        let property = self
            .properties
            .find_by_id(property_id)
            .await?
            .ok_or(HousingError::PropertyNotFound)?;

        if property.is_owned_by(&caller.user_id, requester.email.as_str()) {
            return Err(HousingError::Forbidden(
                "You already own this listing".to_string(),
            ));
        }

        let owner = self.resolve_owner(&property).await?;

        // Disclosure is an email, not a response body; the channels never
        // travel through the API surface
        let mail = emails::contact_details_email(
            requester.email.as_str(),
            &property.title,
            &owner.name,
            owner.phone.as_deref(),
            owner.whatsapp_ref.as_deref(),
            owner.social_ref.as_deref(),
        );

        let receipt = self
            .mailer
            .send(&mail)
            .await
            .map_err(|e| HousingError::Internal(format!("Disclosure email failed: {e}")))?;

        tracing::info!(
            property_id = %property.id,
            requester = %requester.id,
            owner = %owner.id,
            "Contact details disclosed"
        );

        Ok(ContactDisclosure { receipt })
    }

    /// Owner resolution order: account id first, then the email key
    async fn resolve_owner(&self, property: &Property) -> HousingResult<User> {
        if let Some(owner_id) = &property.owner_id
            && let Some(owner) = self.users.find_by_id(owner_id).await?
        {
            return Ok(owner);
        }

        if let Some(owner_email) = &property.owner_email {
            let email = Email::new(owner_email)
                .map_err(|_| HousingError::OwnerNotFound)?;
            if let Some(owner) = self.users.find_by_email(&email).await? {
                return Ok(owner);
            }
        }

        Err(HousingError::OwnerNotFound)
    }
}
