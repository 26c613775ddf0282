//! Notification Use Cases

use std::sync::Arc;

use kernel::id::{NotificationId, UserId};

use crate::domain::entity::notification::Notification;
use crate::domain::repository::NotificationRepository;
use crate::error::{HousingError, HousingResult};

pub struct ListNotificationsUseCase<N> {
    notifications: Arc<N>,
}

impl<N: NotificationRepository> ListNotificationsUseCase<N> {
    pub fn new(notifications: Arc<N>) -> Self {
        Self { notifications }
    }

    pub async fn execute(&self, user_id: &UserId) -> HousingResult<Vec<Notification>> {
        self.notifications.list_by_user(user_id).await
    }
}

pub struct MarkNotificationReadUseCase<N> {
    notifications: Arc<N>,
}

impl<N: NotificationRepository> MarkNotificationReadUseCase<N> {
    pub fn new(notifications: Arc<N>) -> Self {
        Self { notifications }
    }

    /// Only the recipient can mark their notification read
    pub async fn execute(&self, user_id: &UserId, id: &NotificationId) -> HousingResult<()> {
        if !self.notifications.mark_read(id, user_id).await? {
            return Err(HousingError::NotificationNotFound);
        }
        Ok(())
    }
}
