//! Notification-sink store capability.

use async_trait::async_trait;

use crate::error::AppError;
use crate::models::notification::Notification;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationRepository: Send + Sync {
    /// Appends one event record.
    async fn insert_notification(&self, notification: &Notification) -> Result<(), AppError>;

    /// Events for one recipient, newest first.
    async fn list_notifications_for_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<Notification>, AppError>;

    /// Flips `read` to true; the only mutation the sink permits. Returns
    /// `false` when the id is unknown.
    async fn mark_notification_read(&self, id: &str) -> Result<bool, AppError>;
}
