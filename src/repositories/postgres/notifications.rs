use async_trait::async_trait;

use crate::error::AppError;
use crate::models::notification::Notification;
use crate::repositories::notifications::NotificationRepository;

use super::PgStore;

const NOTIFICATION_COLUMNS: &str = "id, message, kind, user_id, is_read, created_at";

#[async_trait]
impl NotificationRepository for PgStore {
    async fn insert_notification(&self, notification: &Notification) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO notifications (id, message, kind, user_id, is_read, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(&notification.id)
        .bind(&notification.message)
        .bind(&notification.kind)
        .bind(&notification.user_id)
        .bind(notification.read)
        .bind(notification.created_at)
        .execute(self.pool())
        .await?;
        Ok(())
    }

    async fn list_notifications_for_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<Notification>, AppError> {
        let query = format!(
            "SELECT {} FROM notifications WHERE user_id = $1 ORDER BY created_at DESC",
            NOTIFICATION_COLUMNS
        );
        let notifications = sqlx::query_as::<_, Notification>(&query)
            .bind(user_id)
            .fetch_all(self.pool())
            .await?;
        Ok(notifications)
    }

    async fn mark_notification_read(&self, id: &str) -> Result<bool, AppError> {
        let result = sqlx::query("UPDATE notifications SET is_read = TRUE WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
