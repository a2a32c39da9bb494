//! Append-only admin event log.

use crate::error::AppError;
use crate::models::notification::{Notification, NotificationKind};
use crate::repositories::NotificationRepository;

/// Appends one event record and returns its id.
pub async fn record_event<S>(
    store: &S,
    message: String,
    kind: NotificationKind,
    user_id: &str,
) -> Result<String, AppError>
where
    S: NotificationRepository + ?Sized,
{
    let notification = Notification::new(message, kind, user_id.to_string());
    let id = notification.id.clone();
    store.insert_notification(&notification).await?;
    Ok(id)
}

/// Events for one recipient, newest first.
pub async fn list_for_user<S>(store: &S, user_id: &str) -> Result<Vec<Notification>, AppError>
where
    S: NotificationRepository + ?Sized,
{
    store.list_notifications_for_user(user_id).await
}

/// Marks one event read. `read` only ever moves false -> true; marking an
/// already-read event again changes nothing.
pub async fn mark_read<S>(store: &S, id: &str) -> Result<(), AppError>
where
    S: NotificationRepository + ?Sized,
{
    if store.mark_notification_read(id).await? {
        Ok(())
    } else {
        Err(AppError::NotFound("Notification not found".to_string()))
    }
}
