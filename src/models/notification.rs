//! Models for the append-only admin event log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
/// One admin-facing event. Immutable except for `read`, which only ever
/// moves false -> true.
pub struct Notification {
    pub id: String,
    pub message: String,
    /// `success` / `warning` / `info` by gateway convention; free-form
    /// values are accepted on the direct create route.
    pub kind: String,
    /// Actor/recipient identity.
    pub user_id: String,
    #[sqlx(rename = "is_read")]
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

/// Conventional kinds the mutation gateway emits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Warning,
    Info,
    Other(String),
}

impl NotificationKind {
    pub fn as_str(&self) -> &str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Warning => "warning",
            NotificationKind::Info => "info",
            NotificationKind::Other(kind) => kind,
        }
    }
}

impl From<String> for NotificationKind {
    fn from(kind: String) -> Self {
        match kind.as_str() {
            "success" => NotificationKind::Success,
            "warning" => NotificationKind::Warning,
            "info" => NotificationKind::Info,
            _ => NotificationKind::Other(kind),
        }
    }
}

impl Notification {
    /// Builds an unread event record.
    pub fn new(message: String, kind: NotificationKind, user_id: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            message,
            kind: kind.as_str().to_string(),
            user_id,
            read: false,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
/// Direct append payload (no gateway involvement).
pub struct CreateNotificationRequest {
    pub message: String,
    pub kind: String,
    pub user_id: String,
}
