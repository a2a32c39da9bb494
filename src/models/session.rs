//! Models for admin sessions issued after external identity sign-in.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
/// Database representation of one admin browser/device binding.
pub struct AdminSession {
    /// Unique identifier for the session record.
    pub id: String,
    /// Identity-provider user id that owns the session.
    pub user_id: String,
    /// E-mail claim snapshotted at issue time.
    pub email: String,
    /// Bearer token presented on privileged calls.
    pub session_token: String,
    /// Timestamp when the session was issued.
    pub created_at: DateTime<Utc>,
    /// Instant after which validation rejects the token.
    pub expires_at: DateTime<Utc>,
    /// Soft-state flag; deactivation never deletes the record.
    pub is_active: bool,
}

impl AdminSession {
    /// Builds a fresh active session. `expires_at` is fixed here and never
    /// extended afterwards.
    pub fn issue(user_id: String, email: String, session_token: String, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            user_id,
            email,
            session_token,
            created_at: now,
            expires_at: now + ttl,
            is_active: true,
        }
    }

    /// `true` once the wall clock has passed `expires_at`, independent of
    /// the stored `is_active` flag.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}

/// Why a token failed validation. Logged for debugging; the mutation
/// gateway collapses all of these into one opaque message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum RejectionReason {
    SessionNotFound,
    SessionExpired,
    UserNotAdmin,
}

impl RejectionReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            RejectionReason::SessionNotFound => "session_not_found",
            RejectionReason::SessionExpired => "session_expired",
            RejectionReason::UserNotAdmin => "user_not_admin",
        }
    }
}

/// Outcome of validating a presented token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionValidation {
    Valid { user_id: String, email: String },
    Invalid { reason: RejectionReason },
}

impl SessionValidation {
    pub fn is_valid(&self) -> bool {
        matches!(self, SessionValidation::Valid { .. })
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
/// Identity pair returned by the external provider after sign-in; trusted
/// verbatim by the issuer.
pub struct CreateSessionRequest {
    pub user_id: String,
    pub email: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
/// Token and record id handed back to the client after issue.
pub struct CreatedSession {
    pub session_token: String,
    pub session_id: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ValidateSessionRequest {
    pub session_token: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct InvalidateSessionRequest {
    pub session_token: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
/// Wire shape of a validation outcome.
pub struct ValidationResponse {
    pub is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<RejectionReason>,
}

impl From<SessionValidation> for ValidationResponse {
    fn from(validation: SessionValidation) -> Self {
        match validation {
            SessionValidation::Valid { user_id, email } => ValidationResponse {
                is_valid: true,
                user_id: Some(user_id),
                email: Some(email),
                reason: None,
            },
            SessionValidation::Invalid { reason } => ValidationResponse {
                is_valid: false,
                user_id: None,
                email: None,
                reason: Some(reason),
            },
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
/// Count of sessions the expiry sweep deactivated.
pub struct CleanupResponse {
    pub cleaned_up: u64,
}
