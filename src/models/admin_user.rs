//! Models for the admin roster: who may hold a valid admin session.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::validation::rules;

/// Actor recorded for the bootstrap admin, which no admin created.
pub const BOOTSTRAP_ACTOR: &str = "system";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
/// Database representation of a registered administrator.
pub struct AdminUser {
    /// Unique identifier for the roster entry.
    pub id: String,
    /// Human-readable display name.
    pub name: String,
    /// Unique e-mail; the key the session validator re-checks on every call.
    pub email: String,
    /// Role tier. Stored and returned, but every gateway operation checks
    /// only active-admin status (flat policy).
    pub role: AdminRole,
    /// Active entries authorize sessions; inactive ones are rejected on the
    /// owner's next validation.
    pub status: AdminStatus,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last recorded sign-in, if any.
    pub last_login: Option<DateTime<Utc>>,
    /// Id of the admin who created this entry, or `"system"` for bootstrap.
    pub created_by: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "TEXT", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
/// Role tiers stored in the roster.
pub enum AdminRole {
    SuperAdmin,
    ContentManager,
    Editor,
    Viewer,
}

impl AdminRole {
    /// Canonical snake_case representation, used when binding to the store.
    pub fn as_str(&self) -> &'static str {
        match self {
            AdminRole::SuperAdmin => "super_admin",
            AdminRole::ContentManager => "content_manager",
            AdminRole::Editor => "editor",
            AdminRole::Viewer => "viewer",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "TEXT", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum AdminStatus {
    Active,
    Inactive,
}

impl AdminStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdminStatus::Active => "active",
            AdminStatus::Inactive => "inactive",
        }
    }
}

impl AdminUser {
    /// Constructs a roster entry created by an existing admin.
    pub fn new(name: String, email: String, role: AdminRole, created_by: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            email,
            role,
            status: AdminStatus::Active,
            created_at: Utc::now(),
            last_login: None,
            created_by,
        }
    }

    /// Constructs the first-run super admin; only valid while the roster is
    /// empty.
    pub fn bootstrap(name: String, email: String) -> Self {
        Self::new(name, email, AdminRole::SuperAdmin, BOOTSTRAP_ACTOR.to_string())
    }

    pub fn is_active(&self) -> bool {
        self.status == AdminStatus::Active
    }
}

/// Patch applied by the gated update operation; all fields are replaced, in
/// line with the full-payload update the dashboard submits.
#[derive(Debug, Clone)]
pub struct AdminChanges {
    pub name: String,
    pub email: String,
    pub role: AdminRole,
    pub status: AdminStatus,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
/// Payload for creating an admin through the gateway.
pub struct CreateAdminRequest {
    #[validate(custom(function = "rules::validate_display_name"))]
    pub name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    pub role: AdminRole,
    pub session_token: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
/// Payload for the gated full update of a roster entry.
pub struct UpdateAdminRequest {
    #[validate(custom(function = "rules::validate_display_name"))]
    pub name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    pub role: AdminRole,
    pub status: AdminStatus,
    pub session_token: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
/// Gated delete carries only the credential.
pub struct DeleteAdminRequest {
    pub session_token: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
/// First-run bootstrap payload; the only admin-creation path without a
/// session token.
pub struct BootstrapAdminRequest {
    #[validate(custom(function = "rules::validate_display_name"))]
    pub name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BootstrapAdminResponse {
    pub success: bool,
    pub admin_id: String,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HasAdminsResponse {
    pub has_admins: bool,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
/// Records a successful external sign-in against the roster entry.
pub struct TouchLastLoginRequest {
    pub email: String,
}
