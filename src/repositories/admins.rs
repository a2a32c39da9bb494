//! Admin roster store capability.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::AppError;
use crate::models::admin_user::{AdminChanges, AdminUser};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AdminRepository: Send + Sync {
    /// Bootstrap insert: succeeds (returning `true`) only while the roster
    /// is empty. The emptiness check and the insert are a single atomic
    /// step in every backend.
    async fn insert_admin_if_roster_empty(&self, admin: &AdminUser) -> Result<bool, AppError>;

    /// Plain insert used by the gated creation path.
    async fn insert_admin(&self, admin: &AdminUser) -> Result<(), AppError>;

    async fn find_admin_by_id(&self, id: &str) -> Result<Option<AdminUser>, AppError>;

    /// Exact-match lookup on the unique e-mail key; what the session
    /// validator consults on every check.
    async fn find_admin_by_email(&self, email: &str) -> Result<Option<AdminUser>, AppError>;

    async fn list_admins(&self) -> Result<Vec<AdminUser>, AppError>;

    async fn count_admins(&self) -> Result<u64, AppError>;

    /// Full-field patch; returns `false` when no entry matched.
    async fn update_admin(&self, id: &str, changes: &AdminChanges) -> Result<bool, AppError>;

    /// Hard delete; returns `false` when no entry matched.
    async fn delete_admin(&self, id: &str) -> Result<bool, AppError>;

    /// Stamps `last_login`; returns `false` when the e-mail is unknown.
    async fn touch_admin_last_login(
        &self,
        email: &str,
        at: DateTime<Utc>,
    ) -> Result<bool, AppError>;
}
