use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::AppError;
use crate::models::admin_user::{AdminChanges, AdminUser};
use crate::repositories::admins::AdminRepository;

use super::PgStore;

const ADMIN_COLUMNS: &str =
    "id, name, email, role, status, created_at, last_login, created_by";

#[async_trait]
impl AdminRepository for PgStore {
    async fn insert_admin_if_roster_empty(&self, admin: &AdminUser) -> Result<bool, AppError> {
        // Single-statement conditional insert: the emptiness check cannot
        // race another bootstrap attempt.
        let result = sqlx::query(
            "INSERT INTO admin_users \
             (id, name, email, role, status, created_at, last_login, created_by) \
             SELECT $1, $2, $3, $4, $5, $6, $7, $8 \
             WHERE NOT EXISTS (SELECT 1 FROM admin_users)",
        )
        .bind(&admin.id)
        .bind(&admin.name)
        .bind(&admin.email)
        .bind(admin.role.as_str())
        .bind(admin.status.as_str())
        .bind(admin.created_at)
        .bind(admin.last_login)
        .bind(&admin.created_by)
        .execute(self.pool())
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn insert_admin(&self, admin: &AdminUser) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO admin_users \
             (id, name, email, role, status, created_at, last_login, created_by) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
        )
        .bind(&admin.id)
        .bind(&admin.name)
        .bind(&admin.email)
        .bind(admin.role.as_str())
        .bind(admin.status.as_str())
        .bind(admin.created_at)
        .bind(admin.last_login)
        .bind(&admin.created_by)
        .execute(self.pool())
        .await?;
        Ok(())
    }

    async fn find_admin_by_id(&self, id: &str) -> Result<Option<AdminUser>, AppError> {
        let query = format!("SELECT {} FROM admin_users WHERE id = $1", ADMIN_COLUMNS);
        let admin = sqlx::query_as::<_, AdminUser>(&query)
            .bind(id)
            .fetch_optional(self.pool())
            .await?;
        Ok(admin)
    }

    async fn find_admin_by_email(&self, email: &str) -> Result<Option<AdminUser>, AppError> {
        let query = format!("SELECT {} FROM admin_users WHERE email = $1", ADMIN_COLUMNS);
        let admin = sqlx::query_as::<_, AdminUser>(&query)
            .bind(email)
            .fetch_optional(self.pool())
            .await?;
        Ok(admin)
    }

    async fn list_admins(&self) -> Result<Vec<AdminUser>, AppError> {
        let query = format!(
            "SELECT {} FROM admin_users ORDER BY created_at DESC",
            ADMIN_COLUMNS
        );
        let admins = sqlx::query_as::<_, AdminUser>(&query)
            .fetch_all(self.pool())
            .await?;
        Ok(admins)
    }

    async fn count_admins(&self) -> Result<u64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM admin_users")
            .fetch_one(self.pool())
            .await?;
        Ok(count as u64)
    }

    async fn update_admin(&self, id: &str, changes: &AdminChanges) -> Result<bool, AppError> {
        let result = sqlx::query(
            "UPDATE admin_users SET name = $2, email = $3, role = $4, status = $5 WHERE id = $1",
        )
        .bind(id)
        .bind(&changes.name)
        .bind(&changes.email)
        .bind(changes.role.as_str())
        .bind(changes.status.as_str())
        .execute(self.pool())
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_admin(&self, id: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM admin_users WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn touch_admin_last_login(
        &self,
        email: &str,
        at: DateTime<Utc>,
    ) -> Result<bool, AppError> {
        let result = sqlx::query("UPDATE admin_users SET last_login = $1 WHERE email = $2")
            .bind(at)
            .bind(email)
            .execute(self.pool())
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
