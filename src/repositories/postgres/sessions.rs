use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::AppError;
use crate::models::session::AdminSession;
use crate::repositories::sessions::SessionRepository;

use super::PgStore;

const SESSION_COLUMNS: &str =
    "id, user_id, email, session_token, created_at, expires_at, is_active";

#[async_trait]
impl SessionRepository for PgStore {
    async fn insert_session_superseding(&self, session: &AdminSession) -> Result<(), AppError> {
        // Supersede and insert under one transaction so concurrent issuers
        // for the same user serialize on the row locks.
        let mut tx = self.pool().begin().await?;

        sqlx::query("UPDATE admin_sessions SET is_active = FALSE WHERE user_id = $1 AND is_active")
            .bind(&session.user_id)
            .execute(&mut *tx)
            .await?;

        sqlx::query(
            "INSERT INTO admin_sessions \
             (id, user_id, email, session_token, created_at, expires_at, is_active) \
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(&session.id)
        .bind(&session.user_id)
        .bind(&session.email)
        .bind(&session.session_token)
        .bind(session.created_at)
        .bind(session.expires_at)
        .bind(session.is_active)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(())
    }

    async fn find_session_by_token(
        &self,
        token: &str,
    ) -> Result<Option<AdminSession>, AppError> {
        let query = format!(
            "SELECT {} FROM admin_sessions WHERE session_token = $1",
            SESSION_COLUMNS
        );
        let session = sqlx::query_as::<_, AdminSession>(&query)
            .bind(token)
            .fetch_optional(self.pool())
            .await?;
        Ok(session)
    }

    async fn deactivate_session_by_token(&self, token: &str) -> Result<(), AppError> {
        sqlx::query("UPDATE admin_sessions SET is_active = FALSE WHERE session_token = $1")
            .bind(token)
            .execute(self.pool())
            .await?;
        Ok(())
    }

    async fn deactivate_sessions_expired_before(
        &self,
        cutoff: DateTime<Utc>,
    ) -> Result<u64, AppError> {
        let result =
            sqlx::query("UPDATE admin_sessions SET is_active = FALSE WHERE expires_at < $1")
                .bind(cutoff)
                .execute(self.pool())
                .await?;
        Ok(result.rows_affected())
    }

    async fn list_sessions_for_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<AdminSession>, AppError> {
        let query = format!(
            "SELECT {} FROM admin_sessions WHERE user_id = $1 ORDER BY created_at DESC",
            SESSION_COLUMNS
        );
        let sessions = sqlx::query_as::<_, AdminSession>(&query)
            .bind(user_id)
            .fetch_all(self.pool())
            .await?;
        Ok(sessions)
    }
}
