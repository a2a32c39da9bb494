//! Session store capability.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::AppError;
use crate::models::session::AdminSession;

/// Persistence surface for admin sessions.
///
/// Designed to be mockable with mockall; use `MockSessionRepository` in
/// unit tests when only single-capability behavior matters.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Atomically deactivates every active session owned by
    /// `session.user_id`, then inserts `session`. Both steps commit
    /// together, so two racing issuers cannot leave two active sessions
    /// behind.
    async fn insert_session_superseding(&self, session: &AdminSession) -> Result<(), AppError>;

    /// Exact-match lookup by bearer token.
    async fn find_session_by_token(&self, token: &str)
        -> Result<Option<AdminSession>, AppError>;

    /// Sets `is_active = false` on the matching session. Unknown tokens are
    /// a silent no-op, never an error.
    async fn deactivate_session_by_token(&self, token: &str) -> Result<(), AppError>;

    /// Sets `is_active = false` on every session whose `expires_at` is
    /// before `cutoff`, returning the number of matching records. Records
    /// are never deleted.
    async fn deactivate_sessions_expired_before(
        &self,
        cutoff: DateTime<Utc>,
    ) -> Result<u64, AppError>;

    /// Every session owned by `user_id`, newest first.
    async fn list_sessions_for_user(&self, user_id: &str)
        -> Result<Vec<AdminSession>, AppError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_session_repository_satisfies_trait_bounds() {
        fn check_send_sync<T: Send + Sync>() {}
        check_send_sync::<MockSessionRepository>();
        let _mock = MockSessionRepository::new();
    }
}
