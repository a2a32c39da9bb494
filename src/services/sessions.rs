//! Session issue, validation, logout, and the expiry sweep.

use chrono::{Duration, Utc};

use crate::error::AppError;
use crate::models::session::{
    AdminSession, CreatedSession, RejectionReason, SessionValidation,
};
use crate::repositories::{AdminRepository, SessionRepository};
use crate::utils::token::generate_session_token;

/// Issues a session for an identity the external provider already
/// authenticated; no identity verification happens here. Prior active
/// sessions for the same user are superseded in the same store operation,
/// so at most one session per user is ever active.
pub async fn create_session<S>(
    store: &S,
    ttl: Duration,
    user_id: &str,
    email: &str,
) -> Result<CreatedSession, AppError>
where
    S: SessionRepository + ?Sized,
{
    if user_id.trim().is_empty() || email.trim().is_empty() {
        return Err(AppError::BadRequest(
            "user_id and email are required".to_string(),
        ));
    }

    let session = AdminSession::issue(
        user_id.to_string(),
        email.to_string(),
        generate_session_token(),
        ttl,
    );
    store.insert_session_superseding(&session).await?;

    Ok(CreatedSession {
        session_token: session.session_token,
        session_id: session.id,
    })
}

/// The single authorization primitive. Read-only: checks run in a fixed
/// order and stop at the first failure, and nothing in the store changes:
/// an expired session is rejected here even though its stored `is_active`
/// flag stays true until the sweep.
pub async fn validate_session<S>(
    store: &S,
    session_token: &str,
) -> Result<SessionValidation, AppError>
where
    S: SessionRepository + AdminRepository + ?Sized,
{
    let Some(session) = store.find_session_by_token(session_token).await? else {
        return Ok(SessionValidation::Invalid {
            reason: RejectionReason::SessionNotFound,
        });
    };
    if !session.is_active {
        return Ok(SessionValidation::Invalid {
            reason: RejectionReason::SessionNotFound,
        });
    }

    if session.is_expired(Utc::now()) {
        return Ok(SessionValidation::Invalid {
            reason: RejectionReason::SessionExpired,
        });
    }

    // Re-checked on every call: demoting or deactivating an admin takes
    // effect on their next request without touching the session record.
    match store.find_admin_by_email(&session.email).await? {
        Some(admin) if admin.is_active() => Ok(SessionValidation::Valid {
            user_id: session.user_id,
            email: session.email,
        }),
        _ => Ok(SessionValidation::Invalid {
            reason: RejectionReason::UserNotAdmin,
        }),
    }
}

/// Explicit logout. Idempotent: invalidating an unknown or already-inactive
/// token is a silent no-op.
pub async fn invalidate_session<S>(store: &S, session_token: &str) -> Result<(), AppError>
where
    S: SessionRepository + ?Sized,
{
    store.deactivate_session_by_token(session_token).await
}

/// Reconciles stored `is_active` flags with actual expiry. Flag hygiene
/// only: validation rejects expired sessions regardless of whether this has
/// run.
pub async fn cleanup_expired_sessions<S>(store: &S) -> Result<u64, AppError>
where
    S: SessionRepository + ?Sized,
{
    let swept = store
        .deactivate_sessions_expired_before(Utc::now())
        .await?;
    if swept > 0 {
        tracing::info!(swept, "deactivated expired admin sessions");
    }
    Ok(swept)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::sessions::MockSessionRepository;
    use crate::repositories::MemoryStore;

    #[tokio::test]
    async fn create_session_rejects_blank_identity() {
        let store = MemoryStore::new();
        let err = create_session(&store, Duration::hours(24), "", "ama@x.com")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));

        let err = create_session(&store, Duration::hours(24), "u1", "  ")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[tokio::test]
    async fn unknown_token_validates_as_session_not_found() {
        let store = MemoryStore::new();
        let validation = validate_session(&store, "no-such-token").await.unwrap();
        assert_eq!(
            validation,
            SessionValidation::Invalid {
                reason: RejectionReason::SessionNotFound
            }
        );
    }

    #[tokio::test]
    async fn cleanup_reports_the_store_count() {
        let mut mock = MockSessionRepository::new();
        mock.expect_deactivate_sessions_expired_before()
            .times(1)
            .returning(|_| Ok(3));
        let swept = cleanup_expired_sessions(&mock).await.unwrap();
        assert_eq!(swept, 3);
    }
}
