//! The check-then-act convention every privileged write goes through.

use crate::error::AppError;
use crate::models::session::SessionValidation;
use crate::repositories::{AdminRepository, SessionRepository};
use crate::services::sessions;

/// Identity attached to a mutation after its token passed validation.
#[derive(Debug, Clone)]
pub struct AuthorizedAdmin {
    pub user_id: String,
    pub email: String,
}

/// Gate for privileged mutations. A missing token is an input error raised
/// before any store access; an invalid one collapses to a single opaque
/// message, whatever the validator's reason was. Mutations fail closed:
/// there is no anonymous fallback.
pub async fn require_admin_session<S>(
    store: &S,
    session_token: Option<&str>,
) -> Result<AuthorizedAdmin, AppError>
where
    S: SessionRepository + AdminRepository + ?Sized,
{
    let token = session_token
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(AppError::session_token_required)?;

    match sessions::validate_session(store, token).await? {
        SessionValidation::Valid { user_id, email } => Ok(AuthorizedAdmin { user_id, email }),
        SessionValidation::Invalid { reason } => {
            tracing::debug!(reason = reason.as_str(), "rejected privileged mutation");
            Err(AppError::invalid_session())
        }
    }
}
