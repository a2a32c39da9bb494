//! Gated admin-roster management.

use chrono::Utc;
use validator::Validate;

use crate::error::AppError;
use crate::models::admin_user::{
    AdminChanges, AdminUser, CreateAdminRequest, UpdateAdminRequest,
};
use crate::models::notification::NotificationKind;
use crate::repositories::{AdminRepository, NotificationRepository, SessionRepository};
use crate::services::gateway::require_admin_session;
use crate::services::notifications::record_event;

pub async fn list_admins<S>(store: &S) -> Result<Vec<AdminUser>, AppError>
where
    S: AdminRepository + ?Sized,
{
    store.list_admins().await
}

pub async fn find_by_email<S>(store: &S, email: &str) -> Result<Option<AdminUser>, AppError>
where
    S: AdminRepository + ?Sized,
{
    store.find_admin_by_email(email).await
}

/// Creates a roster entry through the gateway. Duplicate e-mails are a
/// business-rule failure checked after authorization.
pub async fn create_admin<S>(store: &S, request: CreateAdminRequest) -> Result<String, AppError>
where
    S: SessionRepository + AdminRepository + NotificationRepository + ?Sized,
{
    let actor = require_admin_session(store, request.session_token.as_deref()).await?;
    request.validate()?;

    if store.find_admin_by_email(&request.email).await?.is_some() {
        return Err(AppError::Conflict(
            "User with this email already exists".to_string(),
        ));
    }

    let admin = AdminUser::new(
        request.name,
        request.email,
        request.role,
        actor.user_id.clone(),
    );
    store.insert_admin(&admin).await?;

    record_event(
        store,
        format!("Admin user '{}' was created", admin.name),
        NotificationKind::Success,
        &actor.user_id,
    )
    .await?;

    Ok(admin.id)
}

/// Full-field gated update of a roster entry.
pub async fn update_admin<S>(
    store: &S,
    id: &str,
    request: UpdateAdminRequest,
) -> Result<String, AppError>
where
    S: SessionRepository + AdminRepository + NotificationRepository + ?Sized,
{
    let actor = require_admin_session(store, request.session_token.as_deref()).await?;
    request.validate()?;

    let changes = AdminChanges {
        name: request.name,
        email: request.email,
        role: request.role,
        status: request.status,
    };
    if !store.update_admin(id, &changes).await? {
        return Err(AppError::NotFound("Admin user not found".to_string()));
    }

    record_event(
        store,
        format!("Admin user '{}' was updated", changes.name),
        NotificationKind::Info,
        &actor.user_id,
    )
    .await?;

    Ok(id.to_string())
}

/// Gated hard delete of a roster entry.
pub async fn delete_admin<S>(
    store: &S,
    id: &str,
    session_token: Option<&str>,
) -> Result<(), AppError>
where
    S: SessionRepository + AdminRepository + NotificationRepository + ?Sized,
{
    let actor = require_admin_session(store, session_token).await?;

    let Some(admin) = store.find_admin_by_id(id).await? else {
        return Err(AppError::NotFound("Admin user not found".to_string()));
    };
    store.delete_admin(id).await?;

    record_event(
        store,
        format!("Admin user '{}' was deleted", admin.name),
        NotificationKind::Warning,
        &actor.user_id,
    )
    .await?;

    Ok(())
}

/// Stamps `last_login` after a successful external sign-in. Unknown
/// e-mails are a silent no-op, matching the sign-in flow that calls this
/// before the roster check.
pub async fn touch_last_login<S>(store: &S, email: &str) -> Result<(), AppError>
where
    S: AdminRepository + ?Sized,
{
    store.touch_admin_last_login(email, Utc::now()).await?;
    Ok(())
}
