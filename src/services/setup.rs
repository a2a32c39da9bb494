//! First-run bootstrap: the only admin-creation path that bypasses session
//! validation, usable only while the roster is empty.

use validator::Validate;

use crate::error::AppError;
use crate::models::admin_user::{AdminUser, BootstrapAdminRequest, BootstrapAdminResponse};
use crate::repositories::AdminRepository;

/// Creates the first super admin. Once any admin exists this path refuses
/// with a distinct message, whatever e-mail the caller retries with, and
/// directs them to the gated creation route.
pub async fn create_first_admin<S>(
    store: &S,
    request: BootstrapAdminRequest,
) -> Result<BootstrapAdminResponse, AppError>
where
    S: AdminRepository + ?Sized,
{
    request.validate()?;

    let admin = AdminUser::bootstrap(request.name, request.email);
    let inserted = store.insert_admin_if_roster_empty(&admin).await?;
    if !inserted {
        return Err(AppError::Conflict(
            "Admin users already exist. Use the normal admin creation process.".to_string(),
        ));
    }

    tracing::info!(admin_id = %admin.id, "bootstrapped first admin");
    Ok(BootstrapAdminResponse {
        success: true,
        admin_id: admin.id,
        message: "First admin user created successfully!".to_string(),
    })
}

/// Whether any roster entry exists; the dashboard uses this to decide
/// between showing setup and sign-in.
pub async fn has_admins<S>(store: &S) -> Result<bool, AppError>
where
    S: AdminRepository + ?Sized,
{
    Ok(store.count_admins().await? > 0)
}
