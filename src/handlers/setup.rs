use axum::{extract::State, Json};

use crate::{
    error::AppError,
    models::admin_user::{BootstrapAdminRequest, BootstrapAdminResponse, HasAdminsResponse},
    repositories::Store,
    services::setup,
    state::AppState,
};

/// POST /api/setup/first-admin: session-free bootstrap, empty roster only.
pub async fn create_first_admin<S: Store>(
    State(state): State<AppState<S>>,
    Json(payload): Json<BootstrapAdminRequest>,
) -> Result<Json<BootstrapAdminResponse>, AppError> {
    let response = setup::create_first_admin(state.store.as_ref(), payload).await?;
    Ok(Json(response))
}

/// GET /api/setup/has-admins
pub async fn has_admins<S: Store>(
    State(state): State<AppState<S>>,
) -> Result<Json<HasAdminsResponse>, AppError> {
    let has_admins = setup::has_admins(state.store.as_ref()).await?;
    Ok(Json(HasAdminsResponse { has_admins }))
}
