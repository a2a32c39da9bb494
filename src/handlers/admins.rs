use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    error::AppError,
    models::admin_user::{
        AdminUser, CreateAdminRequest, DeleteAdminRequest, TouchLastLoginRequest,
        UpdateAdminRequest,
    },
    models::{IdResponse, MessageResponse},
    repositories::Store,
    services::admins,
    state::AppState,
};

#[derive(Debug, Deserialize, IntoParams)]
pub struct EmailQuery {
    pub email: String,
}

/// GET /api/admins
pub async fn list<S: Store>(
    State(state): State<AppState<S>>,
) -> Result<Json<Vec<AdminUser>>, AppError> {
    let roster = admins::list_admins(state.store.as_ref()).await?;
    Ok(Json(roster))
}

/// GET /api/admins/by-email?email=
pub async fn by_email<S: Store>(
    State(state): State<AppState<S>>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<Option<AdminUser>>, AppError> {
    let admin = admins::find_by_email(state.store.as_ref(), &query.email).await?;
    Ok(Json(admin))
}

/// POST /api/admins: gated.
pub async fn create<S: Store>(
    State(state): State<AppState<S>>,
    Json(payload): Json<CreateAdminRequest>,
) -> Result<Json<IdResponse>, AppError> {
    let id = admins::create_admin(state.store.as_ref(), payload).await?;
    Ok(Json(IdResponse::new(id)))
}

/// PUT /api/admins/{id}: gated.
pub async fn update<S: Store>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateAdminRequest>,
) -> Result<Json<IdResponse>, AppError> {
    let id = admins::update_admin(state.store.as_ref(), &id, payload).await?;
    Ok(Json(IdResponse::new(id)))
}

/// DELETE /api/admins/{id}: gated.
pub async fn remove<S: Store>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    Json(payload): Json<DeleteAdminRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    admins::delete_admin(
        state.store.as_ref(),
        &id,
        payload.session_token.as_deref(),
    )
    .await?;
    Ok(Json(MessageResponse::new("Admin user deleted")))
}

/// POST /api/admins/last-login
pub async fn last_login<S: Store>(
    State(state): State<AppState<S>>,
    Json(payload): Json<TouchLastLoginRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    admins::touch_last_login(state.store.as_ref(), &payload.email).await?;
    Ok(Json(MessageResponse::new("Last login recorded")))
}
