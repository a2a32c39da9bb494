use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    error::AppError,
    models::notification::{CreateNotificationRequest, Notification},
    models::{IdResponse, MessageResponse},
    repositories::Store,
    services::notifications,
    state::AppState,
};

#[derive(Debug, Deserialize, IntoParams)]
pub struct UserQuery {
    pub user_id: String,
}

/// GET /api/notifications?user_id=: newest first.
pub async fn list<S: Store>(
    State(state): State<AppState<S>>,
    Query(query): Query<UserQuery>,
) -> Result<Json<Vec<Notification>>, AppError> {
    let events = notifications::list_for_user(state.store.as_ref(), &query.user_id).await?;
    Ok(Json(events))
}

/// POST /api/notifications: direct append; kind is free-form here.
pub async fn create<S: Store>(
    State(state): State<AppState<S>>,
    Json(payload): Json<CreateNotificationRequest>,
) -> Result<Json<IdResponse>, AppError> {
    let id = notifications::record_event(
        state.store.as_ref(),
        payload.message,
        payload.kind.into(),
        &payload.user_id,
    )
    .await?;
    Ok(Json(IdResponse::new(id)))
}

/// PUT /api/notifications/{id}/read: the only permitted mutation.
pub async fn mark_read<S: Store>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    notifications::mark_read(state.store.as_ref(), &id).await?;
    Ok(Json(MessageResponse::new("Notification marked read")))
}
