use axum::{extract::State, Json};

use crate::{
    error::AppError,
    models::session::{
        CleanupResponse, CreateSessionRequest, CreatedSession, InvalidateSessionRequest,
        ValidateSessionRequest, ValidationResponse,
    },
    models::MessageResponse,
    repositories::Store,
    services::sessions,
    state::AppState,
};

/// POST /api/sessions: issue a session for an identity the external
/// provider already authenticated.
pub async fn create<S: Store>(
    State(state): State<AppState<S>>,
    Json(payload): Json<CreateSessionRequest>,
) -> Result<Json<CreatedSession>, AppError> {
    let created = sessions::create_session(
        state.store.as_ref(),
        state.config.session_ttl(),
        &payload.user_id,
        &payload.email,
    )
    .await?;
    Ok(Json(created))
}

/// POST /api/sessions/validate: read-only token check.
pub async fn validate<S: Store>(
    State(state): State<AppState<S>>,
    Json(payload): Json<ValidateSessionRequest>,
) -> Result<Json<ValidationResponse>, AppError> {
    let validation =
        sessions::validate_session(state.store.as_ref(), &payload.session_token).await?;
    Ok(Json(validation.into()))
}

/// POST /api/sessions/invalidate: logout; idempotent.
pub async fn invalidate<S: Store>(
    State(state): State<AppState<S>>,
    Json(payload): Json<InvalidateSessionRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    sessions::invalidate_session(state.store.as_ref(), &payload.session_token).await?;
    Ok(Json(MessageResponse::new("Session invalidated")))
}

/// POST /api/internal/sessions/cleanup: expiry sweep for trusted callers.
pub async fn cleanup<S: Store>(
    State(state): State<AppState<S>>,
) -> Result<Json<CleanupResponse>, AppError> {
    let cleaned_up = sessions::cleanup_expired_sessions(state.store.as_ref()).await?;
    Ok(Json(CleanupResponse { cleaned_up }))
}
