use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::AppError,
    models::model_profile::{
        CreateModelRequest, DeleteModelRequest, ModelProfile, UpdateModelRequest,
    },
    models::{IdResponse, MessageResponse},
    repositories::Store,
    services::model_profiles,
    state::AppState,
};

/// GET /api/models: public catalogue.
pub async fn list<S: Store>(
    State(state): State<AppState<S>>,
) -> Result<Json<Vec<ModelProfile>>, AppError> {
    let profiles = model_profiles::list_models(state.store.as_ref()).await?;
    Ok(Json(profiles))
}

/// GET /api/models/{id}
pub async fn get_one<S: Store>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<Json<ModelProfile>, AppError> {
    let profile = model_profiles::get_model(state.store.as_ref(), &id).await?;
    Ok(Json(profile))
}

/// POST /api/models: gated.
pub async fn create<S: Store>(
    State(state): State<AppState<S>>,
    Json(payload): Json<CreateModelRequest>,
) -> Result<Json<IdResponse>, AppError> {
    let id = model_profiles::create_model(state.store.as_ref(), payload).await?;
    Ok(Json(IdResponse::new(id)))
}

/// PUT /api/models/{id}: gated.
pub async fn update<S: Store>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateModelRequest>,
) -> Result<Json<IdResponse>, AppError> {
    let id = model_profiles::update_model(state.store.as_ref(), &id, payload).await?;
    Ok(Json(IdResponse::new(id)))
}

/// DELETE /api/models/{id}: gated.
pub async fn remove<S: Store>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    Json(payload): Json<DeleteModelRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    model_profiles::delete_model(
        state.store.as_ref(),
        &id,
        payload.session_token.as_deref(),
    )
    .await?;
    Ok(Json(MessageResponse::new("Model deleted")))
}
