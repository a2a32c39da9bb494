use axum::{extract::State, Json};

use crate::{
    error::AppError,
    models::settings::{SiteSettings, UpdateSettingsRequest},
    models::IdResponse,
    repositories::Store,
    services::settings,
    state::AppState,
};

/// GET /api/settings: the current record, or null before first init.
pub async fn get_current<S: Store>(
    State(state): State<AppState<S>>,
) -> Result<Json<Option<SiteSettings>>, AppError> {
    let current = settings::get_settings(state.store.as_ref()).await?;
    Ok(Json(current))
}

/// POST /api/settings/init: seed defaults when no record exists.
pub async fn init_default<S: Store>(
    State(state): State<AppState<S>>,
) -> Result<Json<IdResponse>, AppError> {
    let id = settings::init_default_settings(state.store.as_ref()).await?;
    Ok(Json(IdResponse::new(id)))
}

/// PUT /api/settings: gated upsert.
pub async fn update<S: Store>(
    State(state): State<AppState<S>>,
    Json(payload): Json<UpdateSettingsRequest>,
) -> Result<Json<IdResponse>, AppError> {
    let id = settings::update_settings(state.store.as_ref(), payload).await?;
    Ok(Json(IdResponse::new(id)))
}
