//! Catalogue CRUD behind the mutation gateway.

use chrono::Utc;
use sqlx::types::Json;
use validator::Validate;

use crate::error::AppError;
use crate::models::model_profile::{
    CreateModelRequest, ModelProfile, UpdateModelRequest,
};
use crate::models::notification::NotificationKind;
use crate::repositories::{
    AdminRepository, ModelProfileRepository, NotificationRepository, SessionRepository,
};
use crate::services::gateway::require_admin_session;
use crate::services::notifications::record_event;

pub async fn list_models<S>(store: &S) -> Result<Vec<ModelProfile>, AppError>
where
    S: ModelProfileRepository + ?Sized,
{
    store.list_models().await
}

pub async fn get_model<S>(store: &S, id: &str) -> Result<ModelProfile, AppError>
where
    S: ModelProfileRepository + ?Sized,
{
    store
        .find_model_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Model not found".to_string()))
}

pub async fn create_model<S>(store: &S, request: CreateModelRequest) -> Result<String, AppError>
where
    S: SessionRepository + AdminRepository + ModelProfileRepository + NotificationRepository + ?Sized,
{
    let actor = require_admin_session(store, request.session_token.as_deref()).await?;
    request.validate()?;

    let profile = ModelProfile::new(
        request.name,
        request.age,
        request.tagline,
        request.main_image,
        request.category_images,
        request.bio,
        request.highlights,
    );
    store.insert_model(&profile).await?;

    record_event(
        store,
        format!("Model '{}' was created", profile.name),
        NotificationKind::Success,
        &actor.user_id,
    )
    .await?;

    Ok(profile.id)
}

/// Full update; `created_at` and the view counter survive from the stored
/// record.
pub async fn update_model<S>(
    store: &S,
    id: &str,
    request: UpdateModelRequest,
) -> Result<String, AppError>
where
    S: SessionRepository + AdminRepository + ModelProfileRepository + NotificationRepository + ?Sized,
{
    let actor = require_admin_session(store, request.session_token.as_deref()).await?;
    request.validate()?;

    let existing = store
        .find_model_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Model not found".to_string()))?;

    let updated = ModelProfile {
        id: existing.id,
        name: request.name,
        age: request.age,
        tagline: request.tagline,
        main_image: request.main_image,
        category_images: Json(request.category_images),
        bio: request.bio,
        status: request.status,
        highlights: Json(request.highlights),
        view_count: existing.view_count,
        created_at: existing.created_at,
        updated_at: Utc::now(),
    };
    store.update_model(&updated).await?;

    record_event(
        store,
        format!("Model '{}' was updated", updated.name),
        NotificationKind::Info,
        &actor.user_id,
    )
    .await?;

    Ok(id.to_string())
}

pub async fn delete_model<S>(
    store: &S,
    id: &str,
    session_token: Option<&str>,
) -> Result<(), AppError>
where
    S: SessionRepository + AdminRepository + ModelProfileRepository + NotificationRepository + ?Sized,
{
    let actor = require_admin_session(store, session_token).await?;

    let Some(profile) = store.find_model_by_id(id).await? else {
        return Err(AppError::NotFound("Model not found".to_string()));
    };
    store.delete_model(id).await?;

    record_event(
        store,
        format!("Model '{}' was deleted", profile.name),
        NotificationKind::Warning,
        &actor.user_id,
    )
    .await?;

    Ok(())
}
