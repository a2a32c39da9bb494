//! Site-settings read, seed, and gated upsert.

use chrono::Utc;
use validator::Validate;

use crate::error::AppError;
use crate::models::notification::NotificationKind;
use crate::models::settings::{SiteSettings, UpdateSettingsRequest};
use crate::repositories::{
    AdminRepository, NotificationRepository, SessionRepository, SettingsRepository,
};
use crate::services::gateway::require_admin_session;
use crate::services::notifications::record_event;

pub async fn get_settings<S>(store: &S) -> Result<Option<SiteSettings>, AppError>
where
    S: SettingsRepository + ?Sized,
{
    store.load_settings().await
}

/// Seeds the default record on first run; returns the existing record's id
/// when one is already present.
pub async fn init_default_settings<S>(store: &S) -> Result<String, AppError>
where
    S: SettingsRepository + ?Sized,
{
    if let Some(existing) = store.load_settings().await? {
        return Ok(existing.id);
    }
    let settings = SiteSettings::default_record();
    store.save_settings(&settings).await?;
    Ok(settings.id)
}

/// Gated upsert: updates the current record in place, or creates one when
/// none exists yet.
pub async fn update_settings<S>(
    store: &S,
    request: UpdateSettingsRequest,
) -> Result<String, AppError>
where
    S: SessionRepository + AdminRepository + SettingsRepository + NotificationRepository + ?Sized,
{
    let actor = require_admin_session(store, request.session_token.as_deref()).await?;
    request.validate()?;

    let settings = match store.load_settings().await? {
        Some(mut current) => {
            current.site_name = request.site_name;
            current.logo_url = request.logo_url;
            current.contact_email = request.contact_email;
            current.phone_number = request.phone_number;
            current.address = request.address;
            current.updated_at = Utc::now();
            current
        }
        None => SiteSettings::new(
            request.site_name,
            request.logo_url,
            request.contact_email,
            request.phone_number,
            request.address,
        ),
    };
    store.save_settings(&settings).await?;

    record_event(
        store,
        "Site settings were updated".to_string(),
        NotificationKind::Info,
        &actor.user_id,
    )
    .await?;

    Ok(settings.id)
}
