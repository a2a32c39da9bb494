//! Site-settings store capability.

use async_trait::async_trait;

use crate::error::AppError;
use crate::models::settings::SiteSettings;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// The current settings record, if one has ever been written.
    async fn load_settings(&self) -> Result<Option<SiteSettings>, AppError>;

    /// Insert-or-replace keyed by `settings.id`.
    async fn save_settings(&self, settings: &SiteSettings) -> Result<(), AppError>;
}
