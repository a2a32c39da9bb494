use async_trait::async_trait;

use crate::error::AppError;
use crate::models::settings::SiteSettings;
use crate::repositories::settings::SettingsRepository;

use super::PgStore;

const SETTINGS_COLUMNS: &str =
    "id, site_name, logo_url, contact_email, phone_number, address, updated_at";

#[async_trait]
impl SettingsRepository for PgStore {
    async fn load_settings(&self) -> Result<Option<SiteSettings>, AppError> {
        let query = format!(
            "SELECT {} FROM site_settings ORDER BY updated_at DESC LIMIT 1",
            SETTINGS_COLUMNS
        );
        let settings = sqlx::query_as::<_, SiteSettings>(&query)
            .fetch_optional(self.pool())
            .await?;
        Ok(settings)
    }

    async fn save_settings(&self, settings: &SiteSettings) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO site_settings \
             (id, site_name, logo_url, contact_email, phone_number, address, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             ON CONFLICT (id) DO UPDATE SET \
                site_name = EXCLUDED.site_name, \
                logo_url = EXCLUDED.logo_url, \
                contact_email = EXCLUDED.contact_email, \
                phone_number = EXCLUDED.phone_number, \
                address = EXCLUDED.address, \
                updated_at = EXCLUDED.updated_at",
        )
        .bind(&settings.id)
        .bind(&settings.site_name)
        .bind(&settings.logo_url)
        .bind(&settings.contact_email)
        .bind(&settings.phone_number)
        .bind(&settings.address)
        .bind(settings.updated_at)
        .execute(self.pool())
        .await?;
        Ok(())
    }
}
