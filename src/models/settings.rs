//! Site-wide settings: a single logical record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct SiteSettings {
    pub id: String,
    pub site_name: String,
    pub logo_url: String,
    pub contact_email: String,
    pub phone_number: String,
    pub address: String,
    pub updated_at: DateTime<Utc>,
}

impl SiteSettings {
    pub fn new(
        site_name: String,
        logo_url: String,
        contact_email: String,
        phone_number: String,
        address: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            site_name,
            logo_url,
            contact_email,
            phone_number,
            address,
            updated_at: Utc::now(),
        }
    }

    /// Seed values applied on first run when no record exists yet.
    pub fn default_record() -> Self {
        Self::new(
            "GenV Studios".to_string(),
            "https://via.placeholder.com/150x50/d4af37/000000?text=GenV".to_string(),
            "contact@genvstudios.com".to_string(),
            "+1 (555) 123-4567".to_string(),
            "123 Fashion Avenue, Style City, SC 12345".to_string(),
        )
    }
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
/// Gated upsert payload for the settings record.
pub struct UpdateSettingsRequest {
    #[validate(length(min = 1, message = "Site name is required"))]
    pub site_name: String,
    pub logo_url: String,
    #[validate(email(message = "Invalid contact email"))]
    pub contact_email: String,
    pub phone_number: String,
    pub address: String,
    pub session_token: Option<String>,
}
