use async_trait::async_trait;

use crate::error::AppError;
use crate::models::model_profile::ModelProfile;
use crate::repositories::model_profiles::ModelProfileRepository;

use super::PgStore;

const MODEL_COLUMNS: &str = "id, name, age, tagline, main_image, category_images, bio, status, \
                             highlights, view_count, created_at, updated_at";

#[async_trait]
impl ModelProfileRepository for PgStore {
    async fn insert_model(&self, profile: &ModelProfile) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO model_profiles \
             (id, name, age, tagline, main_image, category_images, bio, status, \
              highlights, view_count, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)",
        )
        .bind(&profile.id)
        .bind(&profile.name)
        .bind(profile.age)
        .bind(&profile.tagline)
        .bind(&profile.main_image)
        .bind(&profile.category_images)
        .bind(&profile.bio)
        .bind(profile.status.as_str())
        .bind(&profile.highlights)
        .bind(profile.view_count)
        .bind(profile.created_at)
        .bind(profile.updated_at)
        .execute(self.pool())
        .await?;
        Ok(())
    }

    async fn find_model_by_id(&self, id: &str) -> Result<Option<ModelProfile>, AppError> {
        let query = format!("SELECT {} FROM model_profiles WHERE id = $1", MODEL_COLUMNS);
        let profile = sqlx::query_as::<_, ModelProfile>(&query)
            .bind(id)
            .fetch_optional(self.pool())
            .await?;
        Ok(profile)
    }

    async fn list_models(&self) -> Result<Vec<ModelProfile>, AppError> {
        let query = format!(
            "SELECT {} FROM model_profiles ORDER BY created_at ASC",
            MODEL_COLUMNS
        );
        let profiles = sqlx::query_as::<_, ModelProfile>(&query)
            .fetch_all(self.pool())
            .await?;
        Ok(profiles)
    }

    async fn update_model(&self, profile: &ModelProfile) -> Result<bool, AppError> {
        let result = sqlx::query(
            "UPDATE model_profiles SET name = $2, age = $3, tagline = $4, main_image = $5, \
             category_images = $6, bio = $7, status = $8, highlights = $9, view_count = $10, \
             updated_at = $11 \
             WHERE id = $1",
        )
        .bind(&profile.id)
        .bind(&profile.name)
        .bind(profile.age)
        .bind(&profile.tagline)
        .bind(&profile.main_image)
        .bind(&profile.category_images)
        .bind(&profile.bio)
        .bind(profile.status.as_str())
        .bind(&profile.highlights)
        .bind(profile.view_count)
        .bind(profile.updated_at)
        .execute(self.pool())
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_model(&self, id: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM model_profiles WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
