//! Catalogue store capability.

use async_trait::async_trait;

use crate::error::AppError;
use crate::models::model_profile::ModelProfile;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ModelProfileRepository: Send + Sync {
    async fn insert_model(&self, profile: &ModelProfile) -> Result<(), AppError>;

    async fn find_model_by_id(&self, id: &str) -> Result<Option<ModelProfile>, AppError>;

    /// Full catalogue, oldest first.
    async fn list_models(&self) -> Result<Vec<ModelProfile>, AppError>;

    /// Whole-record replace keyed by `profile.id`; returns `false` when no
    /// record matched.
    async fn update_model(&self, profile: &ModelProfile) -> Result<bool, AppError>;

    /// Hard delete; returns `false` when no record matched.
    async fn delete_model(&self, id: &str) -> Result<bool, AppError>;
}
