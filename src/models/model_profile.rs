//! Models for the public catalogue of agency talent.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::validation::rules;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
/// Database representation of one catalogue entry.
pub struct ModelProfile {
    pub id: String,
    pub name: String,
    pub age: i32,
    pub tagline: String,
    /// Main profile image URL.
    pub main_image: String,
    /// One image per styling category.
    #[schema(value_type = CategoryImages)]
    pub category_images: Json<CategoryImages>,
    pub bio: String,
    pub status: ProfileStatus,
    #[schema(value_type = ProfileHighlights)]
    pub highlights: Json<ProfileHighlights>,
    /// Display metric; starts at zero and survives updates.
    pub view_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CategoryImages {
    pub casual: String,
    pub formal: String,
    pub sports: String,
    pub evening: String,
    pub commercial: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProfileHighlights {
    pub age_range: String,
    pub skin_tone: String,
    pub style_vibe: String,
    pub height: String,
    pub build: String,
    pub ethnicity: String,
    pub features: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "TEXT", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ProfileStatus {
    Active,
    Inactive,
    Featured,
}

impl ProfileStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileStatus::Active => "active",
            ProfileStatus::Inactive => "inactive",
            ProfileStatus::Featured => "featured",
        }
    }
}

impl ModelProfile {
    /// Constructs a fresh catalogue entry; new profiles start active with a
    /// zero view count.
    pub fn new(
        name: String,
        age: i32,
        tagline: String,
        main_image: String,
        category_images: CategoryImages,
        bio: String,
        highlights: ProfileHighlights,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            age,
            tagline,
            main_image,
            category_images: Json(category_images),
            bio,
            status: ProfileStatus::Active,
            highlights: Json(highlights),
            view_count: 0,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
/// Gated payload for creating a catalogue entry.
pub struct CreateModelRequest {
    #[validate(custom(function = "rules::validate_display_name"))]
    pub name: String,
    #[validate(range(min = 1, max = 120, message = "Age out of range"))]
    pub age: i32,
    pub tagline: String,
    pub main_image: String,
    pub category_images: CategoryImages,
    pub bio: String,
    pub highlights: ProfileHighlights,
    pub session_token: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
/// Gated full update; status becomes editable once the entry exists.
pub struct UpdateModelRequest {
    #[validate(custom(function = "rules::validate_display_name"))]
    pub name: String,
    #[validate(range(min = 1, max = 120, message = "Age out of range"))]
    pub age: i32,
    pub tagline: String,
    pub main_image: String,
    pub category_images: CategoryImages,
    pub bio: String,
    pub status: ProfileStatus,
    pub highlights: ProfileHighlights,
    pub session_token: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteModelRequest {
    pub session_token: Option<String>,
}
