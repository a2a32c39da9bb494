//! Models for the editorial blog.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::utils::slug::slugify;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
/// Database representation of a blog post.
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    /// URL-friendly form of the title, recomputed on every title change.
    pub slug: String,
    /// Display date as entered by the editor.
    pub publish_date: String,
    pub excerpt: String,
    /// Rich HTML from the editor.
    pub content: String,
    pub author: String,
    pub image_url: String,
    pub status: BlogStatus,
    pub featured: bool,
    pub view_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Id of the admin whose session created the post.
    pub created_by: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "TEXT", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum BlogStatus {
    Draft,
    Published,
    Archived,
}

impl BlogStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BlogStatus::Draft => "draft",
            BlogStatus::Published => "published",
            BlogStatus::Archived => "archived",
        }
    }
}

impl BlogPost {
    /// Constructs a post; new posts go straight to `published`, matching the
    /// dashboard's single-step publishing flow.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        title: String,
        subtitle: String,
        publish_date: String,
        excerpt: String,
        content: String,
        author: String,
        image_url: String,
        created_by: String,
    ) -> Self {
        let now = Utc::now();
        let slug = slugify(&title);
        Self {
            id: Uuid::new_v4().to_string(),
            title,
            subtitle,
            slug,
            publish_date,
            excerpt,
            content,
            author,
            image_url,
            status: BlogStatus::Published,
            featured: false,
            view_count: 0,
            created_at: now,
            updated_at: now,
            created_by,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
/// Gated payload for creating a post.
pub struct CreateBlogRequest {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    pub subtitle: String,
    pub publish_date: String,
    pub excerpt: String,
    pub content: String,
    #[validate(length(min = 1, message = "Author is required"))]
    pub author: String,
    pub image_url: String,
    pub session_token: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
/// Gated update; status, featured flag, and view count are untouched by
/// this payload.
pub struct UpdateBlogRequest {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    pub subtitle: String,
    pub publish_date: String,
    pub excerpt: String,
    pub content: String,
    #[validate(length(min = 1, message = "Author is required"))]
    pub author: String,
    pub image_url: String,
    pub session_token: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteBlogRequest {
    pub session_token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_posts_publish_immediately_with_derived_slug() {
        let post = BlogPost::new(
            "Fall 2026 Lookbook!".to_string(),
            "sub".to_string(),
            "2026-09-01".to_string(),
            "excerpt".to_string(),
            "<p>body</p>".to_string(),
            "Ama".to_string(),
            "cover.jpg".to_string(),
            "u1".to_string(),
        );
        assert_eq!(post.slug, "fall-2026-lookbook");
        assert_eq!(post.status, BlogStatus::Published);
        assert!(!post.featured);
        assert_eq!(post.view_count, 0);
    }
}
