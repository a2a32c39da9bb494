//! Blog store capability.

use async_trait::async_trait;

use crate::error::AppError;
use crate::models::blog::BlogPost;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlogRepository: Send + Sync {
    async fn insert_blog(&self, post: &BlogPost) -> Result<(), AppError>;

    async fn find_blog_by_id(&self, id: &str) -> Result<Option<BlogPost>, AppError>;

    /// All posts, newest first.
    async fn list_blogs(&self) -> Result<Vec<BlogPost>, AppError>;

    /// Whole-record replace keyed by `post.id`; returns `false` when no
    /// record matched.
    async fn update_blog(&self, post: &BlogPost) -> Result<bool, AppError>;

    /// Hard delete; returns `false` when no record matched.
    async fn delete_blog(&self, id: &str) -> Result<bool, AppError>;
}
