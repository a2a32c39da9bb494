use async_trait::async_trait;

use crate::error::AppError;
use crate::models::blog::BlogPost;
use crate::repositories::blogs::BlogRepository;

use super::PgStore;

const BLOG_COLUMNS: &str = "id, title, subtitle, slug, publish_date, excerpt, content, author, \
                            image_url, status, featured, view_count, created_at, updated_at, \
                            created_by";

#[async_trait]
impl BlogRepository for PgStore {
    async fn insert_blog(&self, post: &BlogPost) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO blog_posts \
             (id, title, subtitle, slug, publish_date, excerpt, content, author, image_url, \
              status, featured, view_count, created_at, updated_at, created_by) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)",
        )
        .bind(&post.id)
        .bind(&post.title)
        .bind(&post.subtitle)
        .bind(&post.slug)
        .bind(&post.publish_date)
        .bind(&post.excerpt)
        .bind(&post.content)
        .bind(&post.author)
        .bind(&post.image_url)
        .bind(post.status.as_str())
        .bind(post.featured)
        .bind(post.view_count)
        .bind(post.created_at)
        .bind(post.updated_at)
        .bind(&post.created_by)
        .execute(self.pool())
        .await?;
        Ok(())
    }

    async fn find_blog_by_id(&self, id: &str) -> Result<Option<BlogPost>, AppError> {
        let query = format!("SELECT {} FROM blog_posts WHERE id = $1", BLOG_COLUMNS);
        let post = sqlx::query_as::<_, BlogPost>(&query)
            .bind(id)
            .fetch_optional(self.pool())
            .await?;
        Ok(post)
    }

    async fn list_blogs(&self) -> Result<Vec<BlogPost>, AppError> {
        let query = format!(
            "SELECT {} FROM blog_posts ORDER BY created_at DESC",
            BLOG_COLUMNS
        );
        let posts = sqlx::query_as::<_, BlogPost>(&query)
            .fetch_all(self.pool())
            .await?;
        Ok(posts)
    }

    async fn update_blog(&self, post: &BlogPost) -> Result<bool, AppError> {
        let result = sqlx::query(
            "UPDATE blog_posts SET title = $2, subtitle = $3, slug = $4, publish_date = $5, \
             excerpt = $6, content = $7, author = $8, image_url = $9, status = $10, \
             featured = $11, view_count = $12, updated_at = $13 \
             WHERE id = $1",
        )
        .bind(&post.id)
        .bind(&post.title)
        .bind(&post.subtitle)
        .bind(&post.slug)
        .bind(&post.publish_date)
        .bind(&post.excerpt)
        .bind(&post.content)
        .bind(&post.author)
        .bind(&post.image_url)
        .bind(post.status.as_str())
        .bind(post.featured)
        .bind(post.view_count)
        .bind(post.updated_at)
        .execute(self.pool())
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_blog(&self, id: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM blog_posts WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
