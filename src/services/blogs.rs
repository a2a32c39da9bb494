//! Blog CRUD behind the mutation gateway.

use chrono::Utc;
use validator::Validate;

use crate::error::AppError;
use crate::models::blog::{BlogPost, CreateBlogRequest, UpdateBlogRequest};
use crate::models::notification::NotificationKind;
use crate::repositories::{
    AdminRepository, BlogRepository, NotificationRepository, SessionRepository,
};
use crate::services::gateway::require_admin_session;
use crate::services::notifications::record_event;
use crate::utils::slug::slugify;

pub async fn list_blogs<S>(store: &S) -> Result<Vec<BlogPost>, AppError>
where
    S: BlogRepository + ?Sized,
{
    store.list_blogs().await
}

pub async fn get_blog<S>(store: &S, id: &str) -> Result<BlogPost, AppError>
where
    S: BlogRepository + ?Sized,
{
    store
        .find_blog_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Blog post not found".to_string()))
}

pub async fn create_blog<S>(store: &S, request: CreateBlogRequest) -> Result<String, AppError>
where
    S: SessionRepository + AdminRepository + BlogRepository + NotificationRepository + ?Sized,
{
    let actor = require_admin_session(store, request.session_token.as_deref()).await?;
    request.validate()?;

    let post = BlogPost::new(
        request.title,
        request.subtitle,
        request.publish_date,
        request.excerpt,
        request.content,
        request.author,
        request.image_url,
        actor.user_id.clone(),
    );
    store.insert_blog(&post).await?;

    record_event(
        store,
        format!("Blog post '{}' was created", post.title),
        NotificationKind::Success,
        &actor.user_id,
    )
    .await?;

    Ok(post.id)
}

/// Gated update; the slug follows the new title, while status, featured
/// flag, view counter, and provenance survive from the stored record.
pub async fn update_blog<S>(
    store: &S,
    id: &str,
    request: UpdateBlogRequest,
) -> Result<String, AppError>
where
    S: SessionRepository + AdminRepository + BlogRepository + NotificationRepository + ?Sized,
{
    let actor = require_admin_session(store, request.session_token.as_deref()).await?;
    request.validate()?;

    let existing = store
        .find_blog_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Blog post not found".to_string()))?;

    let slug = slugify(&request.title);
    let updated = BlogPost {
        id: existing.id,
        title: request.title,
        subtitle: request.subtitle,
        slug,
        publish_date: request.publish_date,
        excerpt: request.excerpt,
        content: request.content,
        author: request.author,
        image_url: request.image_url,
        status: existing.status,
        featured: existing.featured,
        view_count: existing.view_count,
        created_at: existing.created_at,
        updated_at: Utc::now(),
        created_by: existing.created_by,
    };
    store.update_blog(&updated).await?;

    record_event(
        store,
        format!("Blog post '{}' was updated", updated.title),
        NotificationKind::Info,
        &actor.user_id,
    )
    .await?;

    Ok(id.to_string())
}

pub async fn delete_blog<S>(
    store: &S,
    id: &str,
    session_token: Option<&str>,
) -> Result<(), AppError>
where
    S: SessionRepository + AdminRepository + BlogRepository + NotificationRepository + ?Sized,
{
    let actor = require_admin_session(store, session_token).await?;

    let Some(post) = store.find_blog_by_id(id).await? else {
        return Err(AppError::NotFound("Blog post not found".to_string()));
    };
    store.delete_blog(id).await?;

    record_event(
        store,
        format!("Blog post '{}' was deleted", post.title),
        NotificationKind::Warning,
        &actor.user_id,
    )
    .await?;

    Ok(())
}
