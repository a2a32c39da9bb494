use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::AppError,
    models::blog::{BlogPost, CreateBlogRequest, DeleteBlogRequest, UpdateBlogRequest},
    models::{IdResponse, MessageResponse},
    repositories::Store,
    services::blogs,
    state::AppState,
};

/// GET /api/blogs: newest first.
pub async fn list<S: Store>(
    State(state): State<AppState<S>>,
) -> Result<Json<Vec<BlogPost>>, AppError> {
    let posts = blogs::list_blogs(state.store.as_ref()).await?;
    Ok(Json(posts))
}

/// GET /api/blogs/{id}
pub async fn get_one<S: Store>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<Json<BlogPost>, AppError> {
    let post = blogs::get_blog(state.store.as_ref(), &id).await?;
    Ok(Json(post))
}

/// POST /api/blogs: gated.
pub async fn create<S: Store>(
    State(state): State<AppState<S>>,
    Json(payload): Json<CreateBlogRequest>,
) -> Result<Json<IdResponse>, AppError> {
    let id = blogs::create_blog(state.store.as_ref(), payload).await?;
    Ok(Json(IdResponse::new(id)))
}

/// PUT /api/blogs/{id}: gated.
pub async fn update<S: Store>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateBlogRequest>,
) -> Result<Json<IdResponse>, AppError> {
    let id = blogs::update_blog(state.store.as_ref(), &id, payload).await?;
    Ok(Json(IdResponse::new(id)))
}

/// DELETE /api/blogs/{id}: gated.
pub async fn remove<S: Store>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    Json(payload): Json<DeleteBlogRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    blogs::delete_blog(state.store.as_ref(), &id, payload.session_token.as_deref()).await?;
    Ok(Json(MessageResponse::new("Blog post deleted")))
}
