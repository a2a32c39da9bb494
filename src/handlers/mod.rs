//! HTTP adapters over the service layer, plus the route table.

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::repositories::Store;
use crate::state::AppState;

pub mod admins;
pub mod blogs;
pub mod model_profiles;
pub mod notifications;
pub mod sessions;
pub mod settings;
pub mod setup;

/// Builds the JSON API router for any store backend.
pub fn api_router<S: Store + 'static>(state: AppState<S>) -> Router {
    Router::new()
        // Session lifecycle
        .route("/api/sessions", post(sessions::create::<S>))
        .route("/api/sessions/validate", post(sessions::validate::<S>))
        .route("/api/sessions/invalidate", post(sessions::invalidate::<S>))
        .route(
            "/api/internal/sessions/cleanup",
            post(sessions::cleanup::<S>),
        )
        // First-run bootstrap
        .route("/api/setup/first-admin", post(setup::create_first_admin::<S>))
        .route("/api/setup/has-admins", get(setup::has_admins::<S>))
        // Admin roster
        .route(
            "/api/admins",
            get(admins::list::<S>).post(admins::create::<S>),
        )
        .route("/api/admins/by-email", get(admins::by_email::<S>))
        .route(
            "/api/admins/{id}",
            put(admins::update::<S>).delete(admins::remove::<S>),
        )
        .route("/api/admins/last-login", post(admins::last_login::<S>))
        // Model catalogue
        .route(
            "/api/models",
            get(model_profiles::list::<S>).post(model_profiles::create::<S>),
        )
        .route(
            "/api/models/{id}",
            get(model_profiles::get_one::<S>)
                .put(model_profiles::update::<S>)
                .delete(model_profiles::remove::<S>),
        )
        // Blog
        .route("/api/blogs", get(blogs::list::<S>).post(blogs::create::<S>))
        .route(
            "/api/blogs/{id}",
            get(blogs::get_one::<S>)
                .put(blogs::update::<S>)
                .delete(blogs::remove::<S>),
        )
        // Site settings
        .route(
            "/api/settings",
            get(settings::get_current::<S>).put(settings::update::<S>),
        )
        .route("/api/settings/init", post(settings::init_default::<S>))
        // Notifications
        .route(
            "/api/notifications",
            get(notifications::list::<S>).post(notifications::create::<S>),
        )
        .route(
            "/api/notifications/{id}/read",
            put(notifications::mark_read::<S>),
        )
        .with_state(state)
}
