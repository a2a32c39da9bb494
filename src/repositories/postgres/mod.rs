//! Postgres-backed store.
//!
//! One `PgStore` implements every capability trait over the shared pool;
//! the per-entity impls live in the sibling modules.

mod admins;
mod blogs;
mod model_profiles;
mod notifications;
mod sessions;
mod settings;

use crate::db::connection::DbPool;

#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub(crate) fn pool(&self) -> &sqlx::PgPool {
        &self.pool
    }
}
