//! Expiry sweep for admin sessions, intended to run from cron. Validation
//! rejects expired sessions on its own; this only reconciles the stored
//! `is_active` flags.

use genv_backend::{
    config::Config, db::connection::create_pool, repositories::PgStore, services::sessions,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = Config::load()?;
    let pool = create_pool(&config.database_url).await?;
    let store = PgStore::new(pool);

    let swept = sessions::cleanup_expired_sessions(&store)
        .await
        .expect("cleanup expired sessions");
    tracing::info!("Deactivated {} expired admin sessions", swept);

    Ok(())
}
