//! Store-capability traits and the bundled backends.
//!
//! Services never reach for a hidden database handle: every operation takes
//! one of these capabilities as an explicit parameter, so tests substitute
//! [`MemoryStore`] for the Postgres-backed [`PgStore`].

pub mod admins;
pub mod blogs;
pub mod memory;
pub mod model_profiles;
pub mod notifications;
pub mod postgres;
pub mod sessions;
pub mod settings;

pub use admins::AdminRepository;
pub use blogs::BlogRepository;
pub use memory::MemoryStore;
pub use model_profiles::ModelProfileRepository;
pub use notifications::NotificationRepository;
pub use postgres::PgStore;
pub use sessions::SessionRepository;
pub use settings::SettingsRepository;

/// Aggregate capability implemented by every bundled backend; the HTTP
/// layer is generic over it.
pub trait Store:
    SessionRepository
    + AdminRepository
    + ModelProfileRepository
    + BlogRepository
    + SettingsRepository
    + NotificationRepository
{
}

impl<T> Store for T where
    T: SessionRepository
        + AdminRepository
        + ModelProfileRepository
        + BlogRepository
        + SettingsRepository
        + NotificationRepository
{
}
