//! Operation layer. Every function takes the store capability it needs as
//! an explicit parameter; the HTTP handlers are thin adapters over these.

pub mod admins;
pub mod blogs;
pub mod gateway;
pub mod model_profiles;
pub mod notifications;
pub mod sessions;
pub mod settings;
pub mod setup;
