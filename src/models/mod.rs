//! Data models shared across store implementations and API handlers.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub mod admin_user;
pub mod blog;
pub mod model_profile;
pub mod notification;
pub mod session;
pub mod settings;

/// Response carrying the identifier of a created or updated record.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct IdResponse {
    pub id: String,
}

impl IdResponse {
    pub fn new(id: String) -> Self {
        Self { id }
    }
}

/// Plain acknowledgment body for operations without a payload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
