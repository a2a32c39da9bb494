//! In-memory store backend.
//!
//! Implements every store capability over process-local tables behind one
//! `RwLock`; a write guard spans the issuer's supersede-then-insert
//! sequence, giving it the same atomicity as the Postgres transaction.
//! Used by the test suite and for ephemeral local runs.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::error::AppError;
use crate::models::admin_user::{AdminChanges, AdminUser};
use crate::models::blog::BlogPost;
use crate::models::model_profile::ModelProfile;
use crate::models::notification::Notification;
use crate::models::session::AdminSession;
use crate::models::settings::SiteSettings;
use crate::repositories::admins::AdminRepository;
use crate::repositories::blogs::BlogRepository;
use crate::repositories::model_profiles::ModelProfileRepository;
use crate::repositories::notifications::NotificationRepository;
use crate::repositories::sessions::SessionRepository;
use crate::repositories::settings::SettingsRepository;

#[derive(Default)]
struct Tables {
    sessions: HashMap<String, AdminSession>,
    admins: HashMap<String, AdminUser>,
    models: HashMap<String, ModelProfile>,
    blogs: HashMap<String, BlogPost>,
    settings: Option<SiteSettings>,
    notifications: HashMap<String, Notification>,
}

#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionRepository for MemoryStore {
    async fn insert_session_superseding(&self, session: &AdminSession) -> Result<(), AppError> {
        let mut tables = self.tables.write().await;
        for existing in tables.sessions.values_mut() {
            if existing.user_id == session.user_id {
                existing.is_active = false;
            }
        }
        tables
            .sessions
            .insert(session.id.clone(), session.clone());
        Ok(())
    }

    async fn find_session_by_token(
        &self,
        token: &str,
    ) -> Result<Option<AdminSession>, AppError> {
        let tables = self.tables.read().await;
        Ok(tables
            .sessions
            .values()
            .find(|session| session.session_token == token)
            .cloned())
    }

    async fn deactivate_session_by_token(&self, token: &str) -> Result<(), AppError> {
        let mut tables = self.tables.write().await;
        if let Some(session) = tables
            .sessions
            .values_mut()
            .find(|session| session.session_token == token)
        {
            session.is_active = false;
        }
        Ok(())
    }

    async fn deactivate_sessions_expired_before(
        &self,
        cutoff: DateTime<Utc>,
    ) -> Result<u64, AppError> {
        let mut tables = self.tables.write().await;
        let mut swept = 0;
        for session in tables.sessions.values_mut() {
            if session.expires_at < cutoff {
                session.is_active = false;
                swept += 1;
            }
        }
        Ok(swept)
    }

    async fn list_sessions_for_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<AdminSession>, AppError> {
        let tables = self.tables.read().await;
        let mut sessions: Vec<AdminSession> = tables
            .sessions
            .values()
            .filter(|session| session.user_id == user_id)
            .cloned()
            .collect();
        sessions.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(sessions)
    }
}

#[async_trait]
impl AdminRepository for MemoryStore {
    async fn insert_admin_if_roster_empty(&self, admin: &AdminUser) -> Result<bool, AppError> {
        let mut tables = self.tables.write().await;
        if !tables.admins.is_empty() {
            return Ok(false);
        }
        tables.admins.insert(admin.id.clone(), admin.clone());
        Ok(true)
    }

    async fn insert_admin(&self, admin: &AdminUser) -> Result<(), AppError> {
        let mut tables = self.tables.write().await;
        tables.admins.insert(admin.id.clone(), admin.clone());
        Ok(())
    }

    async fn find_admin_by_id(&self, id: &str) -> Result<Option<AdminUser>, AppError> {
        let tables = self.tables.read().await;
        Ok(tables.admins.get(id).cloned())
    }

    async fn find_admin_by_email(&self, email: &str) -> Result<Option<AdminUser>, AppError> {
        let tables = self.tables.read().await;
        Ok(tables
            .admins
            .values()
            .find(|admin| admin.email == email)
            .cloned())
    }

    async fn list_admins(&self) -> Result<Vec<AdminUser>, AppError> {
        let tables = self.tables.read().await;
        let mut admins: Vec<AdminUser> = tables.admins.values().cloned().collect();
        admins.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(admins)
    }

    async fn count_admins(&self) -> Result<u64, AppError> {
        let tables = self.tables.read().await;
        Ok(tables.admins.len() as u64)
    }

    async fn update_admin(&self, id: &str, changes: &AdminChanges) -> Result<bool, AppError> {
        let mut tables = self.tables.write().await;
        match tables.admins.get_mut(id) {
            Some(admin) => {
                admin.name = changes.name.clone();
                admin.email = changes.email.clone();
                admin.role = changes.role;
                admin.status = changes.status;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_admin(&self, id: &str) -> Result<bool, AppError> {
        let mut tables = self.tables.write().await;
        Ok(tables.admins.remove(id).is_some())
    }

    async fn touch_admin_last_login(
        &self,
        email: &str,
        at: DateTime<Utc>,
    ) -> Result<bool, AppError> {
        let mut tables = self.tables.write().await;
        match tables
            .admins
            .values_mut()
            .find(|admin| admin.email == email)
        {
            Some(admin) => {
                admin.last_login = Some(at);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[async_trait]
impl ModelProfileRepository for MemoryStore {
    async fn insert_model(&self, profile: &ModelProfile) -> Result<(), AppError> {
        let mut tables = self.tables.write().await;
        tables.models.insert(profile.id.clone(), profile.clone());
        Ok(())
    }

    async fn find_model_by_id(&self, id: &str) -> Result<Option<ModelProfile>, AppError> {
        let tables = self.tables.read().await;
        Ok(tables.models.get(id).cloned())
    }

    async fn list_models(&self) -> Result<Vec<ModelProfile>, AppError> {
        let tables = self.tables.read().await;
        let mut profiles: Vec<ModelProfile> = tables.models.values().cloned().collect();
        profiles.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(profiles)
    }

    async fn update_model(&self, profile: &ModelProfile) -> Result<bool, AppError> {
        let mut tables = self.tables.write().await;
        match tables.models.get_mut(&profile.id) {
            Some(existing) => {
                *existing = profile.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_model(&self, id: &str) -> Result<bool, AppError> {
        let mut tables = self.tables.write().await;
        Ok(tables.models.remove(id).is_some())
    }
}

#[async_trait]
impl BlogRepository for MemoryStore {
    async fn insert_blog(&self, post: &BlogPost) -> Result<(), AppError> {
        let mut tables = self.tables.write().await;
        tables.blogs.insert(post.id.clone(), post.clone());
        Ok(())
    }

    async fn find_blog_by_id(&self, id: &str) -> Result<Option<BlogPost>, AppError> {
        let tables = self.tables.read().await;
        Ok(tables.blogs.get(id).cloned())
    }

    async fn list_blogs(&self) -> Result<Vec<BlogPost>, AppError> {
        let tables = self.tables.read().await;
        let mut posts: Vec<BlogPost> = tables.blogs.values().cloned().collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(posts)
    }

    async fn update_blog(&self, post: &BlogPost) -> Result<bool, AppError> {
        let mut tables = self.tables.write().await;
        match tables.blogs.get_mut(&post.id) {
            Some(existing) => {
                *existing = post.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_blog(&self, id: &str) -> Result<bool, AppError> {
        let mut tables = self.tables.write().await;
        Ok(tables.blogs.remove(id).is_some())
    }
}

#[async_trait]
impl SettingsRepository for MemoryStore {
    async fn load_settings(&self) -> Result<Option<SiteSettings>, AppError> {
        let tables = self.tables.read().await;
        Ok(tables.settings.clone())
    }

    async fn save_settings(&self, settings: &SiteSettings) -> Result<(), AppError> {
        let mut tables = self.tables.write().await;
        tables.settings = Some(settings.clone());
        Ok(())
    }
}

#[async_trait]
impl NotificationRepository for MemoryStore {
    async fn insert_notification(&self, notification: &Notification) -> Result<(), AppError> {
        let mut tables = self.tables.write().await;
        tables
            .notifications
            .insert(notification.id.clone(), notification.clone());
        Ok(())
    }

    async fn list_notifications_for_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<Notification>, AppError> {
        let tables = self.tables.read().await;
        let mut notifications: Vec<Notification> = tables
            .notifications
            .values()
            .filter(|notification| notification.user_id == user_id)
            .cloned()
            .collect();
        notifications.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(notifications)
    }

    async fn mark_notification_read(&self, id: &str) -> Result<bool, AppError> {
        let mut tables = self.tables.write().await;
        match tables.notifications.get_mut(id) {
            Some(notification) => {
                notification.read = true;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
