//! OpenAPI document served at /docs via Swagger UI.

use utoipa::OpenApi;

use crate::models::admin_user::{
    AdminRole, AdminStatus, AdminUser, BootstrapAdminRequest, BootstrapAdminResponse,
    CreateAdminRequest, DeleteAdminRequest, HasAdminsResponse, TouchLastLoginRequest,
    UpdateAdminRequest,
};
use crate::models::blog::{
    BlogPost, BlogStatus, CreateBlogRequest, DeleteBlogRequest, UpdateBlogRequest,
};
use crate::models::model_profile::{
    CategoryImages, CreateModelRequest, DeleteModelRequest, ModelProfile, ProfileHighlights,
    ProfileStatus, UpdateModelRequest,
};
use crate::models::notification::{CreateNotificationRequest, Notification};
use crate::models::session::{
    AdminSession, CleanupResponse, CreateSessionRequest, CreatedSession,
    InvalidateSessionRequest, RejectionReason, ValidateSessionRequest, ValidationResponse,
};
use crate::models::settings::{SiteSettings, UpdateSettingsRequest};
use crate::models::{IdResponse, MessageResponse};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "genv-backend",
        description = "Model-agency CMS backend: admin sessions, roster, and gated content API"
    ),
    components(schemas(
        AdminSession,
        CreateSessionRequest,
        CreatedSession,
        ValidateSessionRequest,
        ValidationResponse,
        RejectionReason,
        InvalidateSessionRequest,
        CleanupResponse,
        AdminUser,
        AdminRole,
        AdminStatus,
        CreateAdminRequest,
        UpdateAdminRequest,
        DeleteAdminRequest,
        BootstrapAdminRequest,
        BootstrapAdminResponse,
        HasAdminsResponse,
        TouchLastLoginRequest,
        ModelProfile,
        CategoryImages,
        ProfileHighlights,
        ProfileStatus,
        CreateModelRequest,
        UpdateModelRequest,
        DeleteModelRequest,
        BlogPost,
        BlogStatus,
        CreateBlogRequest,
        UpdateBlogRequest,
        DeleteBlogRequest,
        SiteSettings,
        UpdateSettingsRequest,
        Notification,
        CreateNotificationRequest,
        IdResponse,
        MessageResponse,
    ))
)]
pub struct ApiDoc;
