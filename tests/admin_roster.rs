//! Bootstrap exclusivity and gated roster management against the in-memory
//! store.

use chrono::Duration;
use genv_backend::error::AppError;
use genv_backend::models::admin_user::{
    AdminRole, AdminStatus, BootstrapAdminRequest, CreateAdminRequest, UpdateAdminRequest,
};
use genv_backend::repositories::{AdminRepository, MemoryStore, NotificationRepository};
use genv_backend::services::{admins, sessions, setup};

fn bootstrap_request(name: &str, email: &str) -> BootstrapAdminRequest {
    BootstrapAdminRequest {
        name: name.to_string(),
        email: email.to_string(),
    }
}

async fn signed_in_admin(store: &MemoryStore) -> String {
    setup::create_first_admin(store, bootstrap_request("Ama", "ama@x.com"))
        .await
        .expect("bootstrap");
    sessions::create_session(store, Duration::hours(24), "u1", "ama@x.com")
        .await
        .expect("create session")
        .session_token
}

#[tokio::test]
async fn bootstrap_succeeds_only_while_the_roster_is_empty() {
    let store = MemoryStore::new();
    assert!(!setup::has_admins(&store).await.unwrap());

    let response = setup::create_first_admin(&store, bootstrap_request("Ama", "ama@x.com"))
        .await
        .unwrap();
    assert!(response.success);
    assert!(!response.admin_id.is_empty());
    assert!(setup::has_admins(&store).await.unwrap());

    // A different e-mail does not reopen the bootstrap path.
    let err = setup::create_first_admin(&store, bootstrap_request("Kofi", "kofi@x.com"))
        .await
        .unwrap_err();
    match err {
        AppError::Conflict(msg) => {
            assert!(msg.contains("Admin users already exist"), "got: {msg}")
        }
        other => panic!("expected Conflict, got {:?}", other),
    }
    assert_eq!(store.count_admins().await.unwrap(), 1);
}

#[tokio::test]
async fn bootstrap_admin_is_an_active_super_admin() {
    let store = MemoryStore::new();
    setup::create_first_admin(&store, bootstrap_request("Ama", "ama@x.com"))
        .await
        .unwrap();

    let admin = store
        .find_admin_by_email("ama@x.com")
        .await
        .unwrap()
        .expect("roster entry");
    assert_eq!(admin.role, AdminRole::SuperAdmin);
    assert_eq!(admin.status, AdminStatus::Active);
    assert_eq!(admin.created_by, "system");
}

#[tokio::test]
async fn gated_creation_rejects_duplicate_emails_after_authorization() {
    let store = MemoryStore::new();
    let token = signed_in_admin(&store).await;

    let id = admins::create_admin(
        &store,
        CreateAdminRequest {
            name: "Kofi".to_string(),
            email: "kofi@x.com".to_string(),
            role: AdminRole::Editor,
            session_token: Some(token.clone()),
        },
    )
    .await
    .unwrap();
    assert!(!id.is_empty());

    let err = admins::create_admin(
        &store,
        CreateAdminRequest {
            name: "Other Kofi".to_string(),
            email: "kofi@x.com".to_string(),
            role: AdminRole::Viewer,
            session_token: Some(token),
        },
    )
    .await
    .unwrap_err();
    match err {
        AppError::Conflict(msg) => assert_eq!(msg, "User with this email already exists"),
        other => panic!("expected Conflict, got {:?}", other),
    }
}

#[tokio::test]
async fn gated_roster_mutations_append_notifications() {
    let store = MemoryStore::new();
    let token = signed_in_admin(&store).await;

    let id = admins::create_admin(
        &store,
        CreateAdminRequest {
            name: "Kofi".to_string(),
            email: "kofi@x.com".to_string(),
            role: AdminRole::Editor,
            session_token: Some(token.clone()),
        },
    )
    .await
    .unwrap();

    admins::update_admin(
        &store,
        &id,
        UpdateAdminRequest {
            name: "Kofi Mensah".to_string(),
            email: "kofi@x.com".to_string(),
            role: AdminRole::ContentManager,
            status: AdminStatus::Active,
            session_token: Some(token.clone()),
        },
    )
    .await
    .unwrap();

    admins::delete_admin(&store, &id, Some(&token)).await.unwrap();
    assert!(store.find_admin_by_id(&id).await.unwrap().is_none());

    let events = store.list_notifications_for_user("u1").await.unwrap();
    let kinds: Vec<&str> = events.iter().map(|e| e.kind.as_str()).collect();
    assert_eq!(events.len(), 3);
    assert!(kinds.contains(&"success"));
    assert!(kinds.contains(&"info"));
    assert!(kinds.contains(&"warning"));
}

#[tokio::test]
async fn updating_a_missing_admin_is_not_found() {
    let store = MemoryStore::new();
    let token = signed_in_admin(&store).await;

    let err = admins::update_admin(
        &store,
        "no-such-id",
        UpdateAdminRequest {
            name: "Ghost".to_string(),
            email: "ghost@x.com".to_string(),
            role: AdminRole::Viewer,
            status: AdminStatus::Active,
            session_token: Some(token),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn last_login_is_stamped_for_known_emails_and_ignored_otherwise() {
    let store = MemoryStore::new();
    setup::create_first_admin(&store, bootstrap_request("Ama", "ama@x.com"))
        .await
        .unwrap();

    admins::touch_last_login(&store, "ama@x.com").await.unwrap();
    let admin = store
        .find_admin_by_email("ama@x.com")
        .await
        .unwrap()
        .unwrap();
    assert!(admin.last_login.is_some());

    // Unknown e-mail: silent no-op.
    admins::touch_last_login(&store, "stranger@x.com")
        .await
        .unwrap();
}
