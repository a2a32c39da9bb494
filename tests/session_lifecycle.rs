//! Session issue, supersede, expiry, logout, and sweep behavior against the
//! in-memory store.

use chrono::Duration;
use genv_backend::models::admin_user::{AdminUser, BootstrapAdminRequest};
use genv_backend::models::session::{RejectionReason, SessionValidation};
use genv_backend::repositories::{AdminRepository, MemoryStore, SessionRepository};
use genv_backend::services::{sessions, setup};

async fn seed_admin(store: &MemoryStore, name: &str, email: &str) {
    setup::create_first_admin(
        store,
        BootstrapAdminRequest {
            name: name.to_string(),
            email: email.to_string(),
        },
    )
    .await
    .expect("bootstrap admin");
}

#[tokio::test]
async fn sequential_issues_leave_exactly_one_active_session() {
    let store = MemoryStore::new();
    seed_admin(&store, "Ama", "ama@x.com").await;

    for _ in 0..3 {
        sessions::create_session(&store, Duration::hours(24), "u1", "ama@x.com")
            .await
            .expect("create session");
    }

    let all = store.list_sessions_for_user("u1").await.unwrap();
    assert_eq!(all.len(), 3);
    let active: Vec<_> = all.iter().filter(|s| s.is_active).collect();
    assert_eq!(active.len(), 1);
}

#[tokio::test]
async fn reissue_supersedes_the_previous_token() {
    let store = MemoryStore::new();
    seed_admin(&store, "Ama", "ama@x.com").await;

    let first = sessions::create_session(&store, Duration::hours(24), "u1", "ama@x.com")
        .await
        .unwrap();
    let second = sessions::create_session(&store, Duration::hours(24), "u1", "ama@x.com")
        .await
        .unwrap();
    assert_ne!(first.session_token, second.session_token);

    let validation = sessions::validate_session(&store, &first.session_token)
        .await
        .unwrap();
    assert_eq!(
        validation,
        SessionValidation::Invalid {
            reason: RejectionReason::SessionNotFound
        }
    );

    let validation = sessions::validate_session(&store, &second.session_token)
        .await
        .unwrap();
    assert_eq!(
        validation,
        SessionValidation::Valid {
            user_id: "u1".to_string(),
            email: "ama@x.com".to_string(),
        }
    );
}

#[tokio::test]
async fn expired_sessions_are_rejected_before_any_sweep() {
    let store = MemoryStore::new();
    seed_admin(&store, "Ama", "ama@x.com").await;

    // Issue with a TTL already in the past to simulate elapsed time.
    let created = sessions::create_session(&store, Duration::hours(-1), "u1", "ama@x.com")
        .await
        .unwrap();

    // The stored flag is still true: nothing has swept it.
    let stored = &store.list_sessions_for_user("u1").await.unwrap()[0];
    assert!(stored.is_active);

    let validation = sessions::validate_session(&store, &created.session_token)
        .await
        .unwrap();
    assert_eq!(
        validation,
        SessionValidation::Invalid {
            reason: RejectionReason::SessionExpired
        }
    );

    // And the check itself mutated nothing.
    let stored = &store.list_sessions_for_user("u1").await.unwrap()[0];
    assert!(stored.is_active);
}

#[tokio::test]
async fn invalidation_is_idempotent_and_tolerates_unknown_tokens() {
    let store = MemoryStore::new();
    seed_admin(&store, "Ama", "ama@x.com").await;

    let created = sessions::create_session(&store, Duration::hours(24), "u1", "ama@x.com")
        .await
        .unwrap();

    sessions::invalidate_session(&store, &created.session_token)
        .await
        .expect("first invalidate");
    sessions::invalidate_session(&store, &created.session_token)
        .await
        .expect("second invalidate");
    sessions::invalidate_session(&store, "never-issued")
        .await
        .expect("unknown token invalidate");

    let all = store.list_sessions_for_user("u1").await.unwrap();
    assert_eq!(all.len(), 1);
    assert!(!all[0].is_active);

    let validation = sessions::validate_session(&store, &created.session_token)
        .await
        .unwrap();
    assert_eq!(
        validation,
        SessionValidation::Invalid {
            reason: RejectionReason::SessionNotFound
        }
    );
}

#[tokio::test]
async fn sweep_deactivates_exactly_the_expired_sessions_and_deletes_nothing() {
    let store = MemoryStore::new();
    seed_admin(&store, "Ama", "ama@x.com").await;

    let expired_users = ["e1", "e2"];
    let live_users = ["a1", "a2", "a3"];
    for user in expired_users {
        sessions::create_session(&store, Duration::hours(-2), user, "ama@x.com")
            .await
            .unwrap();
    }
    for user in live_users {
        sessions::create_session(&store, Duration::hours(2), user, "ama@x.com")
            .await
            .unwrap();
    }

    let swept = sessions::cleanup_expired_sessions(&store).await.unwrap();
    assert_eq!(swept, expired_users.len() as u64);

    for user in expired_users {
        let all = store.list_sessions_for_user(user).await.unwrap();
        assert_eq!(all.len(), 1, "sweep must not delete records");
        assert!(!all[0].is_active);
    }
    for user in live_users {
        let all = store.list_sessions_for_user(user).await.unwrap();
        assert_eq!(all.len(), 1);
        assert!(all[0].is_active, "unexpired sessions must be untouched");
    }

    // A second sweep still reports the expired records it touched; the
    // operation is safe to repeat.
    let swept_again = sessions::cleanup_expired_sessions(&store).await.unwrap();
    assert_eq!(swept_again, expired_users.len() as u64);
}

#[tokio::test]
async fn demotion_takes_effect_on_the_next_validation() {
    let store = MemoryStore::new();
    seed_admin(&store, "Ama", "ama@x.com").await;

    let created = sessions::create_session(&store, Duration::hours(24), "u1", "ama@x.com")
        .await
        .unwrap();
    assert!(sessions::validate_session(&store, &created.session_token)
        .await
        .unwrap()
        .is_valid());

    // Deactivate the roster entry directly; the session record is untouched.
    let admin = store.find_admin_by_email("ama@x.com").await.unwrap().unwrap();
    let changes = genv_backend::models::admin_user::AdminChanges {
        name: admin.name.clone(),
        email: admin.email.clone(),
        role: admin.role,
        status: genv_backend::models::admin_user::AdminStatus::Inactive,
    };
    store.update_admin(&admin.id, &changes).await.unwrap();

    let validation = sessions::validate_session(&store, &created.session_token)
        .await
        .unwrap();
    assert_eq!(
        validation,
        SessionValidation::Invalid {
            reason: RejectionReason::UserNotAdmin
        }
    );

    let stored = &store.list_sessions_for_user("u1").await.unwrap()[0];
    assert!(stored.is_active, "rejection must not touch the session");
}

#[tokio::test]
async fn deleted_roster_entries_also_invalidate_their_sessions() {
    let store = MemoryStore::new();
    seed_admin(&store, "Ama", "ama@x.com").await;
    let created = sessions::create_session(&store, Duration::hours(24), "u1", "ama@x.com")
        .await
        .unwrap();

    let admin: AdminUser = store.find_admin_by_email("ama@x.com").await.unwrap().unwrap();
    store.delete_admin(&admin.id).await.unwrap();

    let validation = sessions::validate_session(&store, &created.session_token)
        .await
        .unwrap();
    assert_eq!(
        validation,
        SessionValidation::Invalid {
            reason: RejectionReason::UserNotAdmin
        }
    );
}
