//! The mutation gateway over the real HTTP surface: fail-closed behavior,
//! the full bootstrap -> sign-in -> gated-create flow, and expiry.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use chrono::Duration;
use serde_json::{json, Value};
use tower::ServiceExt;

use genv_backend::config::Config;
use genv_backend::handlers::api_router;
use genv_backend::repositories::MemoryStore;
use genv_backend::services::sessions;
use genv_backend::state::AppState;

fn test_config() -> Config {
    Config {
        database_url: String::new(),
        bind_addr: "127.0.0.1:0".to_string(),
        session_ttl_hours: 24,
        cors_allow_origins: vec!["*".to_string()],
    }
}

fn test_app() -> (Arc<MemoryStore>, Router) {
    let store = Arc::new(MemoryStore::new());
    let app = api_router(AppState::new(Arc::clone(&store), test_config()));
    (store, app)
}

fn post(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}

fn model_payload(session_token: Option<&str>) -> Value {
    let mut payload = json!({
        "name": "Osei",
        "age": 54,
        "tagline": "Timeless presence",
        "main_image": "osei-main.jpg",
        "category_images": {
            "casual": "osei-casual.jpg",
            "formal": "osei-formal.jpg",
            "sports": "osei-sports.jpg",
            "evening": "osei-evening.jpg",
            "commercial": "osei-commercial.jpg"
        },
        "bio": "Thirty years in front of the camera.",
        "highlights": {
            "age_range": "50-60",
            "skin_tone": "deep",
            "style_vibe": "classic",
            "height": "185cm",
            "build": "athletic",
            "ethnicity": "ghanaian",
            "features": "salt-and-pepper beard"
        }
    });
    if let Some(token) = session_token {
        payload["session_token"] = json!(token);
    }
    payload
}

async fn sign_in(app: &Router) -> String {
    let response = app
        .clone()
        .oneshot(post(
            "/api/setup/first-admin",
            json!({"name": "Ama", "email": "ama@x.com"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(post(
            "/api/sessions",
            json!({"user_id": "u1", "email": "ama@x.com"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    body["session_token"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn mutations_without_a_token_fail_closed_and_write_nothing() {
    let (_store, app) = test_app();

    let response = app
        .clone()
        .oneshot(post("/api/models", model_payload(None)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Session token required");

    // No model was written and no notification appended.
    let response = app.clone().oneshot(get("/api/models")).await.unwrap();
    let body = body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 0);

    let response = app
        .clone()
        .oneshot(get("/api/notifications?user_id=u1"))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn forged_tokens_get_the_opaque_rejection() {
    let (_store, app) = test_app();

    let response = app
        .clone()
        .oneshot(post("/api/models", model_payload(Some("forged-token"))))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Invalid or expired admin session");
}

#[tokio::test]
async fn gated_create_returns_an_id_and_appends_one_success_notification() {
    let (_store, app) = test_app();
    let token = sign_in(&app).await;

    let response = app
        .clone()
        .oneshot(post("/api/models", model_payload(Some(&token))))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let model_id = body["id"].as_str().unwrap();
    assert!(!model_id.is_empty());

    let response = app
        .clone()
        .oneshot(get("/api/notifications?user_id=u1"))
        .await
        .unwrap();
    let events = body_json(response).await;
    let events = events.as_array().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["kind"], "success");
    assert!(events[0]["message"].as_str().unwrap().contains("Osei"));
    assert_eq!(events[0]["read"], false);

    // The catalogue now serves the profile publicly.
    let response = app
        .clone()
        .oneshot(get(&format!("/api/models/{model_id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let profile = body_json(response).await;
    assert_eq!(profile["name"], "Osei");
    assert_eq!(profile["status"], "active");
    assert_eq!(profile["view_count"], 0);
}

#[tokio::test]
async fn expired_sessions_fail_validation_and_gated_mutations() {
    let (store, app) = test_app();

    // Roster entry via the API, then seed an already-expired session
    // directly through the service layer (simulating 25 elapsed hours).
    let response = app
        .clone()
        .oneshot(post(
            "/api/setup/first-admin",
            json!({"name": "Ama", "email": "ama@x.com"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let created = sessions::create_session(store.as_ref(), Duration::hours(-1), "u1", "ama@x.com")
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(post(
            "/api/sessions/validate",
            json!({"session_token": created.session_token}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["is_valid"], false);
    assert_eq!(body["reason"], "session_expired");

    let response = app
        .clone()
        .oneshot(post(
            "/api/models",
            model_payload(Some(&created.session_token)),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Invalid or expired admin session");
}

#[tokio::test]
async fn second_bootstrap_over_http_conflicts() {
    let (_store, app) = test_app();

    let response = app
        .clone()
        .oneshot(post(
            "/api/setup/first-admin",
            json!({"name": "Ama", "email": "ama@x.com"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);

    let response = app.clone().oneshot(get("/api/setup/has-admins")).await.unwrap();
    let body = body_json(response).await;
    assert_eq!(body["has_admins"], true);

    let response = app
        .clone()
        .oneshot(post(
            "/api/setup/first-admin",
            json!({"name": "Kofi", "email": "kofi@x.com"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = body_json(response).await;
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("Admin users already exist"));
}

#[tokio::test]
async fn logout_then_mutation_is_rejected() {
    let (_store, app) = test_app();
    let token = sign_in(&app).await;

    let response = app
        .clone()
        .oneshot(post(
            "/api/sessions/invalidate",
            json!({"session_token": token}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(post("/api/models", model_payload(Some(&token))))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
