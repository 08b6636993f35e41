use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE};
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use celltrack_api::auth::discord::DiscordConfig;
use celltrack_api::auth::session::{issue_session, EditorPolicy, SessionConfig, DEFAULT_COOKIE_NAME};
use celltrack_api::config::ServerConfig;
use celltrack_api::router::build_app_router;
use celltrack_api::state::AppState;
use celltrack_core::staff::{Staff, StaffDirectory};
use celltrack_store::MemoryStore;

/// Discord id granted editor access in the test config.
pub const EDITOR_ID: &str = "42";

/// Build a test `ServerConfig` with safe defaults and a fixed session secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        store_url: "memory".to_string(),
        base_url: "http://localhost:3000".to_string(),
        staff_path: "data/staff.json".to_string(),
        ocr_api_key: None,
        session: SessionConfig {
            secret: "integration-test-secret-0123456789abcdef".to_string(),
            cookie_name: DEFAULT_COOKIE_NAME.to_string(),
            expiry_days: 7,
        },
        editors: EditorPolicy::from_lists(EDITOR_ID, ""),
        discord: DiscordConfig::default(),
    }
}

/// Small fixed roster used across the integration tests.
pub fn test_roster() -> StaffDirectory {
    StaffDirectory::new(vec![
        Staff {
            id: 1,
            name: "Alora Vaughn".into(),
            role: "Chief of Public Defense".into(),
        },
        Staff {
            id: 2,
            name: "Lucy Greene".into(),
            role: "Deputy Chief of Public Defense".into(),
        },
        Staff {
            id: 3,
            name: "Remy Vaughn".into(),
            role: "Lead Public Defender".into(),
        },
        Staff {
            id: 5,
            name: "Gabriel Specter".into(),
            role: "Senior Public Defender".into(),
        },
    ])
}

/// Build the full application router over an in-memory store.
///
/// This goes through `build_app_router` so integration tests exercise the
/// same middleware stack (CORS, request ID, timeout, tracing, panic
/// recovery) that production uses.
pub fn build_test_app() -> Router {
    let config = test_config();
    let store = Arc::new(MemoryStore::new());
    let state = AppState::new(store, test_roster(), config.clone());
    build_app_router(state, &config)
}

/// Session cookie for a user with editor access.
pub fn editor_cookie() -> String {
    let config = test_config();
    let token = issue_session(EDITOR_ID, "alice", true, &config.session)
        .expect("signing should succeed");
    format!("{}={token}", config.session.cookie_name)
}

/// Session cookie for a signed-in user without editor access.
pub fn viewer_cookie() -> String {
    let config = test_config();
    let token = issue_session("7", "bob", false, &config.session)
        .expect("signing should succeed");
    format!("{}={token}", config.session.cookie_name)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get_with_cookie(app: Router, uri: &str, cookie: &str) -> Response {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .header(COOKIE, cookie)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    cookie: Option<&str>,
) -> Response {
    json_request(app, "POST", uri, body, cookie).await
}

pub async fn put_json(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    cookie: Option<&str>,
) -> Response {
    json_request(app, "PUT", uri, body, cookie).await
}

pub async fn delete_req(app: Router, uri: &str, cookie: Option<&str>) -> Response {
    let mut builder = Request::builder().method("DELETE").uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    let request = builder.body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

async fn json_request(
    app: Router,
    method: &str,
    uri: &str,
    body: serde_json::Value,
    cookie: Option<&str>,
) -> Response {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json");
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    let request = builder.body(Body::from(body.to_string())).unwrap();
    app.oneshot(request).await.unwrap()
}

/// Consume a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap_or_else(|err| {
        panic!("response body was not JSON ({err}): {:?}", String::from_utf8_lossy(&bytes))
    })
}
