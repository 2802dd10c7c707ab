#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use findit_core::roles::ROLE_ADMIN;
use findit_core::types::DbId;
use findit_db::repositories::ProfileRepo;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use findit_api::auth::jwt::JwtConfig;
use findit_api::config::ServerConfig;
use findit_api::router::build_app_router;
use findit_api::state::AppState;

/// Password used by every account created through [`signup`].
pub const TEST_PASSWORD: &str = "test_password_123!";

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout. Claim decisions are not terminal.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        claim_terminal_states: false,
        admin_emails: vec!["boss@test.com".to_string()],
        jwt: JwtConfig {
            secret: "integration-test-secret-long-enough".to_string(),
            access_token_expiry_mins: 15,
            refresh_token_expiry_days: 7,
        },
    }
}

/// Build the full application router over `pool` with [`test_config`].
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with(pool, test_config())
}

/// Build the full application router with a custom configuration.
pub fn build_test_app_with(pool: PgPool, config: ServerConfig) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

fn request(method: Method, uri: &str, token: Option<&str>, body: Option<serde_json::Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, request(Method::GET, uri, None, None)).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, request(Method::GET, uri, Some(token), None)).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, request(Method::POST, uri, None, Some(body))).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, request(Method::POST, uri, Some(token), Some(body))).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, request(Method::PUT, uri, Some(token), Some(body))).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, request(Method::DELETE, uri, Some(token), None)).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Account helpers
// ---------------------------------------------------------------------------

/// A signed-in test account.
pub struct TestUser {
    pub id: DbId,
    pub token: String,
}

/// Sign up through the API and return the profile id and access token.
pub async fn signup(app: &Router, name: &str, email: &str) -> TestUser {
    let body = serde_json::json!({ "name": name, "email": email, "password": TEST_PASSWORD });
    let response = post_json(app.clone(), "/api/v1/auth/signup", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    TestUser {
        id: json["profile"]["id"].as_i64().unwrap(),
        token: json["access_token"].as_str().unwrap().to_string(),
    }
}

/// Sign up and promote the new profile to `admin` directly in the database.
pub async fn signup_admin(app: &Router, pool: &PgPool, name: &str, email: &str) -> TestUser {
    let user = signup(app, name, email).await;
    ProfileRepo::update_role(pool, user.id, ROLE_ADMIN)
        .await
        .unwrap()
        .unwrap();
    user
}

/// Report an item through the API and return its id.
pub async fn report_item(
    app: &Router,
    token: &str,
    kind: &str,
    name: &str,
    description: &str,
    location: &str,
) -> DbId {
    let body = serde_json::json!({
        "name": name,
        "description": description,
        "category": "General",
        "location": location,
        (format!("date_{kind}")): "2025-06-01",
    });
    let response = post_json_auth(app.clone(), &format!("/api/v1/items/{kind}"), body, token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

/// File a claim through the API and return its id.
pub async fn file_claim(app: &Router, token: &str, kind: &str, item_id: DbId, message: &str) -> DbId {
    let body = serde_json::json!({ "item_kind": kind, "item_id": item_id, "message": message });
    let response = post_json_auth(app.clone(), "/api/v1/claims", body, token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}
