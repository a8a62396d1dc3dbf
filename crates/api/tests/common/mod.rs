//! Shared helpers for the HTTP integration tests.
//!
//! Builds the full application router over the in-memory store via the
//! same [`build_app_router`] the binary uses, so tests exercise CORS,
//! request IDs, timeouts, tracing, and panic recovery alongside the
//! handlers.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE};
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use gradeboard_api::auth::cookie::{CookieConfig, SameSite};
use gradeboard_api::auth::jwt::{generate_token, JwtConfig};
use gradeboard_api::config::{MissingUpdatePolicy, ServerConfig};
use gradeboard_api::router::build_app_router;
use gradeboard_api::state::AppState;
use gradeboard_store::MemoryStore;

/// Build a test `ServerConfig` with safe defaults and a known secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        mongodb_uri: "mongodb://localhost:27017".to_string(),
        mongodb_db: "gradeboard-test".to_string(),
        cookie: CookieConfig {
            secure: false,
            same_site: SameSite::Lax,
        },
        update_missing: MissingUpdatePolicy::NotFound,
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            token_expiry_mins: 60,
        },
    }
}

/// Build the application router over a fresh in-memory store.
pub fn build_test_app() -> Router {
    build_test_app_with_policy(MissingUpdatePolicy::NotFound)
}

/// Build the application router with an explicit missing-update policy.
pub fn build_test_app_with_policy(policy: MissingUpdatePolicy) -> Router {
    let mut config = test_config();
    config.update_missing = policy;

    let store = Arc::new(MemoryStore::new());
    let state = AppState {
        projects: store.clone(),
        submissions: store,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Cookie header value carrying a freshly signed token for `user_id`.
pub fn auth_cookie(user_id: &str) -> String {
    let token = generate_token(
        user_id,
        Some(&format!("{user_id}@test.com")),
        &test_config().jwt,
    )
    .expect("token generation should succeed");
    format!("token={token}")
}

/// Drive one request through the router.
pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    cookie: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, cookie: &str) -> Response {
    send(app, Method::GET, uri, Some(cookie), None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    cookie: &str,
    body: serde_json::Value,
) -> Response {
    send(app, Method::POST, uri, Some(cookie), Some(body)).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    cookie: &str,
    body: serde_json::Value,
) -> Response {
    send(app, Method::PUT, uri, Some(cookie), Some(body)).await
}

pub async fn delete_auth(app: Router, uri: &str, cookie: &str) -> Response {
    send(app, Method::DELETE, uri, Some(cookie), None).await
}

/// Collect the response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Collect the response body as text.
pub async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
