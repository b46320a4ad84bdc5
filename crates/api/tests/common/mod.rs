//! Shared helpers for HTTP-level integration tests.
//!
//! Requests are sent with `tower::ServiceExt::oneshot` directly against the
//! router, without a TCP listener. The router is built through the same
//! [`build_app_router`] the production binary uses, so tests exercise the
//! full middleware stack.
//!
//! [`build_app_router`]: codelog_api::router::build_app_router

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use codelog_api::config::ServerConfig;
use codelog_api::router::build_app_router;
use codelog_api::state::AppState;
use codelog_cache::SnippetStore;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the application router around the given pool and staging store.
///
/// The store is passed in (rather than created here) so a test can keep a
/// handle on staged state across several one-shot requests.
pub fn build_test_app(pool: PgPool, snippets: Arc<SnippetStore>) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        snippets,
    };
    build_app_router(state, &config)
}

async fn send(app: Router, method: Method, uri: &str, body: Option<serde_json::Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn patch_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::PATCH, uri, Some(body)).await
}

/// Collect a response body into JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create a user through the API and return its id.
pub async fn seed_user(pool: &PgPool, snippets: &Arc<SnippetStore>, username: &str) -> i64 {
    let app = build_test_app(pool.clone(), Arc::clone(snippets));
    let response = post_json(
        app,
        "/api/v1/users",
        serde_json::json!({ "username": username }),
    )
    .await;
    let json = body_json(response).await;
    json["data"]["id"].as_i64().expect("seeded user id")
}
