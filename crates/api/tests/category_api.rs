//! HTTP-level integration tests for the category endpoints.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{body_json, get, post_json, seed_user};
use sqlx::PgPool;

use codelog_cache::SnippetStore;

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_starts_empty_and_reflects_creates(pool: PgPool) {
    let snippets = Arc::new(SnippetStore::new());
    let owner = seed_user(&pool, &snippets, "u1").await;

    let app = common::build_test_app(pool.clone(), Arc::clone(&snippets));
    let response = get(app, &format!("/api/v1/users/{owner}/categories")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["data"].as_array().unwrap().is_empty());

    for name in ["infra", "algo"] {
        let app = common::build_test_app(pool.clone(), Arc::clone(&snippets));
        let response = post_json(
            app,
            &format!("/api/v1/users/{owner}/categories"),
            serde_json::json!({ "name": name }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let app = common::build_test_app(pool, Arc::clone(&snippets));
    let response = get(app, &format!("/api/v1/users/{owner}/categories")).await;
    let json = body_json(response).await;
    assert_eq!(json["data"], serde_json::json!(["algo", "infra"]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_category_is_409(pool: PgPool) {
    let snippets = Arc::new(SnippetStore::new());
    let owner = seed_user(&pool, &snippets, "u1").await;

    let app = common::build_test_app(pool.clone(), Arc::clone(&snippets));
    post_json(
        app,
        &format!("/api/v1/users/{owner}/categories"),
        serde_json::json!({ "name": "algo" }),
    )
    .await;

    let app = common::build_test_app(pool, Arc::clone(&snippets));
    let response = post_json(
        app,
        &format!("/api/v1/users/{owner}/categories"),
        serde_json::json!({ "name": "algo" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn category_endpoints_resolve_the_owner(pool: PgPool) {
    let snippets = Arc::new(SnippetStore::new());

    let app = common::build_test_app(pool.clone(), Arc::clone(&snippets));
    let response = get(app, "/api/v1/users/999999/categories").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "OWNER_NOT_FOUND");

    let app = common::build_test_app(pool, Arc::clone(&snippets));
    let response = post_json(
        app,
        "/api/v1/users/999999/categories",
        serde_json::json!({ "name": "algo" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
