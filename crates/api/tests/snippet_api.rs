//! HTTP-level integration tests for the snippet staging endpoints.
//!
//! Staging touches only the in-process store; the database pool is wired in
//! because the router requires it, but none of these requests write rows.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{body_json, get, patch_json, post_json};
use sqlx::PgPool;

use codelog_cache::SnippetStore;

fn stage_body(id: &str, category: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "title": format!("title-{id}"),
        "content": "why this snippet matters",
        "code": "let x = 1;",
        "file_path": "src/lib.rs",
        "start_offset": 2,
        "end_offset": 7,
        "category": category,
    })
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn stage_and_get_snippet(pool: PgPool) {
    let snippets = Arc::new(SnippetStore::new());

    let app = common::build_test_app(pool.clone(), Arc::clone(&snippets));
    let response = post_json(app, "/api/v1/users/1/snippets", stage_body("a", "algo")).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["id"], "a");
    assert_eq!(json["data"]["status"], "managed");

    let app = common::build_test_app(pool, Arc::clone(&snippets));
    let response = get(app, "/api/v1/users/1/snippets/a").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["title"], "title-a");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn stage_generates_id_when_absent(pool: PgPool) {
    let snippets = Arc::new(SnippetStore::new());

    let mut body = stage_body("ignored", "algo");
    body.as_object_mut().unwrap().remove("id");

    let app = common::build_test_app(pool, Arc::clone(&snippets));
    let response = post_json(app, "/api/v1/users/1/snippets", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(!json["data"]["id"].as_str().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn stage_rejects_inverted_offsets(pool: PgPool) {
    let snippets = Arc::new(SnippetStore::new());

    let mut body = stage_body("a", "algo");
    body["start_offset"] = serde_json::json!(9);
    body["end_offset"] = serde_json::json!(3);

    let app = common::build_test_app(pool, Arc::clone(&snippets));
    let response = post_json(app, "/api/v1/users/1/snippets", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(snippets.get(1, "a").await.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_is_scoped_by_owner(pool: PgPool) {
    let snippets = Arc::new(SnippetStore::new());

    let app = common::build_test_app(pool.clone(), Arc::clone(&snippets));
    post_json(app, "/api/v1/users/1/snippets", stage_body("a", "algo")).await;
    let app = common::build_test_app(pool.clone(), Arc::clone(&snippets));
    post_json(app, "/api/v1/users/2/snippets", stage_body("b", "infra")).await;

    let app = common::build_test_app(pool, Arc::clone(&snippets));
    let response = get(app, "/api/v1/users/1/snippets").await;
    let json = body_json(response).await;
    let listed = json["data"].as_array().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["id"], "a");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_mutates_code_block(pool: PgPool) {
    let snippets = Arc::new(SnippetStore::new());

    let app = common::build_test_app(pool.clone(), Arc::clone(&snippets));
    post_json(app, "/api/v1/users/1/snippets", stage_body("a", "algo")).await;

    let app = common::build_test_app(pool, Arc::clone(&snippets));
    let response = patch_json(
        app,
        "/api/v1/users/1/snippets/a",
        serde_json::json!({ "start_offset": 10, "end_offset": 20, "code": "let y = 2;" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["snippet_id"], "a");

    let stored = snippets.get(1, "a").await.unwrap();
    assert_eq!(stored.start_offset, 10);
    assert_eq!(stored.end_offset, 20);
    assert_eq!(stored.code, "let y = 2;");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_missing_snippet_is_404_without_side_effect(pool: PgPool) {
    let snippets = Arc::new(SnippetStore::new());

    let app = common::build_test_app(pool, Arc::clone(&snippets));
    let response = patch_json(
        app,
        "/api/v1/users/1/snippets/ghost",
        serde_json::json!({ "start_offset": 0, "end_offset": 1, "code": "x" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "SNIPPET_NOT_FOUND");
    assert!(snippets.list_all(1).await.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn status_update_marks_deleted_and_keeps_content(pool: PgPool) {
    let snippets = Arc::new(SnippetStore::new());

    let app = common::build_test_app(pool.clone(), Arc::clone(&snippets));
    post_json(app, "/api/v1/users/1/snippets", stage_body("a", "algo")).await;

    let app = common::build_test_app(pool.clone(), Arc::clone(&snippets));
    let response = patch_json(
        app,
        "/api/v1/users/1/snippets/a/status",
        serde_json::json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let stored = snippets.get(1, "a").await.unwrap();
    assert_eq!(stored.status.as_str(), "deleted");
    assert_eq!(stored.code, "let x = 1;");

    let app = common::build_test_app(pool, Arc::clone(&snippets));
    let response = patch_json(
        app,
        "/api/v1/users/1/snippets/ghost/status",
        serde_json::json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
