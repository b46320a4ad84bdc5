//! Health endpoint integration test.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{body_json, get};
use sqlx::PgPool;

use codelog_cache::SnippetStore;

#[sqlx::test(migrations = "../../db/migrations")]
async fn health_reports_ok_with_reachable_database(pool: PgPool) {
    let app = common::build_test_app(pool, Arc::new(SnippetStore::new()));
    let response = get(app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["db_healthy"], true);
    assert!(json["version"].is_string());
}
