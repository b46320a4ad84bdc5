//! Route definitions for commit reconciliation.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::commit;
use crate::state::AppState;

/// ```text
/// POST /users/{owner_id}/commits/{commit_id}/codes -> commit_snippets
/// GET  /commits/{commit_id}/codes                  -> list_commit_codes
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/users/{owner_id}/commits/{commit_id}/codes",
            post(commit::commit_snippets),
        )
        .route("/commits/{commit_id}/codes", get(commit::list_commit_codes))
}
