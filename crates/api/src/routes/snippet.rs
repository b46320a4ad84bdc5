//! Route definitions for snippet staging.

use axum::routing::{get, patch, post};
use axum::Router;

use crate::handlers::snippet;
use crate::state::AppState;

/// ```text
/// POST  /users/{owner_id}/snippets                       -> stage_snippet
/// GET   /users/{owner_id}/snippets                       -> list_snippets
/// GET   /users/{owner_id}/snippets/{snippet_id}          -> get_snippet
/// PATCH /users/{owner_id}/snippets/{snippet_id}          -> update_snippet
/// PATCH /users/{owner_id}/snippets/{snippet_id}/status   -> mark_snippet_deleted
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/users/{owner_id}/snippets",
            post(snippet::stage_snippet).get(snippet::list_snippets),
        )
        .route(
            "/users/{owner_id}/snippets/{snippet_id}",
            get(snippet::get_snippet).patch(snippet::update_snippet),
        )
        .route(
            "/users/{owner_id}/snippets/{snippet_id}/status",
            patch(snippet::mark_snippet_deleted),
        )
}
