//! Route definitions.
//!
//! `health` mounts at the root; everything else is assembled under
//! `/api/v1` by [`api_routes`].

pub mod category;
pub mod commit;
pub mod health;
pub mod snippet;
pub mod user;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /users                                          create user
/// /users/{owner_id}/snippets                      stage, list
/// /users/{owner_id}/snippets/{snippet_id}         get, update code block
/// /users/{owner_id}/snippets/{snippet_id}/status  mark deleted
/// /users/{owner_id}/commits/{commit_id}/codes     reconcile staged snippets
/// /users/{owner_id}/categories                    list, create
/// /commits/{commit_id}/codes                      list records for a commit
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(user::router())
        .merge(snippet::router())
        .merge(commit::router())
        .merge(category::router())
}
