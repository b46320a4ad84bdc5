//! Route definitions for categories.

use axum::routing::get;
use axum::Router;

use crate::handlers::category;
use crate::state::AppState;

/// ```text
/// GET  /users/{owner_id}/categories -> list_categories
/// POST /users/{owner_id}/categories -> create_category
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/users/{owner_id}/categories",
        get(category::list_categories).post(category::create_category),
    )
}
