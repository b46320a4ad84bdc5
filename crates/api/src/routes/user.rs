//! Route definitions for user creation.

use axum::routing::post;
use axum::Router;

use crate::handlers::user;
use crate::state::AppState;

/// ```text
/// POST /users -> create_user
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/users", post(user::create_user))
}
