//! Handlers for the standalone category endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use codelog_core::error::CoreError;
use codelog_core::types::DbId;
use codelog_db::models::category::CreateCategory;
use codelog_db::repositories::{CategoryRepo, UserRepo};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /users/{owner_id}/categories
///
/// List the owner's category names. An owner with no categories gets an
/// empty list, not an error.
pub async fn list_categories(
    State(state): State<AppState>,
    Path(owner_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_owner_exists(&state, owner_id).await?;

    let names: Vec<String> = CategoryRepo::list_by_user(&state.pool, owner_id)
        .await?
        .into_iter()
        .map(|c| c.name)
        .collect();
    Ok(Json(DataResponse { data: names }))
}

/// POST /users/{owner_id}/categories
///
/// Create a category for the owner. A duplicate name maps to 409 through
/// the unique constraint classifier.
pub async fn create_category(
    State(state): State<AppState>,
    Path(owner_id): Path<DbId>,
    Json(input): Json<CreateCategory>,
) -> AppResult<impl IntoResponse> {
    ensure_owner_exists(&state, owner_id).await?;

    let category = CategoryRepo::create(&state.pool, owner_id, &input.name).await?;

    tracing::info!(owner_id, category_id = category.id, name = %category.name, "Category created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: category })))
}

/// Resolve the owner id or fail with [`CoreError::OwnerNotFound`].
async fn ensure_owner_exists(state: &AppState, owner_id: DbId) -> AppResult<()> {
    UserRepo::find_by_id(&state.pool, owner_id)
        .await?
        .ok_or(CoreError::OwnerNotFound { owner_id })?;
    Ok(())
}
