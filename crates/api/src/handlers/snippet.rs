//! Handlers for snippet staging and in-place mutation.
//!
//! These endpoints touch only the ephemeral tier; nothing here writes to
//! the database. Durable persistence happens at commit time (see
//! `handlers::commit`).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use codelog_core::error::CoreError;
use codelog_core::snippet::{validate_offsets, Snippet, SnippetStatus};
use codelog_core::types::DbId;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for staging a snippet.
#[derive(Debug, Deserialize)]
pub struct StageSnippet {
    /// Optional caller-supplied id; generated when absent. Re-staging an
    /// existing id overwrites that entry.
    pub id: Option<String>,
    pub title: String,
    pub content: String,
    pub code: String,
    pub file_path: String,
    pub start_offset: i32,
    pub end_offset: i32,
    pub category: String,
}

/// Request body for mutating a staged snippet's code block.
#[derive(Debug, Deserialize)]
pub struct UpdateSnippetBlock {
    pub start_offset: i32,
    pub end_offset: i32,
    pub code: String,
}

/// Acknowledgement for update and status-update requests.
#[derive(Debug, Serialize)]
pub struct SnippetUpdateResponse {
    pub snippet_id: String,
    pub message: &'static str,
}

/// POST /users/{owner_id}/snippets
///
/// Stage a snippet in the ephemeral store. New snippets always start
/// managed; deletion is a separate status transition.
pub async fn stage_snippet(
    State(state): State<AppState>,
    Path(owner_id): Path<DbId>,
    Json(input): Json<StageSnippet>,
) -> AppResult<impl IntoResponse> {
    validate_offsets(input.start_offset, input.end_offset)?;

    let id = input
        .id
        .unwrap_or_else(|| uuid::Uuid::now_v7().to_string());
    let now = chrono::Utc::now();
    let snippet = Snippet {
        id: id.clone(),
        title: input.title,
        content: input.content,
        code: input.code,
        file_path: input.file_path,
        start_offset: input.start_offset,
        end_offset: input.end_offset,
        category: input.category,
        status: SnippetStatus::Managed,
        created_at: now,
        updated_at: now,
    };

    let stored = state.snippets.save(owner_id, snippet).await;

    tracing::info!(owner_id, snippet_id = %id, "Snippet staged");

    Ok((StatusCode::CREATED, Json(DataResponse { data: stored })))
}

/// GET /users/{owner_id}/snippets
///
/// List all staged snippets for an owner.
pub async fn list_snippets(
    State(state): State<AppState>,
    Path(owner_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let snippets = state.snippets.list_all(owner_id).await;
    Ok(Json(DataResponse { data: snippets }))
}

/// GET /users/{owner_id}/snippets/{snippet_id}
///
/// Fetch a single staged snippet.
pub async fn get_snippet(
    State(state): State<AppState>,
    Path((owner_id, snippet_id)): Path<(DbId, String)>,
) -> AppResult<impl IntoResponse> {
    let snippet = state
        .snippets
        .get(owner_id, &snippet_id)
        .await
        .ok_or(CoreError::SnippetNotFound { snippet_id })?;
    Ok(Json(DataResponse { data: snippet }))
}

/// PATCH /users/{owner_id}/snippets/{snippet_id}
///
/// Update a staged snippet's code block (offsets and code text). Fails
/// with 404 and no side effect when the id is not staged.
pub async fn update_snippet(
    State(state): State<AppState>,
    Path((owner_id, snippet_id)): Path<(DbId, String)>,
    Json(input): Json<UpdateSnippetBlock>,
) -> AppResult<impl IntoResponse> {
    validate_offsets(input.start_offset, input.end_offset)?;

    let updated = state
        .snippets
        .update(
            owner_id,
            &snippet_id,
            input.start_offset,
            input.end_offset,
            &input.code,
        )
        .await;
    if !updated {
        return Err(CoreError::SnippetNotFound { snippet_id }.into());
    }

    tracing::info!(owner_id, snippet_id = %snippet_id, "Snippet code block updated");

    Ok(Json(DataResponse {
        data: SnippetUpdateResponse {
            snippet_id,
            message: "Snippet updated",
        },
    }))
}

/// PATCH /users/{owner_id}/snippets/{snippet_id}/status
///
/// Mark a staged snippet deleted. Content fields stay in place; only the
/// status tag changes. The authoritative deleted payload is supplied by
/// the client at commit time.
pub async fn mark_snippet_deleted(
    State(state): State<AppState>,
    Path((owner_id, snippet_id)): Path<(DbId, String)>,
) -> AppResult<impl IntoResponse> {
    let updated = state.snippets.mark_deleted(owner_id, &snippet_id).await;
    if !updated {
        return Err(CoreError::SnippetNotFound { snippet_id }.into());
    }

    tracing::info!(owner_id, snippet_id = %snippet_id, "Snippet marked deleted");

    Ok(Json(DataResponse {
        data: SnippetUpdateResponse {
            snippet_id,
            message: "Snippet marked deleted",
        },
    }))
}
