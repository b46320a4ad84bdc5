//! Handlers for commit reconciliation and commit-scoped record listing.

use std::collections::HashMap;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use codelog_core::types::DbId;
use codelog_db::models::code_record::CodeRecordView;
use codelog_db::repositories::CodeRecordRepo;

use crate::error::AppResult;
use crate::reconcile::{self, SnippetSnapshot};
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for the commit call.
#[derive(Debug, Default, Deserialize)]
pub struct CommitSnippetsRequest {
    /// Snippet id -> last known full payload, captured client-side before
    /// each deletion mark. Only consulted for snippets currently marked
    /// deleted.
    #[serde(default)]
    pub snapshots: HashMap<String, SnippetSnapshot>,
}

/// Response for the commit call: the persisted views in drain order plus a
/// confirmation naming the commit.
#[derive(Debug, Serialize)]
pub struct ReconcileResponse {
    pub commit_id: String,
    pub message: String,
    pub code_blocks: Vec<CodeRecordView>,
}

/// Response for the commit-scoped listing.
#[derive(Debug, Serialize)]
pub struct CommitCodesResponse {
    pub commit_id: String,
    pub code_blocks: Vec<CodeRecordView>,
}

/// POST /users/{owner_id}/commits/{commit_id}/codes
///
/// Drain the owner's staged snippets and persist them durably under the
/// given commit id. The commit id is accepted as supplied by the GitHub
/// ingestion side; its existence is not validated here.
pub async fn commit_snippets(
    State(state): State<AppState>,
    Path((owner_id, commit_id)): Path<(DbId, String)>,
    Json(input): Json<CommitSnippetsRequest>,
) -> AppResult<impl IntoResponse> {
    let code_blocks = reconcile::commit_snippets(
        &state.pool,
        &state.snippets,
        owner_id,
        &commit_id,
        &input.snapshots,
    )
    .await?;

    let message = format!(
        "Reconciled {} snippet(s) into commit {commit_id}",
        code_blocks.len()
    );
    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: ReconcileResponse {
                commit_id,
                message,
                code_blocks,
            },
        }),
    ))
}

/// GET /commits/{commit_id}/codes
///
/// All code records persisted for a commit, with category names resolved.
pub async fn list_commit_codes(
    State(state): State<AppState>,
    Path(commit_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let code_blocks = CodeRecordRepo::list_by_commit(&state.pool, &commit_id).await?;
    Ok(Json(DataResponse {
        data: CommitCodesResponse {
            commit_id,
            code_blocks,
        },
    }))
}
