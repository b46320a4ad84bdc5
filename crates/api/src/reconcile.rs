//! Commit reconciliation: drain staged snippets into durable code records.
//!
//! One pass per commit request. All durable writes for a pass happen inside
//! a single transaction; the staging store is cleared only after that
//! transaction has committed. The clear is a compensating action against a
//! separate, non-transactional system -- a crash between the durable commit
//! and the clear leaves stale staged entries, and a retried commit must
//! absorb them. Code record identity is `(snippet_id, commit_id)`, so
//! reruns are no-ops at the row level.

use std::collections::HashMap;

use serde::Deserialize;
use sqlx::PgPool;

use codelog_cache::SnippetStore;
use codelog_core::error::CoreError;
use codelog_core::snippet::{Snippet, SnippetStatus};
use codelog_core::types::DbId;
use codelog_db::models::category::CodeCategory;
use codelog_db::models::code_record::{CodeRecordView, NewCodeRecord};
use codelog_db::repositories::{CategoryRepo, CodeRecordRepo, UserRepo};

use crate::error::{AppError, AppResult};

/// Last known full payload of a snippet, captured by the client before the
/// deletion mark was applied. Supplied request-scoped with the commit call;
/// required for every snippet whose current status is deleted.
#[derive(Debug, Clone, Deserialize)]
pub struct SnippetSnapshot {
    pub title: String,
    pub content: String,
    pub code: String,
    pub file_path: String,
    pub start_offset: i32,
    pub end_offset: i32,
    pub category: String,
}

/// Content fields flowing into one code record, borrowed from whichever
/// source the status branch selected.
struct RecordPayload<'a> {
    title: &'a str,
    content: &'a str,
    code: &'a str,
    file_path: &'a str,
    start_offset: i32,
    end_offset: i32,
    category: &'a str,
}

impl<'a> RecordPayload<'a> {
    /// Managed branch: the cached snippet is authoritative.
    fn from_snippet(snippet: &'a Snippet) -> Self {
        Self {
            title: &snippet.title,
            content: &snippet.content,
            code: &snippet.code,
            file_path: &snippet.file_path,
            start_offset: snippet.start_offset,
            end_offset: snippet.end_offset,
            category: &snippet.category,
        }
    }

    /// Deleted branch: the cache entry only carries the status mark; the
    /// caller-supplied snapshot is authoritative.
    fn from_snapshot(snapshot: &'a SnippetSnapshot) -> Self {
        Self {
            title: &snapshot.title,
            content: &snapshot.content,
            code: &snapshot.code,
            file_path: &snapshot.file_path,
            start_offset: snapshot.start_offset,
            end_offset: snapshot.end_offset,
            category: &snapshot.category,
        }
    }
}

/// Reconcile all of an owner's staged snippets into code records under the
/// given commit id.
///
/// Returns the persisted record views in drain order. Any failure -- a
/// missing deleted-snapshot entry included -- aborts the whole pass: the
/// transaction rolls back, zero rows persist, and the staging store is left
/// untouched.
pub async fn commit_snippets(
    pool: &PgPool,
    store: &SnippetStore,
    owner_id: DbId,
    commit_id: &str,
    snapshots: &HashMap<String, SnippetSnapshot>,
) -> AppResult<Vec<CodeRecordView>> {
    let owner = UserRepo::find_by_id(pool, owner_id)
        .await?
        .ok_or(CoreError::OwnerNotFound { owner_id })?;

    let staged = store.list_all(owner_id).await;
    if staged.is_empty() {
        tracing::info!(owner_id, commit_id, "No staged snippets to reconcile");
        return Ok(Vec::new());
    }

    let mut tx = pool.begin().await?;

    // Category resolutions are memoized per pass: one name resolves at most
    // once per commit and later snippets reuse the instance.
    let mut resolved: HashMap<String, CodeCategory> = HashMap::new();
    let mut views = Vec::with_capacity(staged.len());

    for snippet in &staged {
        let payload = match snippet.status {
            SnippetStatus::Managed => RecordPayload::from_snippet(snippet),
            SnippetStatus::Deleted => {
                let snapshot = snapshots.get(&snippet.id).ok_or_else(|| {
                    // Data loss, not a soft skip: without the snapshot the
                    // deleted snippet cannot be reconstructed, so the whole
                    // commit aborts.
                    CoreError::SnippetNotFound {
                        snippet_id: snippet.id.clone(),
                    }
                })?;
                RecordPayload::from_snapshot(snapshot)
            }
        };

        let category = match resolved.get(payload.category) {
            Some(category) => category.clone(),
            None => {
                let category =
                    CategoryRepo::find_or_create(&mut tx, owner.id, payload.category).await?;
                resolved.insert(payload.category.to_string(), category.clone());
                category
            }
        };

        let new_record = NewCodeRecord {
            snippet_id: snippet.id.clone(),
            commit_id: commit_id.to_string(),
            category_id: category.id,
            title: payload.title.to_string(),
            content: payload.content.to_string(),
            code: payload.code.to_string(),
            file_path: payload.file_path.to_string(),
            start_offset: payload.start_offset,
            end_offset: payload.end_offset,
            status: snippet.status.as_str().to_string(),
        };

        let record = match CodeRecordRepo::insert(&mut tx, &new_record).await? {
            Some(record) => record,
            // A previous attempt already persisted this row (crash between
            // durable commit and cache clear); reuse it instead of writing
            // a duplicate.
            None => CodeRecordRepo::find_by_key(&mut tx, &snippet.id, commit_id)
                .await?
                .ok_or_else(|| {
                    AppError::InternalError(format!(
                        "code record {}/{commit_id} absent after insert conflict",
                        snippet.id
                    ))
                })?,
        };

        views.push(CodeRecordView::from_record(record, &category.name));
    }

    tx.commit().await?;

    // Compensating action, outside the transaction: the staging store has no
    // two-phase coordination with the database. The durable write above is
    // authoritative either way.
    let cleared = store.clear(owner_id).await;
    tracing::info!(
        owner_id,
        commit_id,
        records = views.len(),
        cleared,
        "Commit reconciled"
    );

    Ok(views)
}
