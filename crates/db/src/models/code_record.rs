//! Code record model and DTOs.

use serde::Serialize;
use sqlx::FromRow;

use codelog_core::types::{DbId, Timestamp};

/// A row from the `code_records` table.
///
/// Immutable once written; every commit produces a new generation of rows
/// and no update path exists. Identity is `(snippet_id, commit_id)`.
#[derive(Debug, Clone, FromRow)]
pub struct CodeRecord {
    pub snippet_id: String,
    pub commit_id: String,
    pub category_id: DbId,
    pub title: String,
    pub content: String,
    pub code: String,
    pub file_path: String,
    pub start_offset: i32,
    pub end_offset: i32,
    /// Lowercase lifecycle tag, constrained to `managed`/`deleted` by the
    /// schema.
    pub status: String,
    pub created_at: Timestamp,
}

/// Insert DTO for a code record. Built by the commit reconciler from either
/// the cached snippet (managed branch) or the caller-supplied snapshot
/// (deleted branch).
#[derive(Debug, Clone)]
pub struct NewCodeRecord {
    pub snippet_id: String,
    pub commit_id: String,
    pub category_id: DbId,
    pub title: String,
    pub content: String,
    pub code: String,
    pub file_path: String,
    pub start_offset: i32,
    pub end_offset: i32,
    pub status: String,
}

/// Outward-facing view of a code record, with the category resolved to its
/// name. Field mapping from [`CodeRecord`] is a pure transform.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CodeRecordView {
    /// The originating snippet id.
    pub id: String,
    pub title: String,
    pub file_path: String,
    pub start_offset: i32,
    pub end_offset: i32,
    pub content: String,
    pub code: String,
    pub category: String,
    pub status: String,
    pub commit_id: String,
    pub created_at: Timestamp,
}

impl CodeRecordView {
    /// Build a view from a persisted record and its resolved category name.
    pub fn from_record(record: CodeRecord, category: &str) -> Self {
        Self {
            id: record.snippet_id,
            title: record.title,
            file_path: record.file_path,
            start_offset: record.start_offset,
            end_offset: record.end_offset,
            content: record.content,
            code: record.code,
            category: category.to_string(),
            status: record.status,
            commit_id: record.commit_id,
            created_at: record.created_at,
        }
    }
}
