//! Repository for the `code_records` table.

use sqlx::PgPool;

use crate::models::code_record::{CodeRecord, CodeRecordView, NewCodeRecord};

/// Column list for `code_records` queries.
const COLUMNS: &str = "snippet_id, commit_id, category_id, title, content, code, \
    file_path, start_offset, end_offset, status, created_at";

/// Column list for the joined view returned to callers.
const VIEW_COLUMNS: &str = "r.snippet_id AS id, r.title, r.file_path, r.start_offset, \
    r.end_offset, r.content, r.code, c.name AS category, r.status, r.commit_id, r.created_at";

/// Provides insert-only persistence and commit-scoped listing for code
/// records. Rows are never updated in place.
pub struct CodeRecordRepo;

impl CodeRecordRepo {
    /// Insert a code record inside the caller's transaction.
    ///
    /// `ON CONFLICT DO NOTHING` on the `(snippet_id, commit_id)` key makes
    /// reconciliation reruns safe: a row persisted by an earlier attempt is
    /// left untouched and `None` is returned.
    pub async fn insert(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        record: &NewCodeRecord,
    ) -> Result<Option<CodeRecord>, sqlx::Error> {
        let query = format!(
            "INSERT INTO code_records
                (snippet_id, commit_id, category_id, title, content, code,
                 file_path, start_offset, end_offset, status)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             ON CONFLICT (snippet_id, commit_id) DO NOTHING
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CodeRecord>(&query)
            .bind(&record.snippet_id)
            .bind(&record.commit_id)
            .bind(record.category_id)
            .bind(&record.title)
            .bind(&record.content)
            .bind(&record.code)
            .bind(&record.file_path)
            .bind(record.start_offset)
            .bind(record.end_offset)
            .bind(&record.status)
            .fetch_optional(&mut **tx)
            .await
    }

    /// Fetch an existing record by its `(snippet_id, commit_id)` identity
    /// inside the caller's transaction. Used by reconciliation reruns to
    /// return the previously persisted row.
    pub async fn find_by_key(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        snippet_id: &str,
        commit_id: &str,
    ) -> Result<Option<CodeRecord>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM code_records WHERE snippet_id = $1 AND commit_id = $2"
        );
        sqlx::query_as::<_, CodeRecord>(&query)
            .bind(snippet_id)
            .bind(commit_id)
            .fetch_optional(&mut **tx)
            .await
    }

    /// All code records for a commit as response views, category name
    /// resolved via join.
    ///
    /// Rows persisted in one reconciliation pass share a transaction
    /// timestamp, so snippet id breaks ties for a deterministic order.
    pub async fn list_by_commit(
        pool: &PgPool,
        commit_id: &str,
    ) -> Result<Vec<CodeRecordView>, sqlx::Error> {
        let query = format!(
            "SELECT {VIEW_COLUMNS}
             FROM code_records r
             JOIN code_categories c ON c.id = r.category_id
             WHERE r.commit_id = $1
             ORDER BY r.created_at, r.snippet_id"
        );
        sqlx::query_as::<_, CodeRecordView>(&query)
            .bind(commit_id)
            .fetch_all(pool)
            .await
    }
}
