//! Repository for the `code_categories` table.

use sqlx::PgPool;

use codelog_core::types::DbId;

use crate::models::category::CodeCategory;

/// Column list for `code_categories` queries.
const COLUMNS: &str = "id, user_id, name, created_at";

/// Provides idempotent resolution and listing of per-user categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// Resolve a category by `(user_id, name)`, creating it if absent.
    ///
    /// Single-statement insert-or-return-winner: on a uniqueness conflict
    /// the `DO UPDATE` makes `RETURNING` yield the existing row, so
    /// concurrent callers racing on the same pair converge on one identity
    /// without a pre-check read. Takes an open transaction because the
    /// commit reconciler resolves categories inside its transaction
    /// boundary.
    pub async fn find_or_create(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        user_id: DbId,
        name: &str,
    ) -> Result<CodeCategory, sqlx::Error> {
        let query = format!(
            "INSERT INTO code_categories (user_id, name)
             VALUES ($1, $2)
             ON CONFLICT (user_id, name) DO UPDATE SET name = EXCLUDED.name
             RETURNING {COLUMNS}"
        );
        let category = sqlx::query_as::<_, CodeCategory>(&query)
            .bind(user_id)
            .bind(name)
            .fetch_one(&mut **tx)
            .await?;
        tracing::debug!(user_id, category_id = category.id, name, "Category resolved");
        Ok(category)
    }

    /// Plain insert for the standalone create endpoint.
    ///
    /// A duplicate `(user_id, name)` surfaces as a unique violation on
    /// `uq_code_categories_user_name` for the caller to map to a conflict
    /// response.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        name: &str,
    ) -> Result<CodeCategory, sqlx::Error> {
        let query = format!(
            "INSERT INTO code_categories (user_id, name)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CodeCategory>(&query)
            .bind(user_id)
            .bind(name)
            .fetch_one(pool)
            .await
    }

    /// Find a category by `(user_id, name)` without creating it.
    pub async fn find_by_user_and_name(
        pool: &PgPool,
        user_id: DbId,
        name: &str,
    ) -> Result<Option<CodeCategory>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM code_categories WHERE user_id = $1 AND name = $2");
        sqlx::query_as::<_, CodeCategory>(&query)
            .bind(user_id)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// List a user's categories ordered by name.
    pub async fn list_by_user(pool: &PgPool, user_id: DbId) -> Result<Vec<CodeCategory>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM code_categories WHERE user_id = $1 ORDER BY name");
        sqlx::query_as::<_, CodeCategory>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }
}
