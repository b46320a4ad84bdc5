//! Code category model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use codelog_core::types::{DbId, Timestamp};

/// A row from the `code_categories` table.
///
/// `(user_id, name)` is unique; resolving the same pair twice always yields
/// the same row.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CodeCategory {
    pub id: DbId,
    pub user_id: DbId,
    pub name: String,
    pub created_at: Timestamp,
}

/// DTO for creating a category through the standalone endpoint.
#[derive(Debug, Deserialize)]
pub struct CreateCategory {
    pub name: String,
}
