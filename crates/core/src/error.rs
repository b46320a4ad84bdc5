use crate::types::DbId;

/// Domain-level error type shared across the workspace.
///
/// Category uniqueness conflicts are deliberately absent: they are transient,
/// absorbed inside `CategoryRepo::find_or_create`, and never surface here.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The caller-supplied owner id does not resolve to a known user.
    #[error("Owner not found: user id {owner_id}")]
    OwnerNotFound { owner_id: DbId },

    /// An update targeted a snippet id absent from the staging store, or a
    /// deleted snippet had no entry in the caller-supplied snapshot map.
    #[error("Snippet not found: {snippet_id}")]
    SnippetNotFound { snippet_id: String },

    /// A lifecycle status tag outside the closed managed/deleted set.
    #[error("Unknown snippet status tag: {0:?}")]
    InvalidStatus(String),

    /// Field-level validation failure.
    #[error("Validation failed: {0}")]
    Validation(String),
}
