//! Snippet model and lifecycle status.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::Timestamp;

/// Lifecycle status of a staged snippet.
///
/// A closed two-variant set. Status tags arriving over the wire or from
/// storage parse case-insensitively; anything outside the set is rejected
/// with [`CoreError::InvalidStatus`] instead of falling through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum SnippetStatus {
    /// Still live; content is drawn directly from the staging store.
    Managed,
    /// Marked removed; authoritative content must come from the
    /// caller-supplied snapshot map at commit time.
    Deleted,
}

impl SnippetStatus {
    /// The lowercase tag stored in `code_records.status`.
    pub fn as_str(self) -> &'static str {
        match self {
            SnippetStatus::Managed => "managed",
            SnippetStatus::Deleted => "deleted",
        }
    }
}

impl fmt::Display for SnippetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SnippetStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("managed") {
            Ok(SnippetStatus::Managed)
        } else if s.eq_ignore_ascii_case("deleted") {
            Ok(SnippetStatus::Deleted)
        } else {
            Err(CoreError::InvalidStatus(s.to_string()))
        }
    }
}

impl TryFrom<String> for SnippetStatus {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// An ephemeral code annotation staged in the in-process store.
///
/// The owner id is not a field; the staging store keys entries by owner,
/// and every operation takes the owner explicitly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snippet {
    /// Opaque id, stable across edits. Caller-supplied or generated at
    /// staging time.
    pub id: String,
    pub title: String,
    pub content: String,
    pub code: String,
    pub file_path: String,
    pub start_offset: i32,
    pub end_offset: i32,
    /// Name of the category this snippet will be filed under at commit time.
    pub category: String,
    pub status: SnippetStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Validate a snippet's code-block offsets.
///
/// Offsets are zero-based and inclusive; `start` must not exceed `end`.
pub fn validate_offsets(start: i32, end: i32) -> Result<(), CoreError> {
    if start < 0 {
        return Err(CoreError::Validation(format!(
            "start_offset must be non-negative, got {start}"
        )));
    }
    if start > end {
        return Err(CoreError::Validation(format!(
            "start_offset {start} exceeds end_offset {end}"
        )));
    }
    Ok(())
}
