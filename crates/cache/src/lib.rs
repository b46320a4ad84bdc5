//! In-process staging store for snippets awaiting commit.
//!
//! This is the ephemeral tier: entries live only for the duration of a
//! user's editing session and are removed after a successful commit
//! reconciliation. The store is not transactional and never authoritative
//! for data that also exists durably -- the database is the source of
//! truth once a commit lands.

use std::collections::HashMap;

use tokio::sync::RwLock;

use codelog_core::snippet::{Snippet, SnippetStatus};
use codelog_core::types::DbId;

/// Thread-safe staging store for in-progress snippets, keyed by owner.
///
/// Interior `RwLock`; designed to be wrapped in `Arc` and shared across
/// the application state. Staging scope is per-owner: a commit drains and
/// clears all of an owner's entries regardless of which commit they were
/// staged against.
pub struct SnippetStore {
    entries: RwLock<HashMap<DbId, HashMap<String, Snippet>>>,
}

impl SnippetStore {
    /// Create a new, empty store.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Insert or overwrite a snippet, keyed by its id. Returns the entry
    /// as stored.
    ///
    /// Overwriting keeps the original `created_at` of the existing entry so
    /// repeated staging of the same id reads as an edit, not a new snippet.
    pub async fn save(&self, owner_id: DbId, mut snippet: Snippet) -> Snippet {
        let mut entries = self.entries.write().await;
        let owned = entries.entry(owner_id).or_default();
        if let Some(existing) = owned.get(&snippet.id) {
            snippet.created_at = existing.created_at;
        }
        owned.insert(snippet.id.clone(), snippet.clone());
        snippet
    }

    /// Fetch a snippet by id.
    pub async fn get(&self, owner_id: DbId, snippet_id: &str) -> Option<Snippet> {
        self.entries
            .read()
            .await
            .get(&owner_id)
            .and_then(|owned| owned.get(snippet_id))
            .cloned()
    }

    /// All staged snippets for an owner. Order is not significant.
    pub async fn list_all(&self, owner_id: DbId) -> Vec<Snippet> {
        self.entries
            .read()
            .await
            .get(&owner_id)
            .map(|owned| owned.values().cloned().collect())
            .unwrap_or_default()
    }

    /// Mutate a snippet's code block in place.
    ///
    /// Returns `false` without side effect when the id is not staged.
    pub async fn update(
        &self,
        owner_id: DbId,
        snippet_id: &str,
        start_offset: i32,
        end_offset: i32,
        code: &str,
    ) -> bool {
        let mut entries = self.entries.write().await;
        let Some(snippet) = entries
            .get_mut(&owner_id)
            .and_then(|owned| owned.get_mut(snippet_id))
        else {
            return false;
        };
        snippet.start_offset = start_offset;
        snippet.end_offset = end_offset;
        snippet.code = code.to_string();
        snippet.updated_at = chrono::Utc::now();
        true
    }

    /// Flip a snippet's status to deleted, leaving all content fields
    /// untouched so the entry can still render a placeholder.
    ///
    /// The authoritative deleted payload comes from the caller-supplied
    /// snapshot map at commit time, not from this entry.
    ///
    /// Returns `false` without side effect when the id is not staged.
    pub async fn mark_deleted(&self, owner_id: DbId, snippet_id: &str) -> bool {
        let mut entries = self.entries.write().await;
        let Some(snippet) = entries
            .get_mut(&owner_id)
            .and_then(|owned| owned.get_mut(snippet_id))
        else {
            return false;
        };
        snippet.status = SnippetStatus::Deleted;
        snippet.updated_at = chrono::Utc::now();
        true
    }

    /// Remove all staged entries for an owner, returning how many were
    /// dropped. Called after the durable transaction has committed.
    pub async fn clear(&self, owner_id: DbId) -> usize {
        self.entries
            .write()
            .await
            .remove(&owner_id)
            .map(|owned| owned.len())
            .unwrap_or(0)
    }
}

impl Default for SnippetStore {
    fn default() -> Self {
        Self::new()
    }
}
