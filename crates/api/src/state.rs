use std::sync::Arc;

use codelog_cache::SnippetStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// Cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool (durable tier).
    pub pool: codelog_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// In-process snippet staging store (ephemeral tier).
    pub snippets: Arc<SnippetStore>,
}
