use std::sync::Arc;

use charsearch_catalog::query::CharacterQuery;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything inside is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Query boundary used by every search view.
    pub query: Arc<dyn CharacterQuery>,
}
