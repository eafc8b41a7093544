use axum::routing::get;
use axum::Router;

use crate::handlers::search;
use crate::state::AppState;

/// HTML pages, mounted at the root.
///
/// ```text
/// /                      home page with search form
/// /search?q=             search page (settled state)
/// /search/stream?q=      SSE: loading fragment, then settled fragment
/// ```
pub fn pages() -> Router<AppState> {
    Router::new()
        .route("/", get(search::home))
        .route("/search", get(search::search_page))
        .route("/search/stream", get(search::search_stream))
}

/// JSON search routes, nested under `/api/v1`.
///
/// ```text
/// /characters?q=         settled search as JSON
/// ```
pub fn api() -> Router<AppState> {
    Router::new().route("/characters", get(search::search_characters))
}
