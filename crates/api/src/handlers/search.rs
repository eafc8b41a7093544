//! Handlers for the character search surface.
//!
//! Every handler drives one [`SearchView`] per request: feed the `q` term,
//! run the issued ticket against the query boundary, settle the view, and
//! render whatever state it reconciles to.

use std::convert::Infallible;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::response::Html;
use axum::Json;
use charsearch_catalog::query::CharacterQuery;
use charsearch_core::presenter::{present, CardView};
use charsearch_core::reconcile::SearchState;
use charsearch_core::view::{QueryTicket, SearchView, ViewModel};
use futures::stream::{self, Stream, StreamExt};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::query::SearchParams;
use crate::render;
use crate::response::DataResponse;
use crate::state::AppState;

/// SSE event name carrying a rendered state fragment.
pub const STATE_EVENT: &str = "state";

// ---------------------------------------------------------------------------
// Shared search execution helper
// ---------------------------------------------------------------------------

/// Run the query for `term` and return the settled view.
async fn run_search(query: &dyn CharacterQuery, term: &str) -> SearchView {
    let mut view = SearchView::new();
    if let Some(ticket) = view.set_term(term) {
        settle(query, &mut view, ticket).await;
    }
    view
}

async fn settle(query: &dyn CharacterQuery, view: &mut SearchView, ticket: QueryTicket) {
    let response = query.search(ticket.variables()).await;
    view.complete(&ticket, response);

    let state = view.state();
    match &state {
        SearchState::Populated(characters) => {
            tracing::debug!(term = %view.term(), results = characters.len(), "Search settled");
        }
        other => {
            tracing::debug!(term = %view.term(), state = other.kind(), "Search settled");
        }
    }
}

// ---------------------------------------------------------------------------
// Pages
// ---------------------------------------------------------------------------

/// GET /
pub async fn home() -> Html<String> {
    Html(render::home_page())
}

/// GET /search?q=
///
/// Full page with the settled state of the search.
pub async fn search_page(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Html<String> {
    let view = run_search(state.query.as_ref(), params.term()).await;
    Html(render::search_page(view.term(), &view.view_model()))
}

/// GET /search/stream?q=
///
/// Server-sent events: the `Loading` fragment first, then the settled one.
pub async fn search_stream(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let mut view = SearchView::new();
    let ticket = view.set_term(params.term());
    let loading = state_event(&view.view_model());

    let query = Arc::clone(&state.query);
    let settled = async move {
        if let Some(ticket) = ticket {
            settle(query.as_ref(), &mut view, ticket).await;
        }
        Ok::<_, Infallible>(state_event(&view.view_model()))
    };

    let events = stream::once(async move { Ok::<_, Infallible>(loading) }).chain(stream::once(settled));
    Sse::new(events).keep_alive(KeepAlive::default())
}

fn state_event(model: &ViewModel) -> Event {
    // SSE cannot carry carriage returns.
    let html = render::render_state(model).replace('\r', "");
    Event::default().event(STATE_EVENT).data(html.trim_end())
}

// ---------------------------------------------------------------------------
// JSON API
// ---------------------------------------------------------------------------

/// JSON form of one character card.
#[derive(Debug, Serialize)]
pub struct CardResponse {
    pub id: String,
    pub name: String,
    pub image_src: String,
    pub image_alt: String,
    pub image_is_placeholder: bool,
    pub species: Option<String>,
    pub status: Option<String>,
    pub status_token: Option<String>,
    pub gender: Option<String>,
}

impl From<CardView> for CardResponse {
    fn from(card: CardView) -> Self {
        let (status, status_token) = match card.status {
            Some(line) => (Some(line.text), Some(line.token)),
            None => (None, None),
        };
        Self {
            id: card.key.to_string(),
            image_src: card.image.src().to_string(),
            image_is_placeholder: card.image.is_placeholder(),
            name: card.display_name,
            image_alt: card.image_alt,
            species: card.species,
            status,
            status_token,
            gender: card.gender,
        }
    }
}

/// Settled search result for the JSON API.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub state: &'static str,
    pub term: String,
    pub cards: Vec<CardResponse>,
}

/// GET /api/v1/characters?q=
///
/// `Empty` and `Populated` return 200; `Error` maps to 502.
pub async fn search_characters(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<DataResponse<SearchResponse>>> {
    let view = run_search(state.query.as_ref(), params.term()).await;

    let cards = match view.state() {
        SearchState::Populated(characters) => characters
            .iter()
            .map(|c| CardResponse::from(present(c)))
            .collect(),
        SearchState::Empty => Vec::new(),
        SearchState::Error(reason) => return Err(AppError::Upstream(reason)),
        SearchState::Loading => {
            return Err(AppError::InternalError(
                "search view did not settle".to_string(),
            ))
        }
    };

    let state_name = if cards.is_empty() { "empty" } else { "populated" };
    Ok(Json(DataResponse {
        data: SearchResponse {
            state: state_name,
            term: view.term().to_string(),
            cards,
        },
    }))
}
