#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{HeaderValue, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use charsearch_api::config::ServerConfig;
use charsearch_api::router::build_app_router;
use charsearch_api::state::AppState;
use charsearch_catalog::query::CharacterQuery;
use charsearch_core::character::Character;
use charsearch_core::error::QueryFailure;
use charsearch_core::reconcile::{QueryResponse, SearchData};
use charsearch_core::view::SearchVariables;

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

fn fixture(id: &str, name: &str, species: &str, status: &str, gender: &str) -> Character {
    Character {
        name: Some(name.to_string()),
        image: Some(format!(
            "https://rickandmortyapi.com/api/character/avatar/{id}.jpeg"
        )),
        species: Some(species.to_string()),
        status: Some(status.to_string()),
        gender: Some(gender.to_string()),
        ..Character::bare(id)
    }
}

pub fn rick() -> Character {
    fixture("1", "Rick Sanchez", "Human", "Alive", "Male")
}

pub fn morty() -> Character {
    fixture("2", "Morty Smith", "Human", "Alive", "Male")
}

pub fn summer_smith() -> Character {
    fixture("3", "Summer Smith", "Human", "Alive", "Female")
}

pub fn bird_person() -> Character {
    fixture("47", "Birdperson", "Alien", "Dead", "Male")
}

pub fn results(characters: Vec<Option<Character>>) -> QueryResponse {
    Ok(Some(SearchData::from_results(characters)))
}

// ---------------------------------------------------------------------------
// Query boundary stubs
// ---------------------------------------------------------------------------

/// Answers every search with the same response and records the variables.
pub struct StubQuery {
    response: QueryResponse,
    seen: Mutex<Vec<SearchVariables>>,
}

impl StubQuery {
    pub fn new(response: QueryResponse) -> Arc<Self> {
        Arc::new(Self {
            response,
            seen: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(failure: QueryFailure) -> Arc<Self> {
        Self::new(Err(failure))
    }

    pub fn seen(&self) -> Vec<SearchVariables> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl CharacterQuery for StubQuery {
    async fn search(&self, variables: &SearchVariables) -> QueryResponse {
        self.seen.lock().unwrap().push(variables.clone());
        self.response.clone()
    }
}

/// Answers by term: "rick" and "morty" match one character each, "smith"
/// matches two, anything else matches nothing.
pub struct CannedCatalog;

#[async_trait]
impl CharacterQuery for CannedCatalog {
    async fn search(&self, variables: &SearchVariables) -> QueryResponse {
        let search = variables.search.to_lowercase();
        if search.contains("rick") {
            results(vec![Some(rick())])
        } else if search.contains("morty") {
            results(vec![Some(morty())])
        } else if search == "smith" {
            results(vec![Some(morty()), Some(summer_smith())])
        } else {
            results(vec![])
        }
    }
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".parse().unwrap(),
        port: 0,
        cors_origins: vec![HeaderValue::from_static("http://localhost:5173")],
        request_timeout_secs: 30,
        catalog_url: "http://127.0.0.1:9/graphql".to_string(),
        catalog_timeout_secs: 5,
    }
}

/// Build the full application router around the given query boundary,
/// with the same middleware stack production uses.
pub fn build_test_app(query: Arc<dyn CharacterQuery>) -> Router {
    let config = test_config();
    let state = AppState {
        config: Arc::new(config.clone()),
        query,
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// HTML assertions
// ---------------------------------------------------------------------------

pub fn count_marker(html: &str, marker: &str) -> usize {
    html.matches(&format!("data-testid=\"{marker}\"")).count()
}

pub fn has_marker(html: &str, marker: &str) -> bool {
    count_marker(html, marker) > 0
}

/// Card headings in document order.
pub fn headings(html: &str) -> Vec<String> {
    html.split("<h3 class=\"name\">")
        .skip(1)
        .filter_map(|rest| rest.split("</h3>").next())
        .map(str::to_string)
        .collect()
}
