//! HTTP client for the catalog GraphQL endpoint.
//!
//! Wraps the single `GetCharacters` operation using [`reqwest`].

use std::time::Duration;

use charsearch_core::error::QueryFailure;
use charsearch_core::reconcile::SearchData;
use charsearch_core::view::SearchVariables;

use crate::graphql::{GraphQlRequest, GraphQlResponse};

/// Public Rick and Morty GraphQL endpoint.
pub const DEFAULT_CATALOG_URL: &str = "https://rickandmortyapi.com/graphql";

/// HTTP client for one catalog endpoint.
#[derive(Debug, Clone)]
pub struct CatalogApi {
    client: reqwest::Client,
    api_url: String,
}

/// Errors from the catalog HTTP layer.
#[derive(Debug, thiserror::Error)]
pub enum CatalogApiError {
    /// The HTTP request failed (network, DNS, TLS, timeout) or the body
    /// could not be decoded.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The catalog returned a non-2xx status code.
    #[error("Catalog API error ({status}): {body}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

impl From<CatalogApiError> for QueryFailure {
    fn from(err: CatalogApiError) -> Self {
        QueryFailure::Transport(err.to_string())
    }
}

impl CatalogApi {
    /// Create a client for the given GraphQL endpoint URL.
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: api_url.into(),
        }
    }

    /// Create a client whose requests give up after `timeout`.
    pub fn with_timeout(
        api_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, CatalogApiError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, api_url))
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, api_url: impl Into<String>) -> Self {
        Self {
            client,
            api_url: api_url.into(),
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Run `GetCharacters` for the given variables.
    ///
    /// Returns the decoded GraphQL envelope; GraphQL-level `errors` are
    /// left for the caller to classify.
    pub async fn get_characters(
        &self,
        variables: &SearchVariables,
    ) -> Result<GraphQlResponse<SearchData>, CatalogApiError> {
        let response = self
            .client
            .post(&self.api_url)
            .json(&GraphQlRequest::characters(variables))
            .send()
            .await?;

        Self::parse_response(response).await
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code, or turn it into a
    /// [`CatalogApiError::ApiError`] carrying the status and body text.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, CatalogApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(CatalogApiError::ApiError {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, CatalogApiError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}
