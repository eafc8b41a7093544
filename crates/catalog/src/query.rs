//! The query boundary consumed by the search view.

use async_trait::async_trait;
use charsearch_core::reconcile::QueryResponse;
use charsearch_core::view::SearchVariables;

use crate::api::CatalogApi;

/// Something that can answer a character search.
///
/// Implementations report every failure through the returned
/// [`QueryResponse`]; they never panic and never retry.
#[async_trait]
pub trait CharacterQuery: Send + Sync {
    async fn search(&self, variables: &SearchVariables) -> QueryResponse;
}

#[async_trait]
impl CharacterQuery for CatalogApi {
    async fn search(&self, variables: &SearchVariables) -> QueryResponse {
        match self.get_characters(variables).await {
            Ok(envelope) => {
                let response = envelope.into_query_response();
                if let Err(failure) = &response {
                    tracing::warn!(search = %variables.search, error = %failure, "Catalog reported errors");
                }
                response
            }
            Err(err) => {
                tracing::warn!(search = %variables.search, error = %err, "Catalog request failed");
                Err(err.into())
            }
        }
    }
}
