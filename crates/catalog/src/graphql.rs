//! GraphQL request and response envelopes for the `GetCharacters` operation.

use charsearch_core::error::QueryFailure;
use charsearch_core::reconcile::{QueryResponse, SearchData};
use charsearch_core::view::SearchVariables;
use serde::{Deserialize, Serialize};

/// Operation name sent alongside the query document.
pub const OPERATION_NAME: &str = "GetCharacters";

/// Query document for one page of characters filtered by name.
pub const CHARACTERS_QUERY: &str = r#"query GetCharacters($page: Int!, $search: String!) {
  characters(page: $page, filter: { name: $search }) {
    results {
      id
      name
      image
      species
      status
      gender
    }
  }
}"#;

/// JSON body POSTed to the GraphQL endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQlRequest<'a> {
    pub operation_name: &'static str,
    pub query: &'static str,
    pub variables: &'a SearchVariables,
}

impl<'a> GraphQlRequest<'a> {
    pub fn characters(variables: &'a SearchVariables) -> Self {
        Self {
            operation_name: OPERATION_NAME,
            query: CHARACTERS_QUERY,
            variables,
        }
    }
}

/// One entry of a GraphQL `errors` array. Only the message is kept.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

/// Standard GraphQL response envelope.
///
/// Either member may be missing or null.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<GraphQlError>>,
}

impl GraphQlResponse<SearchData> {
    /// Classify the envelope for the reconciler.
    ///
    /// A non-empty `errors` array is a server failure even when `data` is
    /// also present. Otherwise `data` is passed through as-is; a missing
    /// payload is left for the reconciler's missing-data rule.
    pub fn into_query_response(self) -> QueryResponse {
        match self.errors {
            Some(errors) if !errors.is_empty() => Err(QueryFailure::Server(
                errors.into_iter().map(|e| e.message).collect(),
            )),
            _ => Ok(self.data),
        }
    }
}

/// Parse a raw response body into a query response.
pub fn parse_response(body: &str) -> Result<QueryResponse, serde_json::Error> {
    let envelope: GraphQlResponse<SearchData> = serde_json::from_str(body)?;
    Ok(envelope.into_query_response())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use charsearch_core::reconcile::{reconcile, ErrorReason, QuerySnapshot, SearchState};

    use super::*;

    #[test]
    fn request_serializes_operation_and_variables() {
        let variables = SearchVariables::new("rick");
        let json = serde_json::to_value(GraphQlRequest::characters(&variables)).unwrap();

        assert_eq!(json["operationName"], "GetCharacters");
        assert_eq!(json["variables"]["search"], "rick");
        assert_eq!(json["variables"]["page"], 1);
        assert!(json["query"].as_str().unwrap().contains("filter: { name: $search }"));
    }

    #[test]
    fn query_selects_every_character_field() {
        for field in ["id", "name", "image", "species", "status", "gender"] {
            assert!(CHARACTERS_QUERY.contains(field), "missing field {field}");
        }
    }

    #[test]
    fn data_payload_passes_through() {
        let body = r#"{"data":{"characters":{"results":[{"id":"1","name":"Rick Sanchez"},null]}}}"#;
        let response = parse_response(body).unwrap();
        let data = response.unwrap().expect("payload present");
        let results = data.characters.unwrap().results.unwrap();
        assert_eq!(results.len(), 2);
        assert!(results[1].is_none());
    }

    #[test]
    fn errors_array_is_server_failure() {
        let body = r#"{"errors":[{"message":"GraphQL Error: Failed to fetch characters"}]}"#;
        let response = parse_response(body).unwrap();
        assert_matches!(
            response,
            Err(QueryFailure::Server(messages)) if messages == vec!["GraphQL Error: Failed to fetch characters".to_string()]
        );
    }

    #[test]
    fn errors_win_over_partial_data() {
        let body = r#"{"data":{"characters":null},"errors":[{"message":"boom"},{"message":"bang"}]}"#;
        let response = parse_response(body).unwrap();
        assert_eq!(
            response,
            Err(QueryFailure::Server(vec!["boom".into(), "bang".into()]))
        );
    }

    #[test]
    fn empty_errors_array_is_not_a_failure() {
        let body = r#"{"data":{"characters":{"results":[]}},"errors":[]}"#;
        let response = parse_response(body).unwrap();
        assert_matches!(response, Ok(Some(_)));
    }

    #[test]
    fn missing_and_null_data_reconcile_to_missing_data() {
        for body in ["{}", r#"{"data":null}"#] {
            let response = parse_response(body).unwrap();
            assert_eq!(response, Ok(None));
            assert_eq!(
                reconcile(&QuerySnapshot::settled(response)),
                SearchState::Error(ErrorReason::MissingData)
            );
        }
    }

    #[test]
    fn malformed_body_is_a_decode_error() {
        assert!(parse_response("<html>502</html>").is_err());
    }
}
