//! Result reconciliation: one query snapshot in, one UI state out.
//!
//! All failure classification happens here. Downstream presentation code
//! never re-checks for error conditions.

use serde::{Deserialize, Serialize};

use crate::character::Character;
use crate::error::QueryFailure;

// ---------------------------------------------------------------------------
// Payload
// ---------------------------------------------------------------------------

/// The `data` member of a `GetCharacters` response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchData {
    #[serde(default)]
    pub characters: Option<CharacterPage>,
}

/// One page of the `characters` connection.
///
/// A `None` entry in `results` is a malformed record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterPage {
    #[serde(default)]
    pub results: Option<Vec<Option<Character>>>,
}

impl SearchData {
    /// Wrap a raw result list in the `{ characters: { results } }` envelope.
    pub fn from_results(results: Vec<Option<Character>>) -> Self {
        Self {
            characters: Some(CharacterPage {
                results: Some(results),
            }),
        }
    }
}

/// What the query boundary hands back once a fetch settles.
///
/// `Ok(None)` means the transport succeeded without a data payload.
pub type QueryResponse = Result<Option<SearchData>, QueryFailure>;

// ---------------------------------------------------------------------------
// Snapshot
// ---------------------------------------------------------------------------

/// The three-way outcome of a query at one point in time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuerySnapshot {
    pub loading: bool,
    pub error: Option<QueryFailure>,
    pub data: Option<SearchData>,
}

impl QuerySnapshot {
    /// A fetch is in flight.
    pub fn loading() -> Self {
        Self {
            loading: true,
            error: None,
            data: None,
        }
    }

    /// The fetch has settled with the given response.
    pub fn settled(response: QueryResponse) -> Self {
        match response {
            Ok(data) => Self {
                loading: false,
                error: None,
                data,
            },
            Err(failure) => Self {
                loading: false,
                error: Some(failure),
                data: None,
            },
        }
    }
}

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

/// Why a snapshot reconciled to [`SearchState::Error`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ErrorReason {
    #[error(transparent)]
    Failed(#[from] QueryFailure),

    /// Missing-data rule: a settled query with no payload (or a payload
    /// without a `characters` connection) is an error, not an empty result.
    #[error("Query succeeded without a data payload")]
    MissingData,
}

/// The four mutually exclusive UI states of the search view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchState {
    Loading,
    Error(ErrorReason),
    Empty,
    /// Surviving characters in their original relative order.
    Populated(Vec<Character>),
}

impl SearchState {
    /// Short lowercase name, used in logs and the JSON API.
    pub fn kind(&self) -> &'static str {
        match self {
            SearchState::Loading => "loading",
            SearchState::Error(_) => "error",
            SearchState::Empty => "empty",
            SearchState::Populated(_) => "populated",
        }
    }
}

/// Reconcile a snapshot into exactly one [`SearchState`].
///
/// 1. `loading` wins over everything else.
/// 2. A failure, or a settled query without payload, is `Error`.
/// 3. Null records are dropped, survivors keep their relative order.
/// 4. Nothing left is `Empty`; otherwise `Populated`.
///
/// A null `results` list counts as an empty list.
pub fn reconcile(snapshot: &QuerySnapshot) -> SearchState {
    if snapshot.loading {
        return SearchState::Loading;
    }

    if let Some(failure) = &snapshot.error {
        return SearchState::Error(ErrorReason::Failed(failure.clone()));
    }

    let Some(page) = snapshot
        .data
        .as_ref()
        .and_then(|data| data.characters.as_ref())
    else {
        return SearchState::Error(ErrorReason::MissingData);
    };

    let characters: Vec<Character> = page.results.iter().flatten().flatten().cloned().collect();

    if characters.is_empty() {
        SearchState::Empty
    } else {
        SearchState::Populated(characters)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn named(id: &str, name: &str) -> Character {
        Character {
            name: Some(name.to_string()),
            ..Character::bare(id)
        }
    }

    fn settled(results: Vec<Option<Character>>) -> QuerySnapshot {
        QuerySnapshot::settled(Ok(Some(SearchData::from_results(results))))
    }

    fn names(state: &SearchState) -> Vec<&str> {
        match state {
            SearchState::Populated(characters) => characters
                .iter()
                .filter_map(|c| c.name.as_deref())
                .collect(),
            other => panic!("Expected Populated, got {other:?}"),
        }
    }

    // -- loading -------------------------------------------------------------

    #[test]
    fn loading_wins_regardless_of_error_and_data() {
        let failures = [None, Some(QueryFailure::Transport("down".into()))];
        let payloads = [None, Some(SearchData::from_results(vec![Some(named("1", "Rick"))]))];

        for error in &failures {
            for data in &payloads {
                let snapshot = QuerySnapshot {
                    loading: true,
                    error: error.clone(),
                    data: data.clone(),
                };
                assert_eq!(reconcile(&snapshot), SearchState::Loading);
            }
        }
    }

    // -- error ---------------------------------------------------------------

    #[test]
    fn server_failure_is_error_even_with_data() {
        let snapshot = QuerySnapshot {
            loading: false,
            error: Some(QueryFailure::Server(vec!["GraphQL Error".into()])),
            data: Some(SearchData::from_results(vec![Some(named("1", "Rick"))])),
        };
        assert_matches!(
            reconcile(&snapshot),
            SearchState::Error(ErrorReason::Failed(QueryFailure::Server(_)))
        );
    }

    #[test]
    fn transport_failure_is_error() {
        let snapshot = QuerySnapshot::settled(Err(QueryFailure::Transport("refused".into())));
        assert_matches!(
            reconcile(&snapshot),
            SearchState::Error(ErrorReason::Failed(QueryFailure::Transport(_)))
        );
    }

    #[test]
    fn missing_data_is_error() {
        let snapshot = QuerySnapshot::settled(Ok(None));
        assert_eq!(
            reconcile(&snapshot),
            SearchState::Error(ErrorReason::MissingData)
        );
    }

    #[test]
    fn default_snapshot_is_missing_data() {
        assert_eq!(
            reconcile(&QuerySnapshot::default()),
            SearchState::Error(ErrorReason::MissingData)
        );
    }

    #[test]
    fn null_characters_connection_is_missing_data() {
        let snapshot = QuerySnapshot::settled(Ok(Some(SearchData { characters: None })));
        assert_eq!(
            reconcile(&snapshot),
            SearchState::Error(ErrorReason::MissingData)
        );
    }

    // -- empty ---------------------------------------------------------------

    #[test]
    fn zero_length_results_are_empty() {
        assert_eq!(reconcile(&settled(vec![])), SearchState::Empty);
    }

    #[test]
    fn all_null_results_are_empty_not_error() {
        assert_eq!(reconcile(&settled(vec![None, None])), SearchState::Empty);
        assert_eq!(
            reconcile(&settled(vec![None, None, None])),
            SearchState::Empty
        );
    }

    #[test]
    fn null_results_list_is_empty() {
        let snapshot = QuerySnapshot::settled(Ok(Some(SearchData {
            characters: Some(CharacterPage { results: None }),
        })));
        assert_eq!(reconcile(&snapshot), SearchState::Empty);
    }

    // -- populated -----------------------------------------------------------

    #[test]
    fn nulls_are_dropped_preserving_order() {
        let state = reconcile(&settled(vec![
            None,
            Some(named("1", "A")),
            None,
            Some(named("2", "B")),
        ]));
        assert_eq!(names(&state), vec!["A", "B"]);
    }

    #[test]
    fn trailing_and_interleaved_nulls_are_dropped() {
        let state = reconcile(&settled(vec![
            None,
            Some(named("1", "Rick Sanchez")),
            None,
            None,
            Some(named("2", "Morty Smith")),
            None,
        ]));
        assert_eq!(names(&state), vec!["Rick Sanchez", "Morty Smith"]);
    }

    #[test]
    fn survivors_keep_their_ids() {
        let state = reconcile(&settled(vec![
            Some(named("42", "B")),
            None,
            Some(named("7", "A")),
        ]));
        match state {
            SearchState::Populated(characters) => {
                let ids: Vec<&str> = characters.iter().map(|c| c.id.as_str()).collect();
                assert_eq!(ids, vec!["42", "7"]);
            }
            other => panic!("Expected Populated, got {other:?}"),
        }
    }

    #[test]
    fn decoded_payload_with_nulls_reconciles() {
        let json = r#"{"characters":{"results":[
            {"id":"1","name":"Rick Sanchez","image":null},
            null,
            {"id":"2","name":"Morty Smith"},
            null
        ]}}"#;
        let data: SearchData = serde_json::from_str(json).unwrap();
        let state = reconcile(&QuerySnapshot::settled(Ok(Some(data))));
        assert_eq!(names(&state), vec!["Rick Sanchez", "Morty Smith"]);
    }

    #[test]
    fn state_kind_names() {
        assert_eq!(SearchState::Loading.kind(), "loading");
        assert_eq!(SearchState::Error(ErrorReason::MissingData).kind(), "error");
        assert_eq!(SearchState::Empty.kind(), "empty");
        assert_eq!(SearchState::Populated(vec![]).kind(), "populated");
    }
}
