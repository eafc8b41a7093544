//! Search view state machine.
//!
//! A [`SearchView`] owns the latest [`QuerySnapshot`] for one rendered
//! instance. Changing the term (or restarting the query) re-enters
//! `Loading` and issues a new [`QueryTicket`]; only the current ticket can
//! settle the view, so a response that arrives after its term was replaced
//! is ignored.

use serde::Serialize;

use crate::presenter::{present, CardView};
use crate::reconcile::{reconcile, QueryResponse, QuerySnapshot, SearchState};

/// Every query asks for the first page; there is no pagination.
pub const SEARCH_PAGE: i32 = 1;

/// Variables of the `GetCharacters` operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchVariables {
    pub search: String,
    pub page: i32,
}

impl SearchVariables {
    pub fn new(search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            page: SEARCH_PAGE,
        }
    }
}

/// Handle for one issued query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryTicket {
    generation: u64,
    variables: SearchVariables,
}

impl QueryTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn variables(&self) -> &SearchVariables {
        &self.variables
    }
}

#[derive(Debug)]
pub struct SearchView {
    term: Option<String>,
    generation: u64,
    snapshot: QuerySnapshot,
}

impl Default for SearchView {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchView {
    /// A view that has not queried anything yet. It reads as `Loading`.
    pub fn new() -> Self {
        Self {
            term: None,
            generation: 0,
            snapshot: QuerySnapshot::loading(),
        }
    }

    /// The current search term (empty before the first query).
    pub fn term(&self) -> &str {
        self.term.as_deref().unwrap_or_default()
    }

    /// Feed the current external search term.
    ///
    /// Returns a ticket when the term differs from the one already queried
    /// (or nothing was queried yet); the view is then `Loading`. An
    /// unchanged term returns `None` and leaves the state untouched.
    pub fn set_term(&mut self, term: impl Into<String>) -> Option<QueryTicket> {
        let term = term.into();
        if self.term.as_deref() == Some(term.as_str()) {
            return None;
        }
        self.term = Some(term);
        Some(self.restart())
    }

    /// Re-issue the query for the current term.
    pub fn restart(&mut self) -> QueryTicket {
        self.generation += 1;
        self.snapshot = QuerySnapshot::loading();
        QueryTicket {
            generation: self.generation,
            variables: SearchVariables::new(self.term()),
        }
    }

    /// Settle the view with the response for `ticket`.
    ///
    /// Returns `false` (and changes nothing) when the ticket has been
    /// superseded.
    pub fn complete(&mut self, ticket: &QueryTicket, response: QueryResponse) -> bool {
        if ticket.generation != self.generation {
            return false;
        }
        self.snapshot = QuerySnapshot::settled(response);
        true
    }

    pub fn snapshot(&self) -> &QuerySnapshot {
        &self.snapshot
    }

    pub fn state(&self) -> SearchState {
        reconcile(&self.snapshot)
    }

    pub fn view_model(&self) -> ViewModel {
        ViewModel::from(&self.state())
    }
}

/// What the renderer draws: the reconciled state with cards presented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewModel {
    Loading,
    Error,
    Empty,
    Cards(Vec<CardView>),
}

impl From<&SearchState> for ViewModel {
    fn from(state: &SearchState) -> Self {
        match state {
            SearchState::Loading => ViewModel::Loading,
            SearchState::Error(_) => ViewModel::Error,
            SearchState::Empty => ViewModel::Empty,
            SearchState::Populated(characters) => {
                ViewModel::Cards(characters.iter().map(present).collect())
            }
        }
    }
}
