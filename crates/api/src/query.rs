//! Query-string parameter types shared by the search handlers.

use serde::Deserialize;

/// `?q=<term>` as read from the page URL.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

impl SearchParams {
    /// The search term; a missing `q` is the empty string.
    pub fn term(&self) -> &str {
        self.q.as_deref().unwrap_or_default()
    }
}
