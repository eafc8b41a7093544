//! Character catalog client library.
//!
//! Provides the GraphQL-over-HTTP client for the public character catalog,
//! the response envelope types, and the [`query::CharacterQuery`] boundary
//! the search view consumes.

pub mod api;
pub mod graphql;
pub mod query;
