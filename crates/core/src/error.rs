/// Why a character query failed to produce a payload.
///
/// Both variants collapse into the same `Error` view state; the detail is
/// kept for logging and for the JSON API.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryFailure {
    /// Network failure, non-2xx status, or an undecodable response body.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The GraphQL server answered with an `errors` array.
    #[error("Server error: {}", .0.join("; "))]
    Server(Vec<String>),
}
