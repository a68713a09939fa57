use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("search query is empty")]
    EmptyQuery,

    #[error("no API key configured for the search service")]
    MissingCredential,

    #[error("search service unreachable: {0}")]
    Unreachable(String),

    #[error("search service returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("malformed search response: {0}")]
    Response(String),

    #[error("minimum match score {0} is outside 50-100")]
    ScoreOutOfRange(u8),

    #[error("HTTP client error: {0}")]
    Client(String),
}
