use thiserror::Error;

/// Errors returned while talking to the hosted PostgREST backend.
#[derive(Error, Debug)]
pub enum BackendError {
    /// Transport-level failure (connection refused, DNS, CORS, etc).
    #[error(transparent)]
    RequestError(#[from] reqwest::Error),
    /// Backend responded with a non-success status code.
    #[error("Backend request failed with status {status}: {message}")]
    Status { status: u16, message: String },
    /// Response body could not be decoded into the expected shape.
    #[error("Failed to parse backend response: {0}")]
    ParseError(#[from] serde_json::Error),
    /// Backend returned no rows where a representation was requested.
    #[error("Backend returned no rows for {0}")]
    EmptyResponse(String),
}
