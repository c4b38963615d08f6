//! Errors returned by [`crate::EmployeeClient`].

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// A required configuration value is missing or empty.
    #[error("{0} not set")]
    Config(&'static str),

    /// The request never completed.
    #[error("request failed: {0}")]
    Transport(String),

    /// The server answered with a non-success status. `body` is kept for logs.
    #[error("server returned status {status}")]
    Status { status: u16, body: String },

    /// The response body was not the JSON we expected.
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Transport(e.to_string())
        }
    }
}
