//! Gitea API error types.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// An argument failed validation before any request was sent.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The server answered with a status outside [200, 300).
    #[error("unexpected response code received from server: {status}")]
    Http { status: u16, body: String },

    /// The request could not be sent or the response body not read.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The response body was not the expected JSON shape.
    #[error("failed to parse response body: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ApiError>;
