// services/github/errors.rs
use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GitHubApiError {
    #[error("failed to perform GitHub request: {0}")]
    Http(#[from] reqwest::Error),
    #[error("GitHub responded with status {status}: {message}")]
    UnexpectedStatus { status: StatusCode, message: String },
    #[error("GitHub returned an invalid response: {0}")]
    InvalidResponse(String),
}
