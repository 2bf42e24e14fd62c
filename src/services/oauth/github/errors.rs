// services/oauth/github/errors.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GitHubAuthError {
    #[error("Missing authorization code")]
    MissingCode,
    #[error("Invalid callback parameters: {0}")]
    InvalidCallback(String),
    #[error("GitHub token exchange failed: {0}")]
    TokenExchangeFailed(#[from] reqwest::Error),
    #[error("GitHub rejected the authorization code: {error}: {description}")]
    Rejected { error: String, description: String },
    #[error("Invalid GitHub token response: {0}")]
    InvalidTokenJson(String),
}
