// services/oauth/github/models.rs
use serde::Deserialize;

/// Query string GitHub appends when redirecting back to `/callback`.
#[derive(Debug, Deserialize, Default)]
pub struct GitHubCallback {
    pub code: Option<String>,
    // Accepted but never checked against the value issued by `/auth`.
    pub state: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct GitHubToken {
    pub access_token: String,
}

/// Raw token endpoint reply. GitHub answers `200 OK` with an `error` field
/// when the code is bad or expired.
#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    pub access_token: Option<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}
