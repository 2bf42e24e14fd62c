// services/oauth/github/client.rs

use crate::config::GitHubOAuthConfig;
use crate::services::oauth::github::errors::GitHubAuthError;
use crate::services::oauth::github::models::{GitHubToken, TokenResponse};
use async_trait::async_trait;
use reqwest::Client;

use super::service::GitHubOAuthService;

/// Read access to commit statuses is all the leaderboard asks for.
pub const GITHUB_SCOPE: &str = "repo:status";

#[derive(Clone)]
pub struct GitHubOAuthClient {
    pub client: Client,
    pub config: GitHubOAuthConfig,
}

impl GitHubOAuthClient {
    pub fn new(client: Client, config: GitHubOAuthConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl GitHubOAuthService for GitHubOAuthClient {
    fn authorize_url(&self, state: &str) -> String {
        format!(
            "{}?client_id={}&redirect_uri={}&scope={}&state={}",
            self.config.authorize_url,
            urlencoding::encode(&self.config.client_id),
            urlencoding::encode(&self.config.redirect_uri),
            urlencoding::encode(GITHUB_SCOPE),
            urlencoding::encode(state),
        )
    }

    async fn exchange_code_for_token(&self, code: &str) -> Result<GitHubToken, GitHubAuthError> {
        let res = self
            .client
            .post(&self.config.token_url)
            .header("Accept", "application/json") // Needed to get JSON response instead of URL-encoded
            .form(&[
                ("client_id", self.config.client_id.as_str()),
                ("client_secret", self.config.client_secret.as_str()),
                ("code", code),
                ("redirect_uri", self.config.redirect_uri.as_str()),
            ])
            .send()
            .await?
            .error_for_status()?;

        let body: TokenResponse = res
            .json()
            .await
            .map_err(|e| GitHubAuthError::InvalidTokenJson(e.to_string()))?;

        if let Some(error) = body.error {
            return Err(GitHubAuthError::Rejected {
                description: body.error_description.unwrap_or_else(|| error.clone()),
                error,
            });
        }

        match body.access_token {
            Some(access_token) if !access_token.is_empty() => Ok(GitHubToken { access_token }),
            _ => Err(GitHubAuthError::InvalidTokenJson(
                "missing access_token".to_string(),
            )),
        }
    }
}
