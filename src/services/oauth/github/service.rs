// services/oauth/github/service.rs

use super::{errors::GitHubAuthError, models::GitHubToken};
use async_trait::async_trait;

#[async_trait]
pub trait GitHubOAuthService: Send + Sync {
    /// Authorization page URL carrying the given opaque `state`.
    fn authorize_url(&self, state: &str) -> String;
    async fn exchange_code_for_token(&self, code: &str) -> Result<GitHubToken, GitHubAuthError>;
}
