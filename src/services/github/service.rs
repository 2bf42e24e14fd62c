// services/github/service.rs

use super::{errors::GitHubApiError, models::RepositoryCommits};
use crate::services::oauth::github::models::GitHubToken;
use async_trait::async_trait;

#[async_trait]
pub trait GitHubApi: Send + Sync {
    /// Login of the user the token belongs to.
    async fn authenticated_login(&self, token: &GitHubToken) -> Result<String, GitHubApiError>;

    /// One entry per repository owned by `login`, counting the commits
    /// `login` authored at or after `since`.
    async fn repository_commit_counts(
        &self,
        token: &GitHubToken,
        login: &str,
        since: &str,
    ) -> Result<Vec<RepositoryCommits>, GitHubApiError>;
}
