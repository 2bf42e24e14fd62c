use async_trait::async_trait;
use reqwest::StatusCode;

use crate::services::github::{
    errors::GitHubApiError, models::RepositoryCommits, service::GitHubApi,
};
use crate::services::oauth::github::models::GitHubToken;

#[derive(Default)]
pub struct MockGitHubApi {
    pub login: String,
    pub repositories: Vec<RepositoryCommits>,
    pub fail_user_lookup: bool,
    pub fail_commit_listing: bool,
}

impl MockGitHubApi {
    pub fn new(login: &str, counts: &[Option<u64>]) -> Self {
        Self {
            login: login.to_string(),
            repositories: counts
                .iter()
                .enumerate()
                .map(|(i, count)| RepositoryCommits {
                    name: format!("repo-{i}"),
                    commit_count: *count,
                })
                .collect(),
            ..Default::default()
        }
    }
}

#[async_trait]
impl GitHubApi for MockGitHubApi {
    async fn authenticated_login(&self, _token: &GitHubToken) -> Result<String, GitHubApiError> {
        if self.fail_user_lookup {
            return Err(GitHubApiError::UnexpectedStatus {
                status: StatusCode::UNAUTHORIZED,
                message: "Bad credentials".into(),
            });
        }
        Ok(self.login.clone())
    }

    async fn repository_commit_counts(
        &self,
        _token: &GitHubToken,
        _login: &str,
        _since: &str,
    ) -> Result<Vec<RepositoryCommits>, GitHubApiError> {
        if self.fail_commit_listing {
            return Err(GitHubApiError::InvalidResponse("truncated body".into()));
        }
        Ok(self.repositories.clone())
    }
}
