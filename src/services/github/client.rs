// services/github/client.rs

use async_trait::async_trait;
use futures::future::try_join_all;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use super::errors::GitHubApiError;
use super::models::{AuthenticatedUser, ErrorBody, RawRepository, RepositoryCommits};
use super::service::GitHubApi;
use crate::services::oauth::github::models::GitHubToken;

const USER_AGENT: &str = "commit-leaderboard";
// Larger histories are not paged through; the first page is the count.
const PER_PAGE: &str = "100";

#[derive(Clone)]
pub struct GitHubApiClient {
    pub client: Client,
    pub base_url: String,
}

impl GitHubApiClient {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn build_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    async fn get(
        &self,
        token: &GitHubToken,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<reqwest::Response, GitHubApiError> {
        let response = self
            .client
            .get(self.build_url(path))
            .query(query)
            .bearer_auth(&token.access_token)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .header(reqwest::header::ACCEPT, "application/vnd.github+json")
            .send()
            .await?;
        Ok(response)
    }

    /// Repository commit count, or `None` for an empty repository.
    async fn count_commits(
        &self,
        token: &GitHubToken,
        repo: RawRepository,
        login: &str,
        since: &str,
    ) -> Result<RepositoryCommits, GitHubApiError> {
        let path = format!("repos/{}/commits", repo.full_name);
        let response = self
            .get(
                token,
                &path,
                &[("author", login), ("since", since), ("per_page", PER_PAGE)],
            )
            .await?;

        // GitHub answers 409 for repositories without any commits.
        if response.status() == StatusCode::CONFLICT {
            tracing::debug!(repo = %repo.full_name, "repository is empty");
            return Ok(RepositoryCommits {
                name: repo.name,
                commit_count: None,
            });
        }

        let commits: Vec<serde_json::Value> = decode(response).await?;
        Ok(RepositoryCommits {
            name: repo.name,
            commit_count: Some(commits.len() as u64),
        })
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, GitHubApiError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|b| b.message)
            .unwrap_or(body);
        return Err(GitHubApiError::UnexpectedStatus { status, message });
    }

    response
        .json::<T>()
        .await
        .map_err(|err| GitHubApiError::InvalidResponse(err.to_string()))
}

#[async_trait]
impl GitHubApi for GitHubApiClient {
    async fn authenticated_login(&self, token: &GitHubToken) -> Result<String, GitHubApiError> {
        let response = self.get(token, "user", &[]).await?;
        let user: AuthenticatedUser = decode(response).await?;
        if user.login.is_empty() {
            return Err(GitHubApiError::InvalidResponse(
                "authenticated user has no login".to_string(),
            ));
        }
        Ok(user.login)
    }

    async fn repository_commit_counts(
        &self,
        token: &GitHubToken,
        login: &str,
        since: &str,
    ) -> Result<Vec<RepositoryCommits>, GitHubApiError> {
        let path = format!("users/{}/repos", urlencoding::encode(login));
        let response = self.get(token, &path, &[("per_page", PER_PAGE)]).await?;
        let repos: Vec<RawRepository> = decode(response).await?;

        tracing::debug!(login, repositories = repos.len(), "counting commits");

        try_join_all(
            repos
                .into_iter()
                .map(|repo| self.count_commits(token, repo, login, since)),
        )
        .await
    }
}
