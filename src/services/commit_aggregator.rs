use std::sync::Arc;

use tracing::info;

use crate::db::commit_store::CommitStore;
use crate::error::AppError;
use crate::models::leaderboard::UserCommitRecord;
use crate::services::github::{service::GitHubApi, COMMITS_SINCE};
use crate::services::oauth::github::models::GitHubToken;

/// Turns an access token into a stored commit total for its owner.
#[derive(Clone)]
pub struct CommitAggregator {
    api: Arc<dyn GitHubApi>,
    store: Arc<dyn CommitStore>,
}

impl CommitAggregator {
    pub fn new(api: Arc<dyn GitHubApi>, store: Arc<dyn CommitStore>) -> Self {
        Self { api, store }
    }

    pub async fn aggregate(&self, token: &GitHubToken) -> Result<UserCommitRecord, AppError> {
        let login = self.api.authenticated_login(token).await?;

        let repositories = self
            .api
            .repository_commit_counts(token, &login, COMMITS_SINCE)
            .await?;

        let commit_count = repositories
            .iter()
            .map(|repo| repo.commit_count.unwrap_or(0))
            .sum::<u64>();

        self.store.set_commit_count(&login, commit_count).await?;

        info!(
            %login,
            repositories = repositories.len(),
            commit_count,
            "stored commit count"
        );

        Ok(UserCommitRecord {
            login,
            commit_count,
        })
    }
}
