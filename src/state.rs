use crate::config::Config;
use crate::db::commit_store::CommitStore;
use crate::services::commit_aggregator::CommitAggregator;
use crate::services::oauth::github::service::GitHubOAuthService;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CommitStore>,
    pub github_oauth: Arc<dyn GitHubOAuthService>,
    pub aggregator: CommitAggregator,
    pub config: Arc<Config>,
}
