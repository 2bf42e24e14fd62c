use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use commit_leaderboard::{
    config::Config,
    db::{commit_store::CommitStore, redis_commit_store::RedisCommitStore},
    routes,
    services::{
        commit_aggregator::CommitAggregator,
        github::{client::GitHubApiClient, service::GitHubApi},
        oauth::github::client::GitHubOAuthClient,
    },
    AppState,
};
use reqwest::Client;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Arc::new(Config::from_env()?);

    let store = Arc::new(
        RedisCommitStore::connect(&config.redis_url)
            .await
            .context("Failed to connect to Redis")?,
    ) as Arc<dyn CommitStore>;

    let http_client = Client::new();

    let github_oauth = Arc::new(GitHubOAuthClient::new(
        http_client.clone(),
        config.oauth.clone(),
    ));
    let github_api = Arc::new(GitHubApiClient::new(
        http_client.clone(),
        config.github_api_url.clone(),
    )) as Arc<dyn GitHubApi>;

    let state = AppState {
        store: store.clone(),
        github_oauth,
        aggregator: CommitAggregator::new(github_api, store),
        config: config.clone(),
    };

    let app = routes::app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("commit-leaderboard listening at http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
