use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::{IntoResponse, Response},
};
use tracing::info;

use crate::{
    error::AppError,
    routes::found,
    services::oauth::{
        generate_state,
        github::{errors::GitHubAuthError, models::GitHubCallback},
    },
    state::AppState,
};

/// Redirects to GitHub's OAuth authorization page.
///
/// A fresh `state` value is attached, but nothing remembers it: the callback
/// does not check it.
pub async fn begin_auth(State(state): State<AppState>) -> Response {
    let url = state.github_oauth.authorize_url(&generate_state());
    found(&url)
}

/// Exchanges the code for a token, records the user's commit count and sends
/// the browser back home.
pub async fn oauth_callback(
    State(state): State<AppState>,
    params: Result<Query<GitHubCallback>, QueryRejection>,
) -> Response {
    let result = match params {
        Ok(Query(params)) => complete_callback(&state, params).await,
        Err(rejection) => Err(AppError::from(GitHubAuthError::InvalidCallback(
            rejection.body_text(),
        ))),
    };

    match result {
        Ok(()) => found("/"),
        Err(e) => e.into_response(),
    }
}

async fn complete_callback(state: &AppState, params: GitHubCallback) -> Result<(), AppError> {
    let code = params
        .code
        .filter(|code| !code.is_empty())
        .ok_or(GitHubAuthError::MissingCode)?;

    let token = state.github_oauth.exchange_code_for_token(&code).await?;
    let record = state.aggregator.aggregate(&token).await?;

    info!(login = %record.login, commits = record.commit_count, "leaderboard updated");
    Ok(())
}
