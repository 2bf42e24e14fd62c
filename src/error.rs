use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::db::commit_store::StoreError;
use crate::services::github::errors::GitHubApiError;
use crate::services::oauth::github::errors::GitHubAuthError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    OAuthExchange(#[from] GitHubAuthError),

    #[error(transparent)]
    Provider(#[from] GitHubApiError),

    #[error(transparent)]
    Storage(#[from] StoreError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "request failed");

        // The message goes back to the browser untouched.
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}
