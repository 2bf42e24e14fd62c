use async_trait::async_trait;
use std::sync::Mutex;

use crate::services::oauth::github::{
    errors::GitHubAuthError, models::GitHubToken, service::GitHubOAuthService,
};

/// Hands out `token` for every code, or fails the exchange when
/// `fail_exchange` is set.
#[derive(Default)]
pub struct MockGitHubOAuth {
    pub token: GitHubToken,
    pub fail_exchange: bool,
    pub exchanged_codes: Mutex<Vec<String>>,
}

impl MockGitHubOAuth {
    pub fn with_token(access_token: &str) -> Self {
        Self {
            token: GitHubToken {
                access_token: access_token.to_string(),
            },
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail_exchange: true,
            ..Default::default()
        }
    }
}

#[async_trait]
impl GitHubOAuthService for MockGitHubOAuth {
    fn authorize_url(&self, state: &str) -> String {
        format!(
            "https://github.com/login/oauth/authorize?client_id=test-client&redirect_uri=http%3A%2F%2Flocalhost%2Fcallback&scope=repo%3Astatus&state={}",
            state
        )
    }

    async fn exchange_code_for_token(&self, code: &str) -> Result<GitHubToken, GitHubAuthError> {
        self.exchanged_codes.lock().unwrap().push(code.to_string());
        if self.fail_exchange {
            return Err(GitHubAuthError::Rejected {
                error: "network_error".into(),
                description: "connection refused".into(),
            });
        }
        Ok(self.token.clone())
    }
}
