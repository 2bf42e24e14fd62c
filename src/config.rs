use std::env;

use anyhow::{anyhow, Context};

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_REDIS_URL: &str = "redis://127.0.0.1:6379";
const DEFAULT_ASSETS_DIR: &str = "assets";
const DEFAULT_AUTHORIZE_URL: &str = "https://github.com/login/oauth/authorize";
const DEFAULT_TOKEN_URL: &str = "https://github.com/login/oauth/access_token";
const DEFAULT_API_URL: &str = "https://api.github.com";

#[derive(Debug, Clone)]
pub struct GitHubOAuthConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub authorize_url: String,
    pub token_url: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub redis_url: String,
    pub assets_dir: String,
    pub github_api_url: String,
    pub oauth: GitHubOAuthConfig,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok(); // Load .env file

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Blank values, common in `.env` templates, count as unset.
        let present = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let required = |key: &str| -> anyhow::Result<String> {
            present(key).ok_or_else(|| anyhow!("{key} must be set"))
        };
        let optional = |key: &str, default: &str| -> String {
            present(key).unwrap_or_else(|| {
                tracing::info!("{key} not set, using default: {default}");
                default.to_string()
            })
        };

        let port = match present("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("invalid PORT value: {raw}"))?,
            None => DEFAULT_PORT,
        };

        // Heroku's Redis To Go add-on exports its own variable name.
        let redis_url = present("REDIS_URL")
            .or_else(|| present("REDISTOGO_URL"))
            .unwrap_or_else(|| DEFAULT_REDIS_URL.to_string());

        Ok(Config {
            port,
            redis_url,
            assets_dir: optional("ASSETS_DIR", DEFAULT_ASSETS_DIR),
            github_api_url: optional("GITHUB_API_URL", DEFAULT_API_URL),
            oauth: GitHubOAuthConfig {
                client_id: required("CLIENT_ID")?,
                client_secret: required("CLIENT_SECRET")?,
                redirect_uri: required("REDIRECT_URI")?,
                authorize_url: optional("GITHUB_AUTHORIZE_URL", DEFAULT_AUTHORIZE_URL),
                token_url: optional("GITHUB_TOKEN_URL", DEFAULT_TOKEN_URL),
            },
        })
    }
}
