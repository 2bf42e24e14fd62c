use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),
}

/// Flat `login -> commit count` mapping. The backing store is assumed to be
/// dedicated to the leaderboard, so every key is a login.
#[async_trait]
pub trait CommitStore: Send + Sync {
    /// Overwrites whatever count was stored for `login`.
    async fn set_commit_count(&self, login: &str, commit_count: u64) -> Result<(), StoreError>;
    /// The stored value as written, or `None` if the key vanished.
    async fn get_raw_count(&self, login: &str) -> Result<Option<String>, StoreError>;
    async fn list_logins(&self) -> Result<Vec<String>, StoreError>;
}
