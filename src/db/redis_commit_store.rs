use async_trait::async_trait;
use redis::{aio::ConnectionManager, AsyncCommands, Client};
use tracing::info;

use super::commit_store::{CommitStore, StoreError};

#[derive(Clone)]
pub struct RedisCommitStore {
    pub connection: ConnectionManager,
}

impl RedisCommitStore {
    /// Opens a managed connection; the manager reconnects on its own after
    /// the server drops it.
    pub async fn connect(redis_url: &str) -> Result<Self, StoreError> {
        let client = Client::open(redis_url)?;
        let connection = client.get_connection_manager().await?;

        info!("✅ Successfully connected to Redis");
        Ok(Self { connection })
    }
}

/// Values written by other clients may not be UTF-8; those decode lossily
/// and then fail the numeric parse like any other garbage.
fn decode_value(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes).unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned())
}

#[async_trait]
impl CommitStore for RedisCommitStore {
    async fn set_commit_count(&self, login: &str, commit_count: u64) -> Result<(), StoreError> {
        let mut conn = self.connection.clone();
        conn.set::<_, _, ()>(login, commit_count).await?;
        Ok(())
    }

    async fn get_raw_count(&self, login: &str) -> Result<Option<String>, StoreError> {
        let mut conn = self.connection.clone();
        let value: Option<Vec<u8>> = conn.get(login).await?;
        Ok(value.map(decode_value))
    }

    async fn list_logins(&self) -> Result<Vec<String>, StoreError> {
        let mut conn = self.connection.clone();
        let keys: Vec<String> = conn.keys("*").await?;
        Ok(keys)
    }
}
