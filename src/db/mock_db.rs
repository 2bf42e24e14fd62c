use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use super::commit_store::{CommitStore, StoreError};

/// In-memory stand-in for Redis. Failures are injected per operation.
#[derive(Default)]
pub struct MockCommitStore {
    pub entries: Mutex<HashMap<String, String>>,
    pub fail_writes: bool,
    pub fail_reads: bool,
    pub fail_keys: bool,
}

impl MockCommitStore {
    pub fn with_entries(pairs: &[(&str, &str)]) -> Self {
        Self {
            entries: Mutex::new(
                pairs
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            ),
            ..Default::default()
        }
    }

    pub fn value(&self, login: &str) -> Option<String> {
        self.entries.lock().unwrap().get(login).cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }
}

fn injected(msg: &'static str) -> StoreError {
    StoreError::Redis(redis::RedisError::from((
        redis::ErrorKind::IoError,
        msg,
    )))
}

#[async_trait]
impl CommitStore for MockCommitStore {
    async fn set_commit_count(&self, login: &str, commit_count: u64) -> Result<(), StoreError> {
        if self.fail_writes {
            return Err(injected("write refused"));
        }
        self.entries
            .lock()
            .unwrap()
            .insert(login.to_string(), commit_count.to_string());
        Ok(())
    }

    async fn get_raw_count(&self, login: &str) -> Result<Option<String>, StoreError> {
        if self.fail_reads {
            return Err(injected("read refused"));
        }
        Ok(self.value(login))
    }

    async fn list_logins(&self) -> Result<Vec<String>, StoreError> {
        if self.fail_keys {
            return Err(injected("connection reset"));
        }
        Ok(self.entries.lock().unwrap().keys().cloned().collect())
    }
}
