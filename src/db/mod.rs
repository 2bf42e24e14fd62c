pub mod commit_store;
#[cfg(test)]
pub mod mock_db;
pub mod redis_commit_store;
