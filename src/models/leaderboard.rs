use serde::{Deserialize, Serialize};

/// Aggregate produced for one authenticated user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserCommitRecord {
    pub login: String,
    pub commit_count: u64,
}

/// One row of the `/stats` payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub commits: u64,
}
