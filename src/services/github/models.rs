// services/github/models.rs
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct AuthenticatedUser {
    pub login: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawRepository {
    pub name: String,
    pub full_name: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// Commits a user authored in one repository since the cutoff.
/// `commit_count` is `None` when GitHub has no history to count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryCommits {
    pub name: String,
    pub commit_count: Option<u64>,
}
