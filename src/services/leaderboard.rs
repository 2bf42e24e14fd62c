use futures::future::join_all;
use tracing::warn;

use crate::db::commit_store::{CommitStore, StoreError};
use crate::models::leaderboard::LeaderboardEntry;

/// Every stored user, most commits first. Equal counts are ordered by name
/// so the response is deterministic.
pub async fn get_stats(store: &dyn CommitStore) -> Result<Vec<LeaderboardEntry>, StoreError> {
    let logins = store.list_logins().await?;

    let fetches = logins.into_iter().map(|login| async move {
        let raw = store.get_raw_count(&login).await?;
        Ok::<_, StoreError>(LeaderboardEntry {
            commits: parse_count(&login, raw.as_deref()),
            name: login,
        })
    });

    let mut entries = join_all(fetches)
        .await
        .into_iter()
        .collect::<Result<Vec<_>, _>>()?;

    entries.sort_by(|a, b| b.commits.cmp(&a.commits).then_with(|| a.name.cmp(&b.name)));
    Ok(entries)
}

/// Missing or non-numeric values count as zero.
fn parse_count(login: &str, raw: Option<&str>) -> u64 {
    match raw {
        Some(value) => value.trim().parse().unwrap_or_else(|_| {
            warn!(%login, value, "stored commit count is not a number");
            0
        }),
        None => {
            warn!(%login, "stored commit count disappeared");
            0
        }
    }
}
