use axum::{extract::State, Json};

use crate::{
    error::AppError, models::leaderboard::LeaderboardEntry, services::leaderboard,
    state::AppState,
};

/// The leaderboard as a JSON array of `{name, commits}`.
pub async fn get_stats(
    State(state): State<AppState>,
) -> Result<Json<Vec<LeaderboardEntry>>, AppError> {
    let entries = leaderboard::get_stats(state.store.as_ref()).await?;
    Ok(Json(entries))
}
