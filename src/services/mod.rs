pub mod commit_aggregator;
pub mod github;
pub mod leaderboard;
pub mod oauth;
