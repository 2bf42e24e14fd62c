pub mod client;
pub mod errors;
#[cfg(test)]
pub mod mock_github_api;
pub mod models;
pub mod service;

/// Only commits at or after this instant count toward a user's total.
pub const COMMITS_SINCE: &str = "2014-01-01T23:59:59Z";
