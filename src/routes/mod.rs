pub mod auth;
pub mod stats;

use std::path::Path;

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::state::AppState;

/// Full application router: OAuth flow, leaderboard API and static assets.
pub fn app(state: AppState) -> Router {
    let assets = Path::new(&state.config.assets_dir).to_path_buf();

    Router::new()
        .route_service("/", ServeFile::new(assets.join("index.html")))
        .nest_service("/javascript", ServeDir::new(assets.join("javascript")))
        .nest_service("/css", ServeDir::new(assets.join("css")))
        .nest_service("/images", ServeDir::new(assets.join("images")))
        .route("/auth", get(auth::begin_auth))
        .route("/callback", get(auth::oauth_callback))
        .route("/stats", get(stats::get_stats))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// `302 Found`; axum's `Redirect` only offers 303, 307 and 308.
pub(crate) fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
}


#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{body::Body, http::Request};
    use tower::ServiceExt; // for `.oneshot()`

    use super::test_support::test_state;
    use super::*;
    use crate::db::mock_db::MockCommitStore;
    use crate::services::github::mock_github_api::MockGitHubApi;
    use crate::services::oauth::github::mock_github_oauth::MockGitHubOAuth;

    fn test_app() -> Router {
        app(test_state(
            Arc::new(MockGitHubOAuth::with_token("tok")),
            Arc::new(MockGitHubApi::new("alice", &[Some(2)])),
            Arc::new(MockCommitStore::default()),
        ))
    }

    #[tokio::test]
    async fn root_serves_landing_page() {
        let response = test_app()
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .unwrap();
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("href=\"/auth\""));
    }

    #[tokio::test]
    async fn static_assets_are_served() {
        for path in ["/javascript/app.js", "/css/style.css"] {
            let response = test_app()
                .oneshot(Request::get(path).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK, "{path}");
        }
    }

    #[tokio::test]
    async fn unknown_asset_is_not_found() {
        let response = test_app()
            .oneshot(
                Request::get("/javascript/missing.js")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn found_uses_302() {
        let response = found("/");
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(response.headers()[header::LOCATION], "/");
    }
}
