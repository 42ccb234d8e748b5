//! Axum router construction.

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;
use crate::{api, dashboard, views};

/// Build the complete router.
///
/// JSON API:
/// - `GET /api/users`, `GET /api/users/{id|name}`
/// - `GET /api/users/{id|name}/tweets`
/// - `GET /api/tweets`, `GET /api/tweets/{id}`, `GET /api/tweets/{id}/user`
///
/// HTML pages mirror the API without the `/api` prefix. The dashboard is
/// mounted at [`dashboard::BASE_PATH`], and `GET /go-to-dashboard` returns
/// its layout document.
///
/// A `{key}` segment is classified as an id or a name inside the handler
/// before any lookup runs.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // JSON API
        .route("/api/users", get(api::list_users))
        .route("/api/users/{key}", get(api::get_user))
        .route("/api/users/{key}/tweets", get(api::get_user_tweets))
        .route("/api/tweets", get(api::list_tweets))
        .route("/api/tweets/{key}", get(api::get_tweet))
        .route("/api/tweets/{key}/user", get(api::get_tweet_user))
        // HTML pages
        .route("/users", get(views::users_index))
        .route("/users/{key}", get(views::user_show))
        .route("/users/{key}/tweets", get(views::user_tweets))
        .route("/tweets", get(views::tweets_index))
        .route("/tweets/{key}", get(views::tweet_show))
        .route("/tweets/{key}/user", get(views::tweet_user))
        // Dashboard
        .route("/go-to-dashboard", get(dashboard::serve_layout))
        .route("/dashboard", get(dashboard::index))
        .route(dashboard::BASE_PATH, get(dashboard::index))
        .route("/dashboard/_dash-layout", get(dashboard::serve_layout))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
