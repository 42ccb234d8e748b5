//! HTML page tests.

#![allow(clippy::unwrap_used)]

mod common;

use axum::http::StatusCode;

use common::{get_html, seeded_router};

#[tokio::test]
async fn users_page_lists_every_username() {
    let router = seeded_router().await;

    let (status, html) = get_html(&router, "/users").await;

    assert_eq!(status, StatusCode::OK);
    for name in ["Jeff", "Rachel", "Daniel"] {
        let fragment = format!("<h3>Username: {name}</h3>");
        assert_eq!(html.matches(&fragment).count(), 1, "{fragment}");
    }
}

#[tokio::test]
async fn tweets_page_labels_nine_tweets() {
    let router = seeded_router().await;

    let (status, html) = get_html(&router, "/tweets").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(html.matches("<h4>Author: Jeff</h4>").count(), 3);
    assert_eq!(html.matches("<h4>Author: Rachel</h4>").count(), 3);
    assert_eq!(html.matches("<h4>Author: Daniel</h4>").count(), 3);
    assert_eq!(html.matches("Author:").count(), 9);
    assert_eq!(html.matches("Content:").count(), 9);
}

#[tokio::test]
async fn user_page_resolves_by_id_and_by_name() {
    let router = seeded_router().await;

    let (status, by_id) = get_html(&router, "/users/2").await;
    assert_eq!(status, StatusCode::OK);
    assert!(by_id.contains("<h3>Username: Rachel</h3>"));
    assert!(by_id.contains("Running is so fun!"));

    let (status, by_name) = get_html(&router, "/users/rachel").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(by_name, by_id);
}

#[tokio::test]
async fn user_tweets_page_shows_only_that_users_tweets() {
    let router = seeded_router().await;

    for uri in ["/users/1/tweets", "/users/jEFF/tweets"] {
        let (status, html) = get_html(&router, uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(html.matches("<h4>Author: Jeff</h4>").count(), 3, "{uri}");
        assert_eq!(html.matches("Author:").count(), 3, "{uri}");
    }
}

#[tokio::test]
async fn tweet_page_and_tweet_user_page() {
    let router = seeded_router().await;

    let (status, html) = get_html(&router, "/tweets/7").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("<h4>Author: Daniel</h4>"));
    assert!(html.contains("<p>Content: I love hogs</p>"));

    let (status, html) = get_html(&router, "/tweets/7/user").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("<h3>Username: Daniel</h3>"));
}

#[tokio::test]
async fn text_is_escaped() {
    let router = seeded_router().await;

    let (_, html) = get_html(&router, "/tweets/3").await;

    assert!(html.contains("Wishing I was chillin&#x27; in mexico rn"));
    assert!(!html.contains("chillin' in"));
}

#[tokio::test]
async fn missing_rows_render_a_404_page() {
    let router = seeded_router().await;

    for uri in [
        "/users/9999",
        "/users/Nobody",
        "/tweets/9999",
        "/users/9999/tweets",
        "/tweets/9999/user",
    ] {
        let (status, html) = get_html(&router, uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert!(html.contains("<h1>404 Not Found</h1>"), "{uri}");
    }
}
