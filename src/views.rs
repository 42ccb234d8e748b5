//! Server-rendered HTML pages.
//!
//! The handlers mirror the JSON API lookups one-for-one and render the
//! resulting records through the named templates in [`Templates`]:
//! `users.html`, `user_show.html`, `tweets.html` and `tweet_show.html`.
//! Lookups that find nothing render `error.html` with a 404.
//!
//! [`Templates`]: crate::templates::Templates

use axum::{
    extract::{Path, State},
    response::Response,
};
use minijinja::context;

use crate::error::{AppError, Result};
use crate::segment::Segment;
use crate::state::AppState;

/// `GET /users`
pub async fn users_index(State(state): State<AppState>) -> Response {
    let page = async {
        let users = state.store.users().await?;
        state.templates.page("users.html", context! { users })
    };
    state.templates.respond(page.await)
}

/// `GET /users/{id}` and `GET /users/{name}`
pub async fn user_show(State(state): State<AppState>, Path(key): Path<String>) -> Response {
    let page = async {
        let lookup = Segment::classify(&key).user_lookup();
        match state.store.user(&lookup).await? {
            Some(user) => state.templates.page("user_show.html", context! { user }),
            None => Err(AppError::NotFound(format!("user {key}"))),
        }
    };
    state.templates.respond(page.await)
}

/// `GET /tweets`
pub async fn tweets_index(State(state): State<AppState>) -> Response {
    let page = async {
        let tweets = state.store.tweets().await?;
        state.templates.page("tweets.html", context! { tweets })
    };
    state.templates.respond(page.await)
}

/// `GET /tweets/{id}`
pub async fn tweet_show(State(state): State<AppState>, Path(key): Path<String>) -> Response {
    let page = async {
        let id = tweet_id(&key)?;
        match state.store.tweet(id).await? {
            Some(tweet) => state.templates.page("tweet_show.html", context! { tweet }),
            None => Err(AppError::NotFound(format!("tweet {id}"))),
        }
    };
    state.templates.respond(page.await)
}

/// `GET /users/{id}/tweets` and `GET /users/{name}/tweets`
pub async fn user_tweets(State(state): State<AppState>, Path(key): Path<String>) -> Response {
    let page = async {
        let lookup = Segment::classify(&key).normalized_user_lookup();
        match state.store.user(&lookup).await? {
            Some(user) => state
                .templates
                .page("tweets.html", context! { tweets => user.tweets }),
            None => Err(AppError::NotFound(format!("user {key}"))),
        }
    };
    state.templates.respond(page.await)
}

/// `GET /tweets/{id}/user`
pub async fn tweet_user(State(state): State<AppState>, Path(key): Path<String>) -> Response {
    let page = async {
        let id = tweet_id(&key)?;
        match state.store.tweet_owner(id).await? {
            Some(user) => state.templates.page("user_show.html", context! { user }),
            None => Err(AppError::NotFound(format!("tweet {id}"))),
        }
    };
    state.templates.respond(page.await)
}

/// Tweets only have an id form; a name segment matches nothing.
fn tweet_id(key: &str) -> Result<i32> {
    match Segment::classify(key) {
        Segment::Id(id) => Ok(id),
        Segment::Name(_) => Err(AppError::NotFound(format!("tweet {key}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{TweetRecord, UserRecord};
    use crate::templates::Templates;

    fn record() -> UserRecord {
        UserRecord {
            id: 1,
            username: "Jeff".into(),
            tweets: vec![TweetRecord {
                id: 3,
                text: "Wishing I was chillin' in mexico rn".into(),
                user_id: 1,
                user: "Jeff".into(),
            }],
        }
    }

    fn render(name: &str, ctx: minijinja::Value) -> String {
        Templates::new().unwrap().render(name, ctx).unwrap()
    }

    #[test]
    fn tweets_page_labels_every_tweet_once() {
        let user = record();
        let html = render("tweets.html", context! { tweets => user.tweets });

        assert_eq!(html.matches("Author:").count(), 1);
        assert_eq!(html.matches("Content:").count(), 1);
        assert!(html.contains("<h4>Author: Jeff</h4>"));
        assert!(!html.contains("chillin'"));
        assert!(html.contains("Wishing I was chillin&"));
    }

    #[test]
    fn user_page_lists_tweets_without_author_labels() {
        let html = render("user_show.html", context! { user => record() });

        assert!(html.contains("<h3>Username: Jeff</h3>"));
        assert!(html.contains(r#"<a href="/tweets/3">"#));
        assert!(!html.contains("Author:"));
    }

    #[test]
    fn users_page_escapes_usernames() {
        let mut user = record();
        user.username = "<script>".into();
        let html = render("users.html", context! { users => vec![user] });

        assert!(html.contains("<h3>Username: &lt;script&gt;</h3>"));
        assert!(!html.contains("<h3>Username: <script>"));
    }

    #[test]
    fn tweet_ids_reject_names() {
        assert_eq!(tweet_id("4").unwrap(), 4);
        assert!(matches!(tweet_id("four"), Err(AppError::NotFound(_))));
    }
}
