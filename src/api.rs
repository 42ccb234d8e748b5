//! JSON API handlers under `/api`.
//!
//! Each handler runs one store lookup and returns the serialized records.
//! Routes whose last segment may be an id or a name classify it with
//! [`Segment`] and branch to the matching lookup.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Json,
};

use crate::error::{AppError, Result};
use crate::record::{TweetRecord, UserRecord};
use crate::segment::{title_case, Segment};
use crate::state::AppState;
use crate::store::UserLookup;

/// `GET /api/users`
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<UserRecord>>> {
    Ok(Json(state.store.users().await?))
}

/// `GET /api/users/{id}` and `GET /api/users/{name}`
pub async fn get_user(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<UserRecord>> {
    let lookup = Segment::classify(&key).user_lookup();

    state
        .store
        .user(&lookup)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("user {key}")))
}

/// `GET /api/tweets`
pub async fn list_tweets(State(state): State<AppState>) -> Result<Json<Vec<TweetRecord>>> {
    Ok(Json(state.store.tweets().await?))
}

/// `GET /api/tweets/{id}`
pub async fn get_tweet(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<TweetRecord>> {
    let Segment::Id(id) = Segment::classify(&key) else {
        return Err(AppError::NotFound(format!("tweet {key}")));
    };

    state
        .store
        .tweet(id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("tweet {id}")))
}

/// `GET /api/users/{id}/tweets` and `GET /api/users/{name}/tweets`
///
/// The two forms answer differently: by id the whole user record comes
/// back, by name only that user's tweet list. Clients depend on both
/// shapes, so they are kept apart.
pub async fn get_user_tweets(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Response> {
    match Segment::classify(&key) {
        Segment::Id(id) => user_by_id_with_tweets(&state, id).await,
        Segment::Name(name) => tweets_by_username(&state, name).await,
    }
}

async fn user_by_id_with_tweets(state: &AppState, id: i32) -> Result<Response> {
    match state.store.user(&UserLookup::Id(id)).await? {
        Some(user) => Ok(Json(user).into_response()),
        None => Err(AppError::NotFound(format!("user {id}"))),
    }
}

async fn tweets_by_username(state: &AppState, name: String) -> Result<Response> {
    let lookup = UserLookup::Username(title_case(&name));

    match state.store.user(&lookup).await? {
        Some(user) => Ok(Json(user.tweets).into_response()),
        None => Err(AppError::NotFound(format!("user {name}"))),
    }
}

/// `GET /api/tweets/{id}/user`
pub async fn get_tweet_user(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<UserRecord>> {
    let Segment::Id(id) = Segment::classify(&key) else {
        return Err(AppError::NotFound(format!("tweet {key}")));
    };

    state
        .store
        .tweet_owner(id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("tweet {id}")))
}
