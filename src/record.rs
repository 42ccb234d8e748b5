//! Serializable projections of loaded entities.
//!
//! These records are what both output surfaces consume: the JSON API
//! returns them as-is and the HTML pages take them as their view-model.
//! Building a record never touches the database; it only reshapes rows
//! that were already loaded together.

use serde::Serialize;

use crate::entity::{tweet, user};

/// A user with its tweets nested inside, in insertion order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UserRecord {
    pub id: i32,
    pub username: String,
    pub tweets: Vec<TweetRecord>,
}

/// A tweet with the owning user's id and username flattened in.
///
/// The owner is referenced by name only, so a nested tweet never carries
/// its parent user again.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TweetRecord {
    pub id: i32,
    pub text: String,
    pub user_id: i32,
    /// Username of the owner.
    pub user: String,
}

impl UserRecord {
    /// Builds a record from a user row and the tweet rows it owns.
    ///
    /// Tweets are ordered by id so the nested list follows creation order
    /// regardless of how the rows came back from the store.
    pub fn new(owner: user::Model, mut tweets: Vec<tweet::Model>) -> Self {
        tweets.sort_by_key(|t| t.id);
        let tweets = tweets
            .into_iter()
            .map(|t| TweetRecord::new(t, &owner))
            .collect();

        Self {
            id: owner.id,
            username: owner.username,
            tweets,
        }
    }
}

impl TweetRecord {
    /// Builds a record from a tweet row and its owner.
    ///
    /// `user_id` is read from the owner rather than the tweet's foreign key
    /// column, so the record always agrees with the user it names.
    pub fn new(tweet: tweet::Model, owner: &user::Model) -> Self {
        Self {
            id: tweet.id,
            text: tweet.text,
            user_id: owner.id,
            user: owner.username.clone(),
        }
    }
}
