use sea_orm::sea_query::{Expr, Func, SimpleExpr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectOptions, ConnectionTrait, Database, DatabaseConnection,
    DatabaseTransaction, DbErr, EntityTrait, JoinType, ModelTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, Schema, Set, TransactionTrait,
};

use crate::config::Config;
use crate::entity::{tweet, user};
use crate::error::{AppError, Result, StoreError};
use crate::record::{TweetRecord, UserRecord};

/// Users and their tweets inserted into an empty store, in creation order.
pub const SEED: &[(&str, &[&str])] = &[
    (
        "Jeff",
        &[
            "Data Science is awesome",
            "Python is pretty neat",
            "Wishing I was chillin' in mexico rn",
        ],
    ),
    (
        "Rachel",
        &[
            "RPDR is the best show",
            "I just made the coolest NPM package!",
            "Running is so fun!",
        ],
    ),
    (
        "Daniel",
        &[
            "I love hogs",
            "Hogs are the best way to teach react",
            "Programming is lyfe",
        ],
    ),
];

/// How to pick a single user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserLookup {
    /// Primary key match.
    Id(i32),
    /// SQL `LIKE` against the username, lowercased on both sides so it is
    /// case-insensitive on every backend.
    UsernameLike(String),
    /// Exact username match.
    Username(String),
}

impl UserLookup {
    fn expr(&self) -> SimpleExpr {
        match self {
            UserLookup::Id(id) => user::Column::Id.eq(*id),
            UserLookup::UsernameLike(pattern) => {
                Expr::expr(Func::lower(Expr::col((user::Entity, user::Column::Username))))
                    .like(pattern.to_lowercase())
            }
            UserLookup::Username(name) => user::Column::Username.eq(name.as_str()),
        }
    }
}

/// The relational store holding users and tweets.
///
/// Cloning is cheap: the underlying [`DatabaseConnection`] is a pool handle.
/// Every read returns `Ok(None)` when nothing matches; absence is left for
/// the caller to turn into a response.
#[derive(Debug, Clone)]
pub struct Store {
    /// The Sea-ORM database connection used for database operations.
    conn: DatabaseConnection,
}

impl Store {
    /// Wraps an already-open connection. The schema is not touched.
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// The underlying connection.
    pub fn connection(&self) -> &DatabaseConnection {
        &self.conn
    }

    /// Opens the configured database and creates any missing tables.
    pub async fn connect(config: &Config) -> std::result::Result<Self, StoreError> {
        let mut opt = ConnectOptions::new(config.database_url.clone());
        if let Some(max) = config.max_connections {
            opt.max_connections(max);
        }
        opt.sqlx_logging(config.sql_logging);

        let conn = Database::connect(opt)
            .await
            .map_err(StoreError::Unavailable)?;

        let store = Self::new(conn);
        store.create_schema().await?;
        Ok(store)
    }

    /// Creates `users` then `tweets`, skipping tables that already exist.
    pub async fn create_schema(&self) -> std::result::Result<(), StoreError> {
        let backend = self.conn.get_database_backend();
        let schema = Schema::new(backend);

        let mut users = schema.create_table_from_entity(user::Entity);
        users.if_not_exists();
        let mut tweets = schema.create_table_from_entity(tweet::Entity);
        tweets.if_not_exists();

        for stmt in [users, tweets] {
            self.conn
                .execute(backend.build(&stmt))
                .await
                .map_err(StoreError::Unavailable)?;
        }

        tracing::info!("Schema ready");
        Ok(())
    }

    /// Inserts the [`SEED`] rows when there are no users yet.
    ///
    /// Runs in one transaction; on any failure nothing is kept. Returns
    /// whether rows were inserted.
    pub async fn seed_if_empty(&self) -> std::result::Result<bool, StoreError> {
        let txn = self.conn.begin().await.map_err(StoreError::Seed)?;

        let existing = user::Entity::find()
            .count(&txn)
            .await
            .map_err(StoreError::Seed)?;
        if existing > 0 {
            tracing::debug!(users = existing, "Store already populated, skipping seed");
            return Ok(false);
        }

        match insert_seed(&txn).await {
            Ok(inserted) => {
                txn.commit().await.map_err(StoreError::Seed)?;
                tracing::info!(users = SEED.len(), tweets = inserted, "Seeded store");
                Ok(true)
            }
            Err(err) => {
                tracing::error!(error = %err, "Seeding failed, rolling back");
                if let Err(rollback) = txn.rollback().await {
                    tracing::error!(error = %rollback, "Rollback failed");
                }
                Err(StoreError::Seed(err))
            }
        }
    }

    /// All users with their tweets, by id.
    pub async fn users(&self) -> Result<Vec<UserRecord>> {
        let rows = user::Entity::find()
            .order_by_asc(user::Column::Id)
            .find_with_related(tweet::Entity)
            .all(&self.conn)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(owner, tweets)| UserRecord::new(owner, tweets))
            .collect())
    }

    /// The first user matching `lookup`, by id, with its tweets.
    pub async fn user(&self, lookup: &UserLookup) -> Result<Option<UserRecord>> {
        let owner = user::Entity::find()
            .filter(lookup.expr())
            .order_by_asc(user::Column::Id)
            .one(&self.conn)
            .await?;

        match owner {
            Some(owner) => Ok(Some(self.with_tweets(owner).await?)),
            None => {
                tracing::debug!(?lookup, "No user matched");
                Ok(None)
            }
        }
    }

    /// All tweets with their owners, by id.
    pub async fn tweets(&self) -> Result<Vec<TweetRecord>> {
        let rows = tweet::Entity::find()
            .order_by_asc(tweet::Column::Id)
            .find_also_related(user::Entity)
            .all(&self.conn)
            .await?;

        rows.into_iter()
            .map(|(tweet, owner)| owned(tweet, owner))
            .collect()
    }

    /// A single tweet with its owner.
    pub async fn tweet(&self, id: i32) -> Result<Option<TweetRecord>> {
        let row = tweet::Entity::find_by_id(id)
            .find_also_related(user::Entity)
            .one(&self.conn)
            .await?;

        match row {
            Some((tweet, owner)) => owned(tweet, owner).map(Some),
            None => {
                tracing::debug!(tweet_id = id, "No tweet matched");
                Ok(None)
            }
        }
    }

    /// The user who wrote tweet `tweet_id`, with all of that user's tweets.
    pub async fn tweet_owner(&self, tweet_id: i32) -> Result<Option<UserRecord>> {
        let owner = user::Entity::find()
            .join(JoinType::InnerJoin, user::Relation::Tweet.def())
            .filter(tweet::Column::Id.eq(tweet_id))
            .one(&self.conn)
            .await?;

        match owner {
            Some(owner) => Ok(Some(self.with_tweets(owner).await?)),
            None => {
                tracing::debug!(tweet_id, "No tweet matched");
                Ok(None)
            }
        }
    }

    async fn with_tweets(&self, owner: user::Model) -> Result<UserRecord> {
        let tweets = owner
            .find_related(tweet::Entity)
            .order_by_asc(tweet::Column::Id)
            .all(&self.conn)
            .await?;
        Ok(UserRecord::new(owner, tweets))
    }
}

/// Inserts every [`SEED`] user and tweet, returning the tweet count.
async fn insert_seed(txn: &DatabaseTransaction) -> std::result::Result<usize, DbErr> {
    let mut inserted = 0usize;
    for (username, texts) in SEED {
        let owner = user::ActiveModel {
            username: Set(username.to_string()),
            ..Default::default()
        }
        .insert(txn)
        .await?;

        for text in texts.iter() {
            tweet::ActiveModel {
                text: Set(text.to_string()),
                user_id: Set(owner.id),
                ..Default::default()
            }
            .insert(txn)
            .await?;
            inserted += 1;
        }
    }
    Ok(inserted)
}

fn owned(tweet: tweet::Model, owner: Option<user::Model>) -> Result<TweetRecord> {
    match owner {
        Some(owner) => Ok(TweetRecord::new(tweet, &owner)),
        None => Err(AppError::Integrity(format!(
            "tweet {} references missing user {}",
            tweet.id, tweet.user_id
        ))),
    }
}
