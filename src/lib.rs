//! # tweet-board
//!
//! A small web application over a relational model of users and tweets,
//! built on [Sea-ORM](https://crates.io/crates/sea-orm) and
//! [axum](https://crates.io/crates/axum).
//!
//! ## Features
//!
//! - `users` and `tweets` tables, created if absent and seeded once
//! - JSON API under `/api` and HTML pages rendered with `minijinja` for the
//!   same lookups
//! - Paths like `/users/{key}` resolve by id when `key` is all digits and by
//!   username otherwise
//! - Explicit 404s for lookups that match nothing
//! - A dashboard serving a static chart layout
//!
//! ## Quick Start
//!
//! ```no_run
//! use tweet_board::{build_router, AppState, Config};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::from_env()?;
//!
//! // Connect, create tables and seed the sample rows
//! let state = AppState::from_config(&config).await?;
//!
//! let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
//! axum::serve(listener, build_router(state)).await?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod dashboard;
pub mod entity;
pub mod error;
pub mod record;
pub mod router;
pub mod segment;
pub mod state;
pub mod store;
pub mod templates;
pub mod views;

pub use config::Config;
pub use error::{AppError, InitError, StoreError};
pub use record::{TweetRecord, UserRecord};
pub use router::build_router;
pub use state::AppState;
pub use store::{Store, UserLookup};
pub use templates::Templates;
