//! Database entity models for tweet-board.
//!
//! These are the Sea-ORM entity definitions for the two tables the
//! application owns: `users` and `tweets`. A user has many tweets and each
//! tweet belongs to exactly one user.

/// User entity: the `users` table.
pub mod user;

/// Tweet entity: the `tweets` table.
pub mod tweet;
