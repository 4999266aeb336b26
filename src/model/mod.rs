//! Data models for tweetql.
//!
//! - [`Tweet`]: A short text post, optionally linked to a user
//! - [`User`]: A seeded account with a derived full name
//! - [`Movie`] and [`Torrent`]: Raw [`Record`]s relayed from the YTS API

mod movie;
mod tweet;
mod user;

pub use movie::{Movie, Record, Torrent, required};
pub use tweet::Tweet;
pub use user::User;
