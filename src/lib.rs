//! # tweetql - a small GraphQL API over tweets, users and movies
//!
//! Tweets and users live in process memory; movies are fetched from the YTS
//! API on every request and relayed unchanged.
//!
//! ## Quick Start
//!
//! ```bash
//! # Start the server on http://127.0.0.1:4000/graphql
//! tweetql serve
//!
//! # Run a one-off query against freshly seeded data
//! tweetql query '{ allTweets { id text author { fullName } } }'
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions
//! - [`config`]: Configuration loading
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers and HTTP server
//! - [`model`]: Data models (Tweet, User, Movie)
//! - [`storage`]: In-memory tweet and user store
//! - [`upstream`]: Movie API client

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading.
///
/// Reads `tweetql.toml`; every setting has a default.
pub mod config;

/// Error types and result aliases.
pub mod error;

/// GraphQL schema, resolvers and HTTP server.
pub mod graphql;

pub mod logging;
pub mod model;
pub mod storage;

/// Movie API client behind the `MovieSource` trait.
pub mod upstream;
