//! Command-line interface for tweetql.

mod commands;
pub mod handlers;

pub use commands::{Cli, Commands};
