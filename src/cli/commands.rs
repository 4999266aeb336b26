use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tweetql")]
#[command(
    author,
    version,
    about = "A small GraphQL API over tweets, users and a movie-listing proxy"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (uses ./tweetql.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Base URL of the movie API (overrides config)
    #[arg(long, global = true, env = "TWEETQL_UPSTREAM_URL")]
    pub upstream_url: Option<String>,

    /// Enable debug logging (overrides config)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write JSON logs to this file, rotated daily (overrides config)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start GraphQL HTTP server
    Serve {
        /// Address to bind (overrides config)
        #[arg(long, env = "TWEETQL_HOST")]
        host: Option<String>,

        /// Port to listen on (overrides config)
        #[arg(short, long, env = "TWEETQL_PORT")]
        port: Option<u16>,
    },

    /// Execute a GraphQL query against freshly seeded data
    Query {
        /// GraphQL query string
        query: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,
    },

    /// Execute a GraphQL mutation (automatically wraps in 'mutation { }')
    Mutate {
        /// Mutation body (without 'mutation' keyword)
        mutation: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,
    },

    /// Print the GraphQL schema in SDL form
    Schema,
}
