use anyhow::{Context, Result};
use clap::Parser;

use tweetql::cli::handlers::{
    CommandContext, handle_mutate, handle_query, handle_schema, handle_serve,
};
use tweetql::cli::{Cli, Commands};
use tweetql::config::TweetqlConfig;
use tweetql::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    let mut config =
        TweetqlConfig::load(cli.config.as_deref(), &cwd).context("Failed to load config")?;
    if let Some(url) = cli.upstream_url {
        config.upstream.base_url = url;
    }
    if cli.verbose {
        config.logging.level = "debug".to_string();
    }
    if let Some(path) = cli.log_file {
        config.logging.file = Some(path);
    }

    let _log_guard = logging::init(&config.logging).context("Failed to set up logging")?;

    let ctx = CommandContext::new(config);

    match cli.command {
        Commands::Serve { host, port } => handle_serve(ctx, host, port),
        Commands::Query { query, variables } => handle_query(ctx, query, variables),
        Commands::Mutate {
            mutation,
            variables,
        } => handle_mutate(ctx, mutation, variables),
        Commands::Schema => handle_schema(),
    }
}
