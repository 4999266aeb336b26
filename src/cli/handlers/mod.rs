mod mutate;
mod query;
mod schema;
mod serve;

pub use mutate::handle_mutate;
pub use query::handle_query;
pub use schema::handle_schema;
pub use serve::handle_serve;

use crate::config::TweetqlConfig;
use crate::graphql::{TweetqlSchema, build_schema};
use crate::storage::Store;
use crate::upstream::YtsClient;
use std::sync::Arc;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: TweetqlConfig,
}

impl CommandContext {
    pub fn new(config: TweetqlConfig) -> Self {
        Self { config }
    }

    /// A schema over freshly seeded data and the configured movie API.
    pub fn schema(&self) -> crate::error::Result<TweetqlSchema> {
        let movies = YtsClient::new(&self.config.upstream.base_url)?;
        Ok(build_schema(Arc::new(Store::seeded()), Arc::new(movies)))
    }
}
