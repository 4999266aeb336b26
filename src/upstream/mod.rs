//! Outbound access to the YTS movie-listing API.
//!
//! Resolvers only see the [`MovieSource`] trait; the production
//! implementation is [`YtsClient`]. Responses are relayed as-is: no retries,
//! no caching, no timeouts.

#[cfg(test)]
pub(crate) mod testing;
mod yts;

use async_trait::async_trait;

use crate::error::Result;
use crate::model::Movie;

pub use yts::YtsClient;

/// Something that can list movies and look one up by id.
#[async_trait]
pub trait MovieSource: Send + Sync {
    /// Every movie in the upstream listing, in upstream order.
    async fn list_movies(&self) -> Result<Vec<Movie>>;

    /// A single movie, or `None` when the upstream returns no record.
    async fn movie(&self, id: &str) -> Result<Option<Movie>>;
}
