use std::sync::Arc;

use async_graphql::extensions::Tracing;
use async_graphql::{Context, EmptySubscription, ID, Object, Schema, SchemaBuilder};
use tracing::debug;

use crate::storage::Store;
use crate::upstream::MovieSource;

use super::types::*;

pub type TweetqlSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub struct AppState {
    pub store: Arc<Store>,
    pub movies: Arc<dyn MovieSource>,
}

fn schema_builder() -> SchemaBuilder<QueryRoot, MutationRoot, EmptySubscription> {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription).extension(Tracing)
}

pub fn build_schema(store: Arc<Store>, movies: Arc<dyn MovieSource>) -> TweetqlSchema {
    let state = Arc::new(AppState { store, movies });
    schema_builder().data(state).finish()
}

/// The schema in SDL form. Needs no store or movie source.
pub fn sdl() -> String {
    schema_builder().finish().sdl()
}

pub(super) fn app_state<'a>(ctx: &'a Context<'_>) -> async_graphql::Result<&'a AppState> {
    Ok(ctx.data::<Arc<AppState>>()?.as_ref())
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Every tweet, in insertion order
    async fn all_tweets(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Tweet>> {
        let state = app_state(ctx)?;
        Ok(state.store.all_tweets().into_iter().map(Tweet::from).collect())
    }

    /// A single tweet by ID, or null
    async fn tweet(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<Option<Tweet>> {
        let state = app_state(ctx)?;
        Ok(state.store.find_tweet(&id).map(Tweet::from))
    }

    /// Liveness check
    async fn ping(&self) -> &'static str {
        "pong"
    }

    /// Every user, in insertion order
    async fn all_users(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<User>> {
        let state = app_state(ctx)?;
        Ok(state.store.all_users().into_iter().map(User::from).collect())
    }

    /// Movies from the upstream listing
    async fn all_movies(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Movie>> {
        let state = app_state(ctx)?;
        let movies = state.movies.list_movies().await?;
        Ok(movies.into_iter().map(Movie::from).collect())
    }

    /// A single upstream movie by ID
    async fn movie(&self, ctx: &Context<'_>, id: String) -> async_graphql::Result<Option<Movie>> {
        let state = app_state(ctx)?;
        Ok(state.movies.movie(&id).await?.map(Movie::from))
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Post a new tweet on behalf of a user
    async fn post_tweet(
        &self,
        ctx: &Context<'_>,
        text: String,
        user_id: ID,
    ) -> async_graphql::Result<Tweet> {
        let state = app_state(ctx)?;
        let tweet = state.store.append_tweet(text, Some(user_id.0));
        debug!(id = %tweet.id, "Posted tweet");
        Ok(tweet.into())
    }

    /// Deletes a Tweet if found, else returns false
    async fn delete_tweet(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<bool> {
        let state = app_state(ctx)?;
        let deleted = state.store.remove_tweet(&id);
        debug!(id = %id.as_str(), deleted, "Delete tweet");
        Ok(deleted)
    }
}
