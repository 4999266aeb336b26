use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Json, Router,
    extract::State,
    response::{Html, IntoResponse},
    routing::get,
};
use tokio::net::TcpListener;
use tracing::info;

use super::TweetqlSchema;
use crate::error::Result;

async fn graphql_handler(
    State(schema): State<TweetqlSchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "tweetql",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Routes: GraphiQL at `/`, the API at `/graphql` (GET and POST), `/health`.
pub fn router(schema: TweetqlSchema) -> Router {
    Router::new()
        .route("/", get(graphiql))
        .route("/graphql", get(graphql_handler).post(graphql_handler))
        .route("/health", get(health))
        .with_state(schema)
}

/// Serve on an already bound listener until Ctrl-C.
pub async fn serve(listener: TcpListener, schema: TweetqlSchema) -> Result<()> {
    axum::serve(listener, router(schema))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

/// Bind `addr` and serve.
pub async fn run_server(schema: TweetqlSchema, addr: &str) -> Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "GraphQL server listening");
    serve(listener, schema).await?;
    info!("GraphQL server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // No signal handler available; run until the process is killed.
        std::future::pending::<()>().await;
    }
}
