use anyhow::Result;

use super::CommandContext;
use crate::graphql::TweetqlSchema;

pub fn handle_query(ctx: CommandContext, query: String, variables: Option<String>) -> Result<()> {
    let schema = ctx.schema()?;
    execute(&schema, &query, variables)
}

/// Run one operation and print the JSON response.
pub(super) fn execute(schema: &TweetqlSchema, query: &str, variables: Option<String>) -> Result<()> {
    let vars: async_graphql::Variables = if let Some(v) = variables {
        serde_json::from_str(&v)?
    } else {
        async_graphql::Variables::default()
    };

    let request = async_graphql::Request::new(query).variables(vars);
    let response = tokio::runtime::Runtime::new()?.block_on(schema.execute(request));

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
