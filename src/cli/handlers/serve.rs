use anyhow::Result;
use colored::Colorize;

use super::CommandContext;
use crate::graphql::run_server;

pub fn handle_serve(mut ctx: CommandContext, host: Option<String>, port: Option<u16>) -> Result<()> {
    if let Some(host) = host {
        ctx.config.server.host = host;
    }
    if let Some(port) = port {
        ctx.config.server.port = port;
    }

    let schema = ctx.schema()?;
    let addr = ctx.config.server.bind_addr();

    println!(
        "{} http://{}/graphql",
        "Starting GraphQL server on".green(),
        addr
    );
    println!("{} http://{}/", "GraphiQL:".green(), addr);

    tokio::runtime::Runtime::new()?.block_on(run_server(schema, &addr))?;
    Ok(())
}
