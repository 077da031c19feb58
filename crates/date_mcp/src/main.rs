mod cli;
mod config;
mod core;
mod logging;
mod server;

use crate::cli::Cli;
use crate::core::provider::DateServer;

/// Date MCP Server
///
/// Serves date and clock tools over stdio:
/// - Tools: weekday, ISO date, local/UTC time, time in named locations
/// - Resources: Server status, help documentation and the location catalog
///
/// Usage: npx @modelcontextprotocol/inspector cargo run --bin mcp-server-date
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Cli::parse_config();

    logging::init_logging()?;

    if config.list_locations {
        let date_server = DateServer::new(config.location_registry());
        println!("{}", date_server.list_locations());
        return Ok(());
    }

    tracing::info!("Starting Date MCP server");

    if let Err(e) = server::run(config).await {
        tracing::error!("Error running Date MCP server: {}", e);
        return Err(e);
    }

    Ok(())
}
