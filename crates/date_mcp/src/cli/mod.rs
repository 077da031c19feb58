use clap::Parser;

use crate::config::Config;
use crate::core::utils::LOCATIONS_ENV_VAR;

/// Date MCP Server
///
/// A Model Context Protocol server answering date and clock questions:
/// today's weekday and ISO date, local and UTC time, and the current time in
/// named locations.
///
/// ## Development
/// ```bash
/// npx @modelcontextprotocol/inspector cargo run --bin mcp-server-date
/// ```
///
/// ## Configuration
/// Add to your MCP client configuration:
/// ```json
/// {
///   "mcpServers": {
///     "date": {
///       "command": "mcp-server-date",
///       "env": {
///         "DATE_MCP_LOCATIONS": "Home=Europe/Lisbon,Office=America/Chicago",
///         "RUST_LOG": "info"
///       }
///     }
///   }
/// }
/// ```
///
/// ## Environment Variables
/// - `DATE_MCP_LOCATIONS`: Extra locations as `Name=Region/City` pairs
/// - `RUST_LOG`: Controls logging verbosity (trace, debug, info, warn, error)
#[derive(Parser, Debug, Clone)]
#[command(name = "mcp-server-date")]
#[command(about = "An MCP server for current date, time and location clock queries")]
#[command(version)]
#[command(
    long_about = "A Model Context Protocol (MCP) server exposing the current weekday, ISO date, local time, UTC time and the time in named locations. \nLocations come from a built-in catalog extended with DATE_MCP_LOCATIONS."
)]
pub struct Cli {
    /// Extra locations as comma-separated Name=Region/City pairs.
    ///
    /// Entries override built-in locations with the same (case-insensitive) name.
    /// Malformed entries and unknown timezones are skipped with a warning.
    #[arg(
        long,
        env = LOCATIONS_ENV_VAR,
        value_name = "NAME=ZONE,...",
        help = "Extra locations, e.g. 'Home=Europe/Lisbon,Office=America/Chicago'"
    )]
    pub locations: Option<String>,

    /// Print the configured location catalog and exit.
    #[arg(long, help = "Print the configured locations and exit")]
    pub list_locations: bool,
}

impl Cli {
    /// Parse CLI arguments and convert to configuration
    pub fn parse_config() -> Config {
        Self::parse().into_config()
    }

    fn into_config(self) -> Config {
        Config {
            locations: self.locations,
            list_locations: self.list_locations,
        }
    }
}
