use rmcp::{
    RoleServer, ServerHandler,
    handler::server::{
        router::{prompt::PromptRouter, tool::ToolRouter},
        wrapper::Parameters,
    },
    model::*,
    prompt, prompt_handler, prompt_router,
    service::RequestContext,
    tool, tool_handler, tool_router,
};

use crate::config::Config;
use crate::core::provider::DateServer;
use crate::core::{
    error::{DateServerError, McpResult, ToolResult},
    models::CurrentTimeLocationRequest,
    registry::LocationRegistry,
    utils::LOCATIONS_ENV_VAR,
};

/// Date MCP Server exposing clock and location queries
#[derive(Clone)]
pub struct DateService {
    date_server: DateServer,
    local_timezone_name: String,
    tool_router: ToolRouter<DateService>,
    prompt_router: PromptRouter<DateService>,
}

impl DateService {
    pub fn new(locations: LocationRegistry) -> Self {
        let date_server = DateServer::new(locations);
        let local_timezone_name = date_server.local_timezone.name().to_string();

        Self {
            date_server,
            local_timezone_name,
            tool_router: Self::tool_router(),
            prompt_router: Self::prompt_router(),
        }
    }

    fn create_resource_text(&self, uri: &str, name: &str) -> Resource {
        RawResource::new(uri, name.to_string()).no_annotation()
    }

    pub(crate) fn get_local_timezone_name(&self) -> &str {
        &self.local_timezone_name
    }

    fn text_result(text: String) -> ToolResult {
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    fn generate_status_content(&self) -> String {
        format!(
            r#"Date MCP Server Status

Server: Running
Local Timezone: {}
Current Local Time: {}
Current UTC Time: {}
Day of Week: {}
Configured Locations: {}
Tools Available: 6
Prompts Available: 1
Resources Available: 3

Capabilities:
- Current weekday and ISO date
- Local and UTC clock readings
- Current time in named locations
- Custom locations via {}"#,
            self.local_timezone_name,
            self.date_server.current_time(),
            self.date_server.current_time_utc(),
            self.date_server.day_name(),
            self.date_server.locations().len(),
            LOCATIONS_ENV_VAR,
        )
    }

    fn generate_help_content(&self) -> String {
        format!(
            r#"Date MCP Server Help

TOOLS:
- get_day_name: Name of the current day of the week (e.g. Monday)
- get_iso_date: Current date in ISO 8601 format (YYYY-MM-DD)
- current_time: Current local time with UTC offset (YYYY-MM-DDTHH:MM:SS+HH:MM)
- current_time_utc: Current UTC time (YYYY-MM-DDTHH:MM:SSZ)
- current_time_location: Current time in a configured location
  - location: Location name, case-insensitive (required)
  - Example: {{"location": "Tokyo"}}
- list_available_locations: All configured locations and their timezones

PROMPTS:
- location_guidance: How to use and configure locations

RESOURCES:
- date://status: Current server status and local time
- date://help: This help documentation
- date://locations: Configured locations

LOCAL TIMEZONE: {}

CUSTOM LOCATIONS:
Set {} to comma-separated Name=Region/City pairs before starting the server:

  {}="Home=Europe/Lisbon,Office=America/Chicago"

- Names are matched case-insensitively
- A custom name replaces a built-in location with the same name
- Entries without '=' or with an unknown timezone are ignored"#,
            self.local_timezone_name, LOCATIONS_ENV_VAR, LOCATIONS_ENV_VAR
        )
    }

    fn generate_location_guidance(&self) -> String {
        let local_tz = self.get_local_timezone_name();
        format!(
            r#"Location Usage Guidance:

1. **Local Time**
   - current_time reports the server's local time; its timezone is {}
   - get_day_name and get_iso_date use the same local calendar
   - current_time_utc is unaffected by the server's timezone

2. **Named Locations**
   - Pass a city name to current_time_location, e.g. 'Tokyo' or 'New York'
   - Names are case-insensitive: 'tokyo', 'Tokyo' and 'TOKYO' are equivalent
   - Call list_available_locations to see every configured name

3. **Unknown Locations**
   - An unknown name returns an explanation with sample locations
   - Pick one of the listed names or ask the operator to configure it

4. **Custom Locations**
   - Set {} to comma-separated Name=Region/City pairs
   - Example: {}="Home=Europe/Lisbon,Office=America/Chicago"
   - Use full IANA names such as 'Europe/Lisbon'
   - Avoid abbreviations like 'EST' or 'PST' as they can be ambiguous
   - Custom names replace built-ins with the same name"#,
            local_tz, LOCATIONS_ENV_VAR, LOCATIONS_ENV_VAR
        )
    }
}

impl Default for DateService {
    fn default() -> Self {
        Self::new(LocationRegistry::default())
    }
}

#[tool_router]
impl DateService {
    #[tool(description = "Get the name of the current day of the week")]
    pub(crate) async fn get_day_name(&self) -> ToolResult {
        Self::text_result(self.date_server.day_name())
    }

    #[tool(description = "Get the current date in ISO 8601 format (YYYY-MM-DD)")]
    pub(crate) async fn get_iso_date(&self) -> ToolResult {
        Self::text_result(self.date_server.iso_date())
    }

    #[tool(description = "Get the current local time with its UTC offset (YYYY-MM-DDTHH:MM:SS+HH:MM)")]
    pub(crate) async fn current_time(&self) -> ToolResult {
        Self::text_result(self.date_server.current_time())
    }

    #[tool(description = "Get the current time in UTC (YYYY-MM-DDTHH:MM:SSZ)")]
    pub(crate) async fn current_time_utc(&self) -> ToolResult {
        Self::text_result(self.date_server.current_time_utc())
    }

    #[tool(
        description = "Get the current time in a named location such as 'Tokyo' or 'New York'. Names are case-insensitive; use list_available_locations to see the configured locations."
    )]
    pub(crate) async fn current_time_location(
        &self,
        Parameters(req): Parameters<CurrentTimeLocationRequest>,
    ) -> ToolResult {
        // Lookup only fails for unconfigured names; the reply explains how to fix it
        match self.date_server.current_time_location(&req.location) {
            Ok(time) => Self::text_result(time),
            Err(e) => {
                tracing::debug!("{}", e);
                Ok(CallToolResult::error(vec![Content::text(
                    self.date_server.unknown_location_message(&req.location),
                )]))
            }
        }
    }

    #[tool(description = "List all configured locations and their IANA timezones")]
    pub(crate) async fn list_available_locations(&self) -> ToolResult {
        Self::text_result(self.date_server.list_locations())
    }
}

#[prompt_router]
impl DateService {
    /// Generate guidance for using named locations
    #[prompt(name = "location_guidance")]
    async fn location_guidance(
        &self,
        _ctx: RequestContext<rmcp::RoleServer>,
    ) -> McpResult<Vec<PromptMessage>> {
        let guidance = self.generate_location_guidance();

        Ok(vec![PromptMessage {
            role: PromptMessageRole::Assistant,
            content: PromptMessageContent::text(guidance),
        }])
    }
}

#[tool_handler]
#[prompt_handler]
impl ServerHandler for DateService {
    fn get_info(&self) -> ServerInfo {
        let local_tz = self.get_local_timezone_name();
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder()
                .enable_prompts()
                .enable_resources()
                .enable_tools()
                .build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(format!(
                "Date MCP Server for current date and time queries. Tools: get_day_name, get_iso_date, current_time, current_time_utc, current_time_location, list_available_locations. Local timezone: {}. Location names are case-insensitive.",
                local_tz
            )),
        }
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _: RequestContext<rmcp::RoleServer>,
    ) -> McpResult<ListResourcesResult> {
        Ok(ListResourcesResult {
            resources: vec![
                self.create_resource_text("date://status", "server-status"),
                self.create_resource_text("date://help", "help-documentation"),
                self.create_resource_text("date://locations", "location-list"),
            ],
            next_cursor: None,
        })
    }

    async fn read_resource(
        &self,
        ReadResourceRequestParam { uri }: ReadResourceRequestParam,
        _: RequestContext<rmcp::RoleServer>,
    ) -> McpResult<ReadResourceResult> {
        let text = match uri.as_str() {
            "date://status" => self.generate_status_content(),
            "date://help" => self.generate_help_content(),
            "date://locations" => self.date_server.list_locations(),
            _ => {
                return Err(DateServerError::ResourceNotFound {
                    uri: uri.to_string(),
                }
                .into());
            }
        };

        Ok(ReadResourceResult {
            contents: vec![ResourceContents::text(text, uri)],
        })
    }

    async fn list_resource_templates(
        &self,
        _request: Option<PaginatedRequestParam>,
        _: RequestContext<rmcp::RoleServer>,
    ) -> McpResult<ListResourceTemplatesResult> {
        Ok(ListResourceTemplatesResult {
            next_cursor: None,
            resource_templates: Vec::new(),
        })
    }

    async fn initialize(
        &self,
        _request: InitializeRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> McpResult<InitializeResult> {
        tracing::info!("Date MCP Server initialized successfully");
        Ok(self.get_info())
    }
}

pub async fn run(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    use rmcp::{ServiceExt, transport::stdio};

    let locations = config.location_registry();
    tracing::info!("Serving {} configured locations", locations.len());

    let service = DateService::new(locations)
        .serve(stdio())
        .await
        .inspect_err(|e| {
            tracing::error!("serving error: {:?}", e);
        })?;

    service.waiting().await?;
    Ok(())
}
