use rmcp::ErrorData as McpError;
use rmcp::serde_json::json;

use crate::core::utils::AVAILABLE_RESOURCES;

// Error codes
const ERROR_INVALID_TIMEZONE: &str = "invalid_timezone";
const ERROR_MALFORMED_LOCATION_ENTRY: &str = "malformed_location_entry";
const ERROR_UNKNOWN_LOCATION: &str = "unknown_location";
const ERROR_RESOURCE_NOT_FOUND: &str = "resource_not_found";
const ERROR_LOGGING_INITIALIZATION: &str = "logging_initialization_failed";

/// Custom error types for the date server
#[derive(Debug, thiserror::Error)]
pub enum DateServerError {
    #[error("Invalid timezone: {timezone}")]
    InvalidTimezone { timezone: String },
    #[error("Malformed location entry: '{entry}'. Expected Name=Region/City")]
    MalformedLocationEntry { entry: String },
    #[error("Unknown location: {location}")]
    UnknownLocation { location: String },
    #[error("Resource not found: {uri}")]
    ResourceNotFound { uri: String },
    #[error("Logging initialization failed: {0}")]
    LoggingInitialization(String),
}

impl From<DateServerError> for McpError {
    fn from(err: DateServerError) -> Self {
        match err {
            DateServerError::InvalidTimezone { timezone } => McpError::invalid_params(
                ERROR_INVALID_TIMEZONE,
                Some(json!({"timezone": timezone})),
            ),
            DateServerError::MalformedLocationEntry { entry } => McpError::invalid_params(
                ERROR_MALFORMED_LOCATION_ENTRY,
                Some(json!({"entry": entry})),
            ),
            DateServerError::UnknownLocation { location } => McpError::invalid_params(
                ERROR_UNKNOWN_LOCATION,
                Some(json!({"location": location})),
            ),
            DateServerError::ResourceNotFound { uri } => McpError::resource_not_found(
                ERROR_RESOURCE_NOT_FOUND,
                Some(json!({
                    "uri": uri,
                    "available_resources": AVAILABLE_RESOURCES
                })),
            ),
            DateServerError::LoggingInitialization(message) => McpError::internal_error(
                ERROR_LOGGING_INITIALIZATION,
                Some(json!({"message": message})),
            ),
        }
    }
}

pub type DateServerResult<T> = Result<T, DateServerError>;
pub type McpResult<T> = Result<T, McpError>;

/// Type alias for tool results
pub type ToolResult = McpResult<rmcp::model::CallToolResult>;

#[cfg(test)]
mod tests {
    use super::DateServerError;
    use crate::core::error::McpError;

    #[test]
    fn test_error_conversion() {
        let error = DateServerError::InvalidTimezone {
            timezone: "Invalid/Zone".to_string(),
        };
        let mcp_error: McpError = error.into();

        assert!(mcp_error.to_string().contains("invalid_timezone"));
    }

    #[test]
    fn test_resource_not_found_lists_resources() {
        let error = DateServerError::ResourceNotFound {
            uri: "date://nope".to_string(),
        };
        let mcp_error: McpError = error.into();

        let data = mcp_error.data.expect("resource errors carry data");
        assert_eq!(data["uri"], "date://nope");
        assert!(
            data["available_resources"]
                .as_array()
                .is_some_and(|uris| uris.iter().any(|uri| uri == "date://locations"))
        );
    }

    #[test]
    fn test_error_messages() {
        let error = DateServerError::MalformedLocationEntry {
            entry: "Bad".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Malformed location entry: 'Bad'. Expected Name=Region/City"
        );
    }
}
