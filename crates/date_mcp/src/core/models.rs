use std::fmt;

use chrono_tz::Tz;
use derive_getters::Getters;
use rmcp::schemars;
use serde::{Deserialize, Deserializer};

/// Helper function to deserialize and trim strings
fn deserialize_trimmed_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Ok(s.trim().to_string())
}

/// A human-facing location name bound to one IANA timezone
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct LocationEntry {
    /// Display name, in its configured casing
    name: String,
    /// Resolved timezone
    timezone: Tz,
}

impl LocationEntry {
    pub fn new(name: impl Into<String>, timezone: Tz) -> Self {
        Self {
            name: name.into(),
            timezone,
        }
    }

    /// Canonical IANA identifier, e.g. `Europe/Berlin`
    pub fn timezone_id(&self) -> &'static str {
        self.timezone.name()
    }
}

impl fmt::Display for LocationEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.timezone_id())
    }
}

/// Request to get the current time in a configured location
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CurrentTimeLocationRequest {
    /// Location name as listed by list_available_locations (case-insensitive, e.g. 'Tokyo')
    #[serde(deserialize_with = "deserialize_trimmed_string")]
    pub location: String,
}
