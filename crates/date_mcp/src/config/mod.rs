use crate::core::registry::LocationRegistry;

/// Configuration derived from CLI arguments and the environment
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Raw `Name=Region/City` overrides, comma-separated
    pub locations: Option<String>,
    /// Print the location catalog and exit instead of serving
    pub list_locations: bool,
}

impl Config {
    /// Build the location registry this configuration describes
    pub fn location_registry(&self) -> LocationRegistry {
        LocationRegistry::with_overrides(self.locations.as_deref())
    }
}
