use chrono_tz::Tz;

// Constants for format strings
pub const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";
pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const DAY_FORMAT: &str = "%A";

/// Environment variable holding user-defined `Name=Region/City` overrides
pub const LOCATIONS_ENV_VAR: &str = "DATE_MCP_LOCATIONS";

/// How many configured locations an unknown-location reply suggests
pub const LOCATION_SAMPLE_SIZE: usize = 5;

/// Available resource URIs for the Date MCP Server
pub const AVAILABLE_RESOURCES: &[&str] = &["date://status", "date://help", "date://locations"];

// Case-folding exceptions for Turkish i
const COMBINING_DOT_ABOVE: char = '\u{0307}';
const DOTLESS_I: char = '\u{0131}';

/// Normalize a location name into its registry key
///
/// Surrounding whitespace is ignored and the comparison is case-insensitive,
/// so `" Tokyo "`, `"tokyo"` and `"TOKYO"` share one key. Dotted and dotless
/// `i` fold to plain `i`, which plain lowercasing leaves apart (`İzmir`).
pub fn normalize_location_name(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .chars()
        .filter(|c| *c != COMBINING_DOT_ABOVE)
        .map(|c| if c == DOTLESS_I { 'i' } else { c })
        .collect()
}

/// Detect the IANA name of the host timezone, falling back to UTC
pub fn detect_local_timezone() -> Tz {
    match iana_time_zone::get_timezone() {
        Ok(tz_name) => match tz_name.parse::<Tz>() {
            Ok(tz) => tz,
            Err(_) => {
                tracing::warn!("Could not parse timezone '{}', defaulting to UTC", tz_name);
                chrono_tz::UTC
            }
        },
        Err(_) => {
            tracing::warn!("Could not detect system timezone, defaulting to UTC");
            chrono_tz::UTC
        }
    }
}
