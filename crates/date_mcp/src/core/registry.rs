use std::collections::BTreeMap;
use std::str::FromStr;

use chrono_tz::Tz;

use crate::core::{
    error::{DateServerError, DateServerResult},
    models::LocationEntry,
    utils::normalize_location_name,
};

/// Locations available without any configuration
pub const BUILTIN_LOCATIONS: &[(&str, &str)] = &[
    ("New York", "America/New_York"),
    ("Los Angeles", "America/Los_Angeles"),
    ("Chicago", "America/Chicago"),
    ("Denver", "America/Denver"),
    ("Toronto", "America/Toronto"),
    ("Mexico City", "America/Mexico_City"),
    ("Sao Paulo", "America/Sao_Paulo"),
    ("London", "Europe/London"),
    ("Paris", "Europe/Paris"),
    ("Berlin", "Europe/Berlin"),
    ("Madrid", "Europe/Madrid"),
    ("Rome", "Europe/Rome"),
    ("Amsterdam", "Europe/Amsterdam"),
    ("Moscow", "Europe/Moscow"),
    ("Dubai", "Asia/Dubai"),
    ("Mumbai", "Asia/Kolkata"),
    ("Singapore", "Asia/Singapore"),
    ("Hong Kong", "Asia/Hong_Kong"),
    ("Shanghai", "Asia/Shanghai"),
    ("Tokyo", "Asia/Tokyo"),
    ("Seoul", "Asia/Seoul"),
    ("Sydney", "Australia/Sydney"),
    ("Auckland", "Pacific/Auckland"),
];

/// Parse an IANA timezone identifier
pub fn parse_timezone(timezone_name: &str) -> DateServerResult<Tz> {
    Tz::from_str(timezone_name).map_err(|_| DateServerError::InvalidTimezone {
        timezone: timezone_name.to_string(),
    })
}

/// Parse a single `Name=Region/City` override
///
/// Splits on the first `=`, so zone identifiers never need escaping.
pub fn parse_location_entry(raw: &str) -> DateServerResult<LocationEntry> {
    let (name, zone) =
        raw.split_once('=')
            .ok_or_else(|| DateServerError::MalformedLocationEntry {
                entry: raw.trim().to_string(),
            })?;

    let name = name.trim();
    if name.is_empty() {
        return Err(DateServerError::MalformedLocationEntry {
            entry: raw.trim().to_string(),
        });
    }

    let timezone = parse_timezone(zone.trim())?;
    Ok(LocationEntry::new(name, timezone))
}

/// Immutable mapping from location name to timezone
///
/// Built once at startup from [`BUILTIN_LOCATIONS`] and the user's overrides.
/// Keys are case-folded names; entries keep their display casing.
#[derive(Debug, Clone)]
pub struct LocationRegistry {
    entries: BTreeMap<String, LocationEntry>,
}

impl LocationRegistry {
    /// Registry holding only the built-in locations
    pub fn builtin() -> Self {
        let mut registry = Self {
            entries: BTreeMap::new(),
        };

        for (name, zone) in BUILTIN_LOCATIONS {
            match parse_timezone(zone) {
                Ok(timezone) => registry.insert(LocationEntry::new(*name, timezone)),
                Err(e) => tracing::warn!("Skipping built-in location '{}': {}", name, e),
            }
        }

        registry
    }

    /// Built-in locations merged with a comma-separated override string
    ///
    /// Overrides replace built-ins that share a case-folded name. Entries that
    /// cannot be parsed are logged and dropped; the rest still apply.
    pub fn with_overrides(overrides: Option<&str>) -> Self {
        let mut registry = Self::builtin();

        let Some(overrides) = overrides else {
            return registry;
        };

        for raw in overrides.split(',').filter(|raw| !raw.trim().is_empty()) {
            match parse_location_entry(raw) {
                Ok(entry) => {
                    tracing::debug!("Configured location {}", entry);
                    registry.insert(entry);
                }
                Err(e) => tracing::warn!("Ignoring location override: {}", e),
            }
        }

        registry
    }

    fn insert(&mut self, entry: LocationEntry) {
        self.entries
            .insert(normalize_location_name(entry.name()), entry);
    }

    /// Look up a location by name, ignoring case
    pub fn resolve(&self, name: &str) -> DateServerResult<&LocationEntry> {
        self.entries
            .get(&normalize_location_name(name))
            .ok_or_else(|| DateServerError::UnknownLocation {
                location: name.to_string(),
            })
    }

    /// All entries, ordered by display name
    pub fn list(&self) -> impl Iterator<Item = &LocationEntry> {
        self.entries.values()
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl Default for LocationRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
