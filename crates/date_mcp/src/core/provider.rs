use std::sync::Arc;

use chrono::{DateTime, Local, SecondsFormat, Utc};
use chrono_tz::Tz;

use crate::core::{
    error::DateServerResult,
    registry::LocationRegistry,
    utils::{
        self, DATE_FORMAT, DATETIME_FORMAT, DAY_FORMAT, LOCATION_SAMPLE_SIZE, LOCATIONS_ENV_VAR,
    },
};

/// Date and time queries backed by the system clock and a location registry
///
/// Every query reads the clock afresh; the `*_at` variants take the instant
/// explicitly so results can be checked against a fixed moment.
#[derive(Clone)]
pub struct DateServer {
    locations: Arc<LocationRegistry>,
    pub(crate) local_timezone: Tz,
}

impl DateServer {
    pub fn new(locations: LocationRegistry) -> Self {
        Self {
            locations: Arc::new(locations),
            local_timezone: utils::detect_local_timezone(),
        }
    }

    pub fn locations(&self) -> &LocationRegistry {
        &self.locations
    }

    /// Full weekday name of the current local day, e.g. `Monday`
    pub fn day_name(&self) -> String {
        self.day_name_at(Utc::now())
    }

    pub fn day_name_at(&self, now: DateTime<Utc>) -> String {
        now.with_timezone(&Local).format(DAY_FORMAT).to_string()
    }

    /// Current local date as `YYYY-MM-DD`
    pub fn iso_date(&self) -> String {
        self.iso_date_at(Utc::now())
    }

    pub fn iso_date_at(&self, now: DateTime<Utc>) -> String {
        now.with_timezone(&Local).format(DATE_FORMAT).to_string()
    }

    /// Current local time with the process's UTC offset
    pub fn current_time(&self) -> String {
        self.current_time_at(Utc::now())
    }

    pub fn current_time_at(&self, now: DateTime<Utc>) -> String {
        now.with_timezone(&Local).format(DATETIME_FORMAT).to_string()
    }

    /// Current time in UTC, always suffixed with `Z`
    pub fn current_time_utc(&self) -> String {
        self.current_time_utc_at(Utc::now())
    }

    pub fn current_time_utc_at(&self, now: DateTime<Utc>) -> String {
        now.to_rfc3339_opts(SecondsFormat::Secs, true)
    }

    /// Current time in a configured location
    pub fn current_time_location(&self, location: &str) -> DateServerResult<String> {
        self.current_time_location_at(location, Utc::now())
    }

    pub fn current_time_location_at(
        &self,
        location: &str,
        now: DateTime<Utc>,
    ) -> DateServerResult<String> {
        let entry = self.locations.resolve(location)?;
        Ok(now
            .with_timezone(entry.timezone())
            .format(DATETIME_FORMAT)
            .to_string())
    }

    /// One `Name (Region/City)` line per configured location
    pub fn list_locations(&self) -> String {
        let lines: Vec<String> = self
            .locations
            .list()
            .map(|entry| entry.to_string())
            .collect();

        format!("Available locations:\n{}", lines.join("\n"))
    }

    /// Self-describing reply for a location that is not configured
    pub fn unknown_location_message(&self, location: &str) -> String {
        let samples: Vec<&str> = self
            .locations
            .list()
            .take(LOCATION_SAMPLE_SIZE)
            .map(|entry| entry.name().as_str())
            .collect();

        format!(
            "Unknown location: '{location}'. \
             Some available locations: {}. \
             Call list_available_locations to see all {} configured locations. \
             To add a custom location, set the {LOCATIONS_ENV_VAR} environment variable \
             to comma-separated Name=Region/City pairs, \
             e.g. {LOCATIONS_ENV_VAR}=\"{location}=Europe/Berlin\", and restart the server.",
            samples.join(", "),
            self.locations.len(),
        )
    }
}

impl Default for DateServer {
    fn default() -> Self {
        Self::new(LocationRegistry::default())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Offset, TimeZone};

    use super::*;
    use crate::core::error::DateServerError;

    fn fixed_instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 12, 30, 45).unwrap()
    }

    #[test]
    fn test_current_time_utc_has_zero_offset() {
        let server = DateServer::default();

        assert_eq!(
            server.current_time_utc_at(fixed_instant()),
            "2024-03-15T12:30:45Z"
        );
        assert!(server.current_time_utc().ends_with('Z'));
    }

    #[test]
    fn test_current_time_location_at() {
        let server = DateServer::default();
        let now = fixed_instant();

        assert_eq!(
            server.current_time_location_at("tokyo", now).unwrap(),
            "2024-03-15T21:30:45+09:00"
        );
        // New York is on daylight time by mid-March
        assert_eq!(
            server.current_time_location_at("New York", now).unwrap(),
            "2024-03-15T08:30:45-04:00"
        );
        assert_eq!(
            server.current_time_location_at("MUMBAI", now).unwrap(),
            "2024-03-15T18:00:45+05:30"
        );
    }

    #[test]
    fn test_current_time_location_unknown() {
        let server = DateServer::default();
        let result = server.current_time_location("Nowhereland");

        assert!(matches!(
            result,
            Err(DateServerError::UnknownLocation { .. })
        ));
    }

    #[test]
    fn test_local_operations_share_the_local_date() {
        let server = DateServer::default();
        let now = fixed_instant();

        let current = server.current_time_at(now);
        assert!(current.starts_with(&server.iso_date_at(now)));
        assert_eq!(current.len(), "2024-03-15T12:30:45+00:00".len());

        let day = server.day_name_at(now);
        assert!(
            ["Thursday", "Friday", "Saturday"].contains(&day.as_str()),
            "unexpected day {day}"
        );
    }

    #[test]
    fn test_iso_date_is_stable_within_a_day() {
        let server = DateServer::default();
        let now = fixed_instant();

        assert_eq!(server.iso_date_at(now), server.iso_date_at(now));

        let first = server.iso_date();
        let second = server.iso_date();
        // Only differs if the test straddles local midnight
        if first != second {
            assert!(first < second);
        }
    }

    #[test]
    fn test_local_time_matches_local_location() {
        let now = fixed_instant();
        let local_offset = now.with_timezone(&Local).offset().fix();

        // Any tzdb zone observing the process's offset at this instant works as "local"
        let local_zone = chrono_tz::TZ_VARIANTS
            .iter()
            .find(|tz| now.with_timezone(*tz).offset().fix() == local_offset)
            .expect("tzdb covers every real UTC offset");

        let registry = LocationRegistry::with_overrides(Some(
            format!("Here={}", local_zone.name()).as_str(),
        ));
        let server = DateServer::new(registry);

        assert_eq!(
            server.current_time_at(now),
            server.current_time_location_at("here", now).unwrap()
        );
    }

    #[test]
    fn test_list_locations() {
        let server = DateServer::new(LocationRegistry::with_overrides(Some(
            "Kathmandu=Asia/Kathmandu",
        )));
        let listing = server.list_locations();

        assert!(listing.starts_with("Available locations:\n"));
        assert!(listing.contains("Tokyo (Asia/Tokyo)"));
        assert!(listing.contains("Kathmandu (Asia/Kathmandu)"));
        assert_eq!(listing.lines().count(), 1 + server.locations().len());
    }

    #[test]
    fn test_unknown_location_message() {
        let server = DateServer::default();
        let message = server.unknown_location_message("Nowhereland");

        assert!(message.contains("Nowhereland"));
        assert!(message.contains("Amsterdam"));
        assert!(message.contains(LOCATIONS_ENV_VAR));
        assert!(message.contains("list_available_locations"));
        // Samples are capped
        assert!(!message.contains("Tokyo"));
    }
}
