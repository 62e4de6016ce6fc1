//! Timestamp and timezone helpers shared by the analyzer and the generator.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::errors::ConfigError;

/// Convert epoch milliseconds to a UTC date-time.
///
/// Returns `None` for values chrono cannot represent; callers skip those records.
pub fn utc_from_millis(millis: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis)
}

/// Parse an IANA timezone name such as `"Europe/Berlin"` or `"UTC"`.
pub fn parse_timezone(name: &str) -> Result<Tz, ConfigError> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| ConfigError::InvalidTimezone {
            name: name.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_zones() {
        assert_eq!(parse_timezone("UTC").unwrap(), Tz::UTC);
        assert_eq!(
            parse_timezone(" Europe/Berlin ").unwrap(),
            Tz::Europe__Berlin
        );
    }

    #[test]
    fn rejects_unknown_zone() {
        let err = parse_timezone("Mars/Olympus").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTimezone { .. }));
    }

    #[test]
    fn millis_round_trip_through_chrono() {
        let dt = utc_from_millis(1_700_000_000_000).unwrap();
        assert_eq!(dt.timestamp_millis(), 1_700_000_000_000);
        assert!(utc_from_millis(i64::MAX).is_none());
    }
}
