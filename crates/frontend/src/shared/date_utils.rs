/// Utilities for date and time formatting
///
/// Provides consistent timestamp rendering for chat entries
use chrono::{DateTime, Local, TimeZone, Utc};
use std::fmt::Display;

/// Format a timestamp as HH:MM
/// Example: 2024-03-15T14:02:26Z -> "14:02"
pub fn format_time<Tz>(datetime: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    datetime.format("%H:%M").to_string()
}

/// Format a timestamp as DD.MM.YYYY HH:MM:SS
/// Example: 2024-03-15T14:02:26.123Z -> "15.03.2024 14:02:26"
pub fn format_datetime<Tz>(datetime: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    datetime.format("%d.%m.%Y %H:%M:%S").to_string()
}

/// Convert a UTC timestamp to the browser's local time zone
pub fn to_local(datetime: DateTime<Utc>) -> DateTime<Local> {
    datetime.with_timezone(&Local)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-03-15T14:02:26.123Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(&sample()), "14:02");
    }

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime(&sample()), "15.03.2024 14:02:26");
    }

    #[test]
    fn test_to_local_keeps_instant() {
        let dt = sample();
        assert_eq!(to_local(dt).timestamp(), dt.timestamp());
    }
}
