use chrono::{DateTime, TimeZone};
use std::fmt::Display;

pub const MESSAGE_PREFIX: &str = "L'heure actuelle est : ";

/// `en-US` style date and time, e.g. `10/16/2026, 3:04:05 PM`.
///
/// Pinned so the output does not depend on the host's locale settings.
pub const TIMESTAMP_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Formats `now` as wall-clock time in its own timezone.
pub fn format_timestamp<Tz>(now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    now.format(TIMESTAMP_FORMAT).to_string()
}

pub fn current_time_message<Tz>(now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!("{MESSAGE_PREFIX}{}", format_timestamp(now))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, NaiveDateTime, Timelike, Utc};

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<FixedOffset> {
        FixedOffset::east_opt(2 * 3600)
            .unwrap()
            .with_ymd_and_hms(y, mo, d, h, mi, s)
            .unwrap()
    }

    #[test]
    fn test_afternoon_timestamp() {
        assert_eq!(
            format_timestamp(&at(2026, 10, 16, 15, 4, 5)),
            "10/16/2026, 3:04:05 PM"
        );
    }

    #[test]
    fn test_midnight_and_noon() {
        assert_eq!(
            format_timestamp(&at(2024, 1, 2, 0, 0, 0)),
            "1/2/2024, 12:00:00 AM"
        );
        assert_eq!(
            format_timestamp(&at(2024, 12, 31, 12, 30, 59)),
            "12/31/2024, 12:30:59 PM"
        );
    }

    #[test]
    fn test_uses_local_wall_time_of_the_zone() {
        // 13:00 UTC is 15:00 at +02:00
        let utc = Utc.with_ymd_and_hms(2026, 10, 16, 13, 0, 0).unwrap();
        let shifted = utc.with_timezone(&FixedOffset::east_opt(2 * 3600).unwrap());

        assert_eq!(format_timestamp(&utc), "10/16/2026, 1:00:00 PM");
        assert_eq!(format_timestamp(&shifted), "10/16/2026, 3:00:00 PM");
    }

    #[test]
    fn test_meridiem_separated_by_ascii_space() {
        let rendered = format_timestamp(&at(2026, 10, 16, 15, 4, 5));

        assert!(rendered.ends_with(":05 PM"));
        assert!(!rendered.contains('\u{202F}'));
    }

    #[test]
    fn test_message_sentence() {
        let message = current_time_message(&at(2026, 10, 16, 9, 15, 0));
        assert_eq!(message, "L'heure actuelle est : 10/16/2026, 9:15:00 AM");
    }

    #[test]
    fn test_formatted_timestamp_parses_back() {
        let now = Utc::now();
        let rendered = format_timestamp(&now);

        let parsed = NaiveDateTime::parse_from_str(&rendered, TIMESTAMP_FORMAT)
            .expect("Timestamp should parse with its own format");
        assert_eq!(parsed, now.naive_utc().with_nanosecond(0).unwrap());
    }
}
