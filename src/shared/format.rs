use chrono::{DateTime, Datelike, Timelike, Utc};

// Short month names as British locale data abbreviates them
const SHORT_MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sept", "Oct", "Nov", "Dec",
];

/// Format a timestamp for display next to a comment, e.g. `5 Mar 2025, 09:07`.
///
/// Day is unpadded, time is 24-hour with two-digit hour and minute.
pub fn display_timestamp(at: &DateTime<Utc>) -> String {
    format!(
        "{} {} {}, {:02}:{:02}",
        at.day(),
        SHORT_MONTHS[at.month0() as usize],
        at.year(),
        at.hour(),
        at.minute()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_display_timestamp_pads_time_not_day() {
        let at = Utc.with_ymd_and_hms(2025, 3, 5, 9, 7, 42).unwrap();
        assert_eq!(display_timestamp(&at), "5 Mar 2025, 09:07");
    }

    #[test]
    fn test_display_timestamp_is_24_hour() {
        let at = Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 0).unwrap();
        assert_eq!(display_timestamp(&at), "31 Dec 2024, 23:59");
    }

    #[test]
    fn test_display_timestamp_september() {
        let at = Utc.with_ymd_and_hms(2026, 9, 1, 0, 0, 0).unwrap();
        assert_eq!(display_timestamp(&at), "1 Sept 2026, 00:00");
    }
}
