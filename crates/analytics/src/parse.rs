use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use std::str::FromStr;

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d-%m-%Y", "%d %b %Y", "%b %d %Y"];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%d-%m-%Y %H:%M:%S",
    "%d-%m-%Y %H:%M",
];

const TIME_FORMATS: &[&str] = &["%H:%M:%S%.f", "%H:%M", "%I:%M:%S %p", "%I:%M %p"];

/// Parses a trade date. Values carrying a time of day keep only the date.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
        .or_else(|| parse_datetime(text).map(|dt| dt.date()))
}

/// Parses an entry or exit timestamp.
///
/// Full timestamps are taken as written (offsets are normalised to UTC).
/// A bare time of day is placed on `trade_date`; a bare date means midnight.
pub fn parse_timestamp(text: &str, trade_date: NaiveDate) -> Option<NaiveDateTime> {
    parse_datetime(text)
        .or_else(|| {
            TIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveTime::parse_from_str(text, fmt).ok())
                .map(|time| trade_date.and_time(time))
        })
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
                .map(|date| date.and_time(NaiveTime::MIN))
        })
}

/// Parses a price or quantity, accepting plain and scientific notation.
pub fn parse_decimal(text: &str) -> Option<Decimal> {
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}

fn parse_datetime(text: &str) -> Option<NaiveDateTime> {
    DateTime::parse_from_rfc3339(text)
        .map(|dt| dt.naive_utc())
        .ok()
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    #[test]
    fn dates_in_common_layouts() {
        assert_eq!(parse_date("2024-03-15"), Some(day()));
        assert_eq!(parse_date("2024/03/15"), Some(day()));
        assert_eq!(parse_date("03/15/2024"), Some(day()));
        assert_eq!(parse_date("15-03-2024"), Some(day()));
        assert_eq!(parse_date("15 Mar 2024"), Some(day()));
        assert_eq!(parse_date("2024-03-15 09:30:00"), Some(day()));
        assert_eq!(parse_date("yesterday"), None);
    }

    #[test]
    fn timestamps_with_and_without_dates() {
        let full = parse_timestamp("2024-03-15 09:30:00", day()).unwrap();
        assert_eq!(full, day().and_hms_opt(9, 30, 0).unwrap());

        let bare = parse_timestamp("14:05", day()).unwrap();
        assert_eq!(bare, day().and_hms_opt(14, 5, 0).unwrap());

        let twelve_hour = parse_timestamp("02:05 PM", day()).unwrap();
        assert_eq!(twelve_hour, day().and_hms_opt(14, 5, 0).unwrap());

        let offset = parse_timestamp("2024-03-15T09:30:00+05:30", day()).unwrap();
        assert_eq!(offset, day().and_hms_opt(4, 0, 0).unwrap());

        assert_eq!(parse_timestamp("soon", day()), None);
    }

    #[test]
    fn decimals_plain_and_scientific() {
        assert_eq!(parse_decimal("101.25"), Some(dec!(101.25)));
        assert_eq!(parse_decimal("-3"), Some(dec!(-3)));
        assert_eq!(parse_decimal("1.5e2"), Some(dec!(150)));
        assert_eq!(parse_decimal("ten"), None);
    }
}
