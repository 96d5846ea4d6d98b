//! Date parsing and locale-aware date formatting.

use chrono::DateTime;
use chrono::Datelike;
use chrono::FixedOffset;
use chrono::NaiveDate;
use chrono::NaiveDateTime;
use chrono::Offset;
use chrono::Timelike;
use chrono::Utc;

use super::FormatOptions;
use super::Locale;
use crate::model::Value;

const THAI_MONTHS: [&str; 12] = [
    "ม.ค.", "ก.พ.", "มี.ค.", "เม.ย.", "พ.ค.", "มิ.ย.", "ก.ค.", "ส.ค.", "ก.ย.", "ต.ค.", "พ.ย.", "ธ.ค.",
];

const ENGLISH_MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Offset between the Gregorian and Buddhist-era calendars.
pub const BUDDHIST_ERA_OFFSET: i32 = 543;

const NAIVE_DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M"];

/// Which parts of a timestamp to display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DateProfile {
    /// Day, month and year.
    #[default]
    Date,
    /// Day, month, year, hours and minutes.
    DateTime,
}

/// Parse a timestamp string.
///
/// Accepts RFC 3339, `YYYY-MM-DD HH:MM:SS` (assumed UTC) and plain
/// `YYYY-MM-DD` (midnight UTC).
pub fn parse_datetime(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Parse a calendar date.
///
/// Plain dates are taken as-is; timestamps keep the date in their own offset.
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.date_naive());
    }
    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
        .map(|naive| naive.date())
}

/// Calendar-correct age in whole years on `today`.
///
/// The birthday counts only once its month and day have been reached.
pub fn calculate_age(birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age
}

/// Format a date in the given locale.
pub fn format_naive_date(date: NaiveDate, locale: Locale) -> String {
    let month = date.month0() as usize;
    match locale {
        Locale::Th => format!(
            "{} {} {}",
            date.day(),
            THAI_MONTHS[month],
            date.year() + BUDDHIST_ERA_OFFSET
        ),
        Locale::En => format!("{} {} {}", date.day(), ENGLISH_MONTHS[month], date.year()),
    }
}

/// Format a value as a date or date-time.
///
/// Returns `None` for null values. Strings that cannot be parsed are returned
/// unchanged so bad data stays visible.
pub fn format_date(value: &Value, profile: DateProfile, options: &FormatOptions) -> Option<String> {
    let offset = FixedOffset::east_opt(options.utc_offset_minutes * 60).unwrap_or(Utc.fix());

    let (date, time) = match value {
        Value::Null => return None,
        Value::Date(date) => (*date, None),
        Value::DateTime(dt) => {
            let local = dt.with_timezone(&offset);
            (local.date_naive(), Some((local.hour(), local.minute())))
        }
        Value::String(s) => {
            if let Ok(date) = NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d") {
                (date, None)
            } else if let Some(dt) = parse_datetime(s) {
                let local = dt.with_timezone(&offset);
                (local.date_naive(), Some((local.hour(), local.minute())))
            } else {
                return Some(s.clone());
            }
        }
        other => return Some(other.display()),
    };

    let mut out = format_naive_date(date, options.locale);
    if profile == DateProfile::DateTime {
        let (hour, minute) = time.unwrap_or((0, 0));
        out.push_str(&format!(" {:02}:{:02}", hour, minute));
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_thai_date_uses_buddhist_year() {
        let options = FormatOptions::default();
        let out = format_date(&Value::from("2024-01-15"), DateProfile::Date, &options);
        assert_eq!(out.as_deref(), Some("15 ม.ค. 2567"));
    }

    #[test]
    fn test_english_datetime_applies_offset() {
        let options = FormatOptions::default().with_locale(Locale::En);
        let out = format_date(
            &Value::from("2024-01-15T20:30:00Z"),
            DateProfile::DateTime,
            &options,
        );
        assert_eq!(out.as_deref(), Some("16 Jan 2024 03:30"));
    }

    #[test]
    fn test_unparseable_string_is_kept() {
        let options = FormatOptions::default();
        let out = format_date(&Value::from("soon"), DateProfile::Date, &options);
        assert_eq!(out.as_deref(), Some("soon"));
        assert_eq!(format_date(&Value::Null, DateProfile::Date, &options), None);
    }

    #[test]
    fn test_age_before_and_after_birthday() {
        let birth = date(2000, 6, 15);
        assert_eq!(calculate_age(birth, date(2020, 6, 14)), 19);
        assert_eq!(calculate_age(birth, date(2020, 6, 15)), 20);
        assert_eq!(calculate_age(birth, date(2020, 12, 1)), 20);
    }

    #[test]
    fn test_parse_date_variants() {
        assert_eq!(parse_date("2001-02-03"), Some(date(2001, 2, 3)));
        assert_eq!(parse_date("2001-02-03T23:00:00+07:00"), Some(date(2001, 2, 3)));
        assert_eq!(parse_date("2001-02-03 10:00:00"), Some(date(2001, 2, 3)));
        assert_eq!(parse_date("03/02/2001"), None);
    }
}
