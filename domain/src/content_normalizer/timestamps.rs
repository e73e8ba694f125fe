use chrono::{DateTime, NaiveDate, NaiveDateTime};

const DATE_TIME_FORMAT: &str = "%A, %-d %B %Y, %-I:%M %p";
const DATE_FORMAT: &str = "%A, %-d %B %Y";

/// Formats a CMS timestamp for display. Values that are not RFC 3339,
/// ISO date-times or plain dates are returned unchanged.
pub fn format_timestamp(raw: &str) -> String {
    let raw = raw.trim();
    if let Ok(date_time) = DateTime::parse_from_rfc3339(raw) {
        return date_time.format(DATE_TIME_FORMAT).to_string();
    }
    if let Ok(date_time) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return date_time.format(DATE_TIME_FORMAT).to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format(DATE_FORMAT).to_string();
    }
    raw.to_string()
}
