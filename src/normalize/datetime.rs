//! Date-time parsing against a list of accepted formats

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// An accepted date-time format
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateTimeFormat {
    /// RFC 3339 with offset, fractional seconds optional (up to nanoseconds)
    Rfc3339,
    /// A `chrono` strftime pattern
    Pattern {
        pattern: String,
        /// Values without a zone are read as UTC
        has_time_zone: bool,
    },
}

impl DateTimeFormat {
    /// Create a pattern format
    pub fn pattern(pattern: impl Into<String>, has_time_zone: bool) -> Self {
        Self::Pattern {
            pattern: pattern.into(),
            has_time_zone,
        }
    }

    /// Parse a value with this format
    pub fn parse(&self, value: &str) -> Option<DateTime<Utc>> {
        match self {
            DateTimeFormat::Rfc3339 => DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|dt| dt.with_timezone(&Utc)),
            DateTimeFormat::Pattern {
                pattern,
                has_time_zone: true,
            } => DateTime::parse_from_str(value, pattern)
                .ok()
                .map(|dt| dt.with_timezone(&Utc)),
            DateTimeFormat::Pattern {
                pattern,
                has_time_zone: false,
            } => NaiveDateTime::parse_from_str(value, pattern)
                .ok()
                .or_else(|| {
                    NaiveDate::parse_from_str(value, pattern)
                        .ok()
                        .and_then(|date| date.and_hms_opt(0, 0, 0))
                })
                .map(|naive| naive.and_utc()),
        }
    }
}

/// Formats PagerDuty emits for timestamps and dates
pub fn default_date_time_formats() -> Vec<DateTimeFormat> {
    vec![
        DateTimeFormat::Rfc3339,
        DateTimeFormat::pattern("%Y-%m-%dT%H:%M:%S%.3f%z", true),
        DateTimeFormat::pattern("%Y-%m-%d", false),
    ]
}

/// Parse a value with the first format that accepts it
pub fn parse_date_time(value: &str, formats: &[DateTimeFormat]) -> Option<DateTime<Utc>> {
    formats.iter().find_map(|format| format.parse(value))
}
