//! Event timestamp generator.

use chrono::{DateTime, Local, NaiveDateTime};

/// ISO 8601 local date-time without offset, microsecond precision.
pub const EVENT_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Format the current local wall-clock time.
///
/// This is NOT deterministic - each call reads the system clock, which may
/// step backwards if the host clock is adjusted.
pub fn generate_timestamp_now() -> String {
    format_event_timestamp(&Local::now().naive_local())
}

pub fn format_event_timestamp(time: &NaiveDateTime) -> String {
    time.format(EVENT_TIMESTAMP_FORMAT).to_string()
}

/// Parse an event timestamp.
///
/// Accepts the generated form (fraction optional) and falls back to
/// RFC 3339, which is converted to local time.
pub fn parse_event_timestamp(s: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }

    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.with_timezone(&Local).naive_local())
}
