use chrono::{DateTime, FixedOffset, Offset, Utc};

/// Get the current Unix timestamp (milliseconds)
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Resolve a UTC offset given in minutes, falling back to UTC when out of range
fn fixed_offset(offset_minutes: i32) -> FixedOffset {
    offset_minutes
        .checked_mul(60)
        .and_then(FixedOffset::east_opt)
        .unwrap_or_else(|| Utc.fix())
}

fn to_local(millis: i64, offset_minutes: i32) -> Option<DateTime<FixedOffset>> {
    DateTime::from_timestamp_millis(millis).map(|dt| dt.with_timezone(&fixed_offset(offset_minutes)))
}

/// Format a Unix timestamp (milliseconds) as wall-clock time `HH:MM:SS`
pub fn timestamp_to_clock_time(millis: i64, offset_minutes: i32) -> String {
    to_local(millis, offset_minutes)
        .map(|dt| dt.format("%H:%M:%S").to_string())
        .unwrap_or_default()
}

/// Format a Unix timestamp (milliseconds) as RFC 3339
pub fn timestamp_to_rfc3339(millis: i64, offset_minutes: i32) -> String {
    to_local(millis, offset_minutes)
        .map(|dt| dt.to_rfc3339())
        .unwrap_or_default()
}
