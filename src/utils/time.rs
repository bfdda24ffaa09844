//! Time utilities: parsing API timestamps, week boundaries, hour conversion.

use chrono::{DateTime, Datelike, Duration, Local, NaiveDateTime, TimeZone};
use serde::{Deserialize, Deserializer};

/// Formats accepted for timestamps without an offset (the API emits these).
const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Parse an ISO-8601 timestamp into local time.
///
/// Timestamps carrying an offset are converted, naive ones are taken as
/// local wall-clock time. Returns `None` when the text is not a timestamp.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Local>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Local));
    }

    let naive = NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())?;

    Some(naive_to_local(naive))
}

/// Resolve a naive wall-clock time in the local zone.
///
/// Ambiguous times (clocks turned back) take the earlier instant. A time
/// inside a DST gap moves forward in 30 minute steps to the first wall-clock
/// time that exists, so midnight on a day starting at 01:00 becomes 01:00.
pub fn naive_to_local(naive: NaiveDateTime) -> DateTime<Local> {
    (0..=GAP_STEPS)
        .find_map(|step| {
            Local
                .from_local_datetime(&(naive + Duration::minutes(30 * step)))
                .earliest()
        })
        .unwrap_or_else(|| naive.and_utc().with_timezone(&Local))
}

/// Longest DST gap searched, in 30 minute steps.
const GAP_STEPS: i64 = 6;

/// Most recent Sunday at local midnight (today if `now` is a Sunday).
pub fn week_start(now: DateTime<Local>) -> DateTime<Local> {
    let days_since_sunday = now.weekday().num_days_from_sunday() as i64;
    let sunday = now.date_naive() - Duration::days(days_since_sunday);
    naive_to_local(sunday.and_time(chrono::NaiveTime::MIN))
}

/// Duration expressed in fractional hours.
pub fn hours_between(start: DateTime<Local>, end: DateTime<Local>) -> f64 {
    (end - start).num_milliseconds() as f64 / 3_600_000.0
}

/// serde helper: optional timestamp, unparseable values become `None`.
pub fn deserialize_optional_timestamp<'de, D>(
    deserializer: D,
) -> Result<Option<DateTime<Local>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_timestamp))
}
