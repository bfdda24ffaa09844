use crate::models::attendance::AttendanceLog;
use crate::utils::time::{hours_between, week_start};
use chrono::{DateTime, Local};

/// Hours attended during the current week.
///
/// Only closed sessions count: both timestamps present, entry at or after
/// the week start (Sunday 00:00 local) and a positive duration. Anything
/// else contributes nothing; malformed sessions are skipped, never errors.
/// Order of `logs` is irrelevant.
pub fn weekly_hours(logs: &[AttendanceLog], now: DateTime<Local>) -> f64 {
    let start = week_start(now);

    logs.iter()
        .filter_map(AttendanceLog::closed_session)
        .filter(|(entry, _)| *entry >= start)
        .map(|(entry, exit)| hours_between(entry, exit))
        .filter(|hours| *hours > 0.0)
        .sum()
}
