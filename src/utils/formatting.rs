//! Display formatting for the compliance columns of the dashboard.

use serde::Serialize;

/// Day-of-week labels, indexed 0 (Sunday) to 6 (Saturday).
pub const DAYS_OF_WEEK: [&str; 7] = ["日", "月", "火", "水", "木", "金", "土"];

/// Period labels, index 0 is "unset".
pub const PERIODS: [&str; 7] = ["", "1限", "2限", "3限", "4限", "5限", "6限"];

/// Shown in place of an unassigned core-time slot.
pub const PLACEHOLDER: &str = "-";

/// Format a core-time slot as `"月曜2限"`.
///
/// Day 0 and period 0 both mean "unset" (as do out-of-range values) and
/// yield [`PLACEHOLDER`].
pub fn format_core_time(day: u8, period: u8) -> String {
    if day == 0 || period == 0 {
        return PLACEHOLDER.to_string();
    }

    match (DAYS_OF_WEEK.get(day as usize), PERIODS.get(period as usize)) {
        (Some(d), Some(p)) => format!("{d}曜{p}"),
        _ => PLACEHOLDER.to_string(),
    }
}

/// Violation counter cell: zero is neutral, anything above is emphasized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViolationCell {
    pub count: u32,
    pub text: String,
    pub emphasized: bool,
}

pub fn format_violations(count: u32) -> ViolationCell {
    ViolationCell {
        count,
        text: format!("{count}回"),
        emphasized: count > 0,
    }
}

/// Drop control characters (ESC, BEL, newlines...) from server-provided text
/// before it reaches the terminal.
pub fn sanitize_cell(s: &str) -> String {
    s.chars().filter(|c| !c.is_control()).collect()
}

/// Weekly hours rounded to one decimal place.
pub fn format_hours(hours: f64) -> String {
    format!("{:.1}時間", hours)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn control_characters_are_dropped() {
        assert_eq!(sanitize_cell("Eve\x1b]0;x\x07\x1b[2J"), "Eve]0;x[2J");
        assert_eq!(sanitize_cell("a\tb\r\nc"), "abc");
        assert_eq!(sanitize_cell("佐藤 花子"), "佐藤 花子");
    }

    #[test]
    fn unset_slots_use_the_placeholder() {
        for n in 0..=6 {
            assert_eq!(format_core_time(0, n), PLACEHOLDER);
            assert_eq!(format_core_time(n, 0), PLACEHOLDER);
        }
    }

    #[test]
    fn assigned_slots_are_localized() {
        for day in 1..=6 {
            for period in 1..=6 {
                let s = format_core_time(day, period);
                assert_ne!(s, PLACEHOLDER);
                assert!(!s.is_empty());
                assert!(s.ends_with('限'));
            }
        }
        assert_eq!(format_core_time(1, 2), "月曜2限");
        assert_eq!(format_core_time(6, 6), "土曜6限");
    }

    #[test]
    fn out_of_range_slots_use_the_placeholder() {
        assert_eq!(format_core_time(7, 1), PLACEHOLDER);
        assert_eq!(format_core_time(1, 7), PLACEHOLDER);
        assert_eq!(format_core_time(255, 255), PLACEHOLDER);
    }

    #[test]
    fn violations_emphasize_positive_counts() {
        let zero = format_violations(0);
        assert_eq!(zero.text, "0回");
        assert!(!zero.emphasized);

        let two = format_violations(2);
        assert_eq!(two.text, "2回");
        assert!(two.emphasized);
    }

    #[test]
    fn hours_have_one_decimal() {
        assert_eq!(format_hours(0.0), "0.0時間");
        assert_eq!(format_hours(3.0), "3.0時間");
        assert_eq!(format_hours(2.96), "3.0時間");
        assert_eq!(format_hours(12.345), "12.3時間");
    }
}
