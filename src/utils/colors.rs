//! ANSI color helper utilities for terminal output.
use crate::utils::formatting::{PLACEHOLDER, ViolationCell};

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Wrap `value` in `color`, leaving empty values untouched.
pub fn paint(value: &str, color: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    format!("{color}{value}{RESET}")
}

/// Present → green, absent → red.
pub fn color_for_presence(present: bool) -> &'static str {
    if present { GREEN } else { RED }
}

/// Emphasized counts are bold red, zero is grey.
pub fn colorize_violations(cell: &ViolationCell) -> String {
    if cell.emphasized {
        format!("{RED}{BOLD}{}{RESET}", cell.text)
    } else {
        format!("{GREY}{}{RESET}", cell.text)
    }
}

/// Greys out unassigned core-time slots.
pub fn colorize_slot(value: &str) -> String {
    if value.trim().is_empty() || value == PLACEHOLDER {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

/// Remove ANSI escape sequences (used to measure and to write plain output).
pub fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            for c in chars.by_ref() {
                if c.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }
        out.push(c);
    }
    out
}
