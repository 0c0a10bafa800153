/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Delay is bad news (red), overtime is extra work (green).
/// Zero values are greyed.
pub fn colorize_delay(value: &str) -> String {
    colorize_non_zero(value, RED)
}

pub fn colorize_overtime(value: &str) -> String {
    colorize_non_zero(value, GREEN)
}

fn colorize_non_zero(value: &str, color: &str) -> String {
    if value.trim() == "0:00" {
        format!("{GREY}{value}{RESET}")
    } else {
        format!("{color}{value}{RESET}")
    }
}
