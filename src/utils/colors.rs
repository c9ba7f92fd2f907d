/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

use crate::core::availability::SpotStatus;

/// Spot color on the map:
/// available → green, reserved → red,
/// excluded by the electric filter → grey.
pub fn color_for_spot(status: &SpotStatus) -> &'static str {
    if status.reserved {
        RED
    } else if status.available {
        GREEN
    } else {
        GREY
    }
}

/// Colored rendering of a spot cell label.
pub fn colorize_spot(label: &str, status: &SpotStatus) -> String {
    format!("{}{}{}", color_for_spot(status), label, RESET)
}

/// Check-in badge color: pending check-in is a warning.
pub fn colorize_check_in(checked_in: bool, value: &str) -> String {
    if checked_in {
        format!("{GREEN}{value}{RESET}")
    } else {
        format!("{YELLOW}{value}{RESET}")
    }
}
