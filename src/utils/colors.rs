/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";

/// Green for a win, red for a loss, plain for a draw or open result.
pub fn color_for_result(own: i32, other: i32, completed: bool) -> &'static str {
    if !completed {
        GREY
    } else if own > other {
        GREEN
    } else if own < other {
        RED
    } else {
        RESET
    }
}
