/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const MAGENTA: &str = "\x1b[35m";
pub const CYAN: &str = "\x1b[36m";

/// Terminal stand-in for the chart's categorical palette.
const IDENTITY_PALETTE: [&str; 6] = [BLUE, YELLOW, RED, CYAN, GREEN, MAGENTA];

/// Color for the n-th identity along the timeline axis.
pub fn color_for_identity(index: usize) -> &'static str {
    IDENTITY_PALETTE[index % IDENTITY_PALETTE.len()]
}
