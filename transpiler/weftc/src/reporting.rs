//! Terminal rendering for CLI failures.
//!
//! Human-readable output on stderr, with ANSI color when stderr is a TTY.

use std::io::IsTerminal;

use weft_transpile::TranspileError;

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

/// Whether stderr supports color.
fn use_colors() -> bool {
    std::io::stderr().is_terminal()
}

/// Render a transpile rejection.
pub fn report_error(err: &TranspileError) {
    if use_colors() {
        eprintln!(
            "{}error{}: {}{err}{}",
            colors::ERROR,
            colors::RESET,
            colors::BOLD,
            colors::RESET
        );
    } else {
        eprintln!("error: {err}");
    }
}

/// Render a CLI-level failure (I/O, bad arguments).
pub fn report_failure(message: &str) {
    if use_colors() {
        eprintln!("{}error{}: {message}", colors::ERROR, colors::RESET);
    } else {
        eprintln!("error: {message}");
    }
}
