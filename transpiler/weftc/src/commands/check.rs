//! The `check` command: transpile and report, write nothing.

use super::transpile_path;

/// Transpile `path` for validation only.
///
/// Rejections are rendered (and the process exited) inside
/// `transpile_path`; reaching the end means the input was accepted.
pub fn check_file(path: &str) {
    let output = transpile_path(path);
    let lines = output.lines().count();
    println!("OK: {path} ({lines} lines of output)");
}
