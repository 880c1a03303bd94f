//! The `emit` command: transpile to stdout.

use super::transpile_path;

/// Transpile `path` and print the generated JavaScript.
pub fn emit_file(path: &str) {
    print!("{}", transpile_path(path));
}
