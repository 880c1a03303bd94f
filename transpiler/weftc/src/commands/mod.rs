//! Command handlers for the Weft CLI.
//!
//! Each submodule implements one command. Shared helpers (`read_file`,
//! `transpile_path`, `output_path`) live in the module root.

mod build;
mod check;
mod emit;

pub use build::{build_file, BuildOptions};
pub use check::check_file;
pub use emit::emit_file;

use std::path::{Path, PathBuf};
use std::process;

use crate::reporting;

/// Read a source file, exiting with a diagnostic if it cannot be read.
fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) => {
            reporting::report_failure(&format!("cannot read {path}: {err}"));
            process::exit(1);
        }
    }
}

/// Transpile a file, exiting with a rendered diagnostic on rejection.
fn transpile_path(path: &str) -> String {
    let source = read_file(path);
    match weft_transpile::transpile(path, &source) {
        Ok(output) => output,
        Err(err) => {
            reporting::report_error(&err);
            process::exit(1);
        }
    }
}

/// Default output path: the input with its extension replaced by `.js`.
pub(crate) fn output_path(input: &Path) -> PathBuf {
    input.with_extension("js")
}

#[cfg(test)]
mod tests;
