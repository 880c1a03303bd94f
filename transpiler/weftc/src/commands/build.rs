//! The `build` command: transpile a Weft file and write the result.

use std::path::{Path, PathBuf};
use std::process;

use super::{output_path, transpile_path};
use crate::reporting;

/// Options for the `build` command.
#[derive(Clone, Debug, Default)]
pub struct BuildOptions {
    /// Output file path; defaults to the input with a `.js` extension.
    pub output: Option<PathBuf>,
}

/// Transpile `path` and write the generated JavaScript.
pub fn build_file(path: &str, options: &BuildOptions) {
    let output = transpile_path(path);
    let target = options
        .output
        .clone()
        .unwrap_or_else(|| output_path(Path::new(path)));

    tracing::debug!(path = %target.display(), "writing transpiled output");
    if let Err(err) = std::fs::write(&target, output) {
        reporting::report_failure(&format!("cannot write {}: {err}", target.display()));
        process::exit(1);
    }

    println!("OK: {path} -> {}", target.display());
}
