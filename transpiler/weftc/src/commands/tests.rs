use std::path::Path;

use pretty_assertions::assert_eq;

use super::output_path;

#[test]
fn output_path_swaps_extension_for_js() {
    assert_eq!(output_path(Path::new("page.weft")), Path::new("page.js"));
}

#[test]
fn output_path_keeps_parent_directories() {
    assert_eq!(
        output_path(Path::new("src/styles/page.weft")),
        Path::new("src/styles/page.js")
    );
}

#[test]
fn output_path_handles_extensionless_input() {
    assert_eq!(output_path(Path::new("page")), Path::new("page.js"));
}
