use crate::{ScanError, ScanErrorKind};

#[test]
fn messages_match_kind() {
    assert_eq!(
        ScanErrorKind::UnexpectedEof.message(),
        "unexpected end of file"
    );
    assert_eq!(
        ScanErrorKind::MultiLineString.message(),
        "unexpected multi-line string"
    );
}

#[test]
fn display_includes_line() {
    let err = ScanError {
        kind: ScanErrorKind::UnexpectedEof,
        line: 3,
    };
    assert_eq!(err.to_string(), "unexpected end of file (line 3)");
}

#[test]
fn errors_compare_by_value() {
    let a = ScanError {
        kind: ScanErrorKind::MultiLineString,
        line: 2,
    };
    let b = ScanError {
        kind: ScanErrorKind::MultiLineString,
        line: 2,
    };
    assert_eq!(a, b);
}
