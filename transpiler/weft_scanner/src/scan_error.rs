//! Scanner error type.
//!
//! String scanning is the only fallible operation at this layer. Errors
//! carry the 1-indexed line of the violation; the transpiler layer attaches
//! the source identifier when it surfaces them.

use std::fmt;

/// What went wrong while scanning a string literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScanErrorKind {
    /// Input ended before the closing quote.
    UnexpectedEof,
    /// A raw newline appeared inside a `'` or `"` delimited string.
    MultiLineString,
}

impl ScanErrorKind {
    /// The human-readable message for this kind.
    pub fn message(self) -> &'static str {
        match self {
            ScanErrorKind::UnexpectedEof => "unexpected end of file",
            ScanErrorKind::MultiLineString => "unexpected multi-line string",
        }
    }
}

/// A fatal scanning error at a specific line.
///
/// Scanning never recovers: the first violation aborts the pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ScanError {
    /// What went wrong.
    pub kind: ScanErrorKind,
    /// 1-indexed line of the violation.
    pub line: u32,
}

impl ScanError {
    /// Input ended while a string literal was still open.
    #[cold]
    pub(crate) fn unexpected_eof(line: u32) -> Self {
        Self {
            kind: ScanErrorKind::UnexpectedEof,
            line,
        }
    }

    /// A raw newline inside a single-line string delimiter.
    #[cold]
    pub(crate) fn multi_line_string(line: u32) -> Self {
        Self {
            kind: ScanErrorKind::MultiLineString,
            line,
        }
    }
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (line {})", self.kind.message(), self.line)
    }
}

impl std::error::Error for ScanError {}

#[cfg(test)]
mod tests;
