//! Public error type for the transpiler.
//!
//! One structured failure shape: the source identifier, the 1-indexed line
//! where scanning stopped, and a kind whose `Display` is the message. Every
//! kind is fatal; there is no partial-result mode and no resynchronization.

use thiserror::Error;
use weft_scanner::{ScanError, ScanErrorKind};

/// Why a transpile call rejected its input.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// A string literal was still open at end of input.
    #[error("unexpected end of file")]
    UnexpectedEof,
    /// A raw newline inside a `'` or `"` delimited string.
    #[error("unexpected multi-line string")]
    MultiLineString,
    /// A region was still open at end of input.
    #[error("unterminated {identity}: missing closing `{close}` (opened on line {opened_on})")]
    UnterminatedRegion {
        /// Human name of the region kind.
        identity: &'static str,
        /// The delimiter that would have closed it.
        close: &'static str,
        /// Line the region's opening delimiter sat on.
        opened_on: u32,
    },
}

/// A fatal transpile error.
///
/// Callers should treat any value of this type as input rejection; no
/// partial output exists when one is returned.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{file}:{line}: {kind}")]
pub struct TranspileError {
    /// Source identifier, as passed to [`transpile`](crate::transpile).
    pub file: String,
    /// 1-indexed line where the violation was detected.
    pub line: u32,
    /// What went wrong.
    pub kind: ErrorKind,
}

impl TranspileError {
    /// Wrap a scanner error with the source identifier.
    #[cold]
    pub(crate) fn from_scan(file: &str, err: ScanError) -> Self {
        let kind = match err.kind {
            ScanErrorKind::UnexpectedEof => ErrorKind::UnexpectedEof,
            ScanErrorKind::MultiLineString => ErrorKind::MultiLineString,
        };
        Self {
            file: file.to_owned(),
            line: err.line,
            kind,
        }
    }

    /// A region still open when input ran out.
    #[cold]
    pub(crate) fn unterminated_region(
        file: &str,
        line: u32,
        identity: &'static str,
        close: &'static str,
        opened_on: u32,
    ) -> Self {
        Self {
            file: file.to_owned(),
            line,
            kind: ErrorKind::UnterminatedRegion {
                identity,
                close,
                opened_on,
            },
        }
    }
}
