//! Low-level scanning for Weft source text.
//!
//! Weft files are host JavaScript interleaved with embedded stylesheet
//! expressions. Before any of that nesting matters, raw characters have to
//! be classified into the three token classes that behave the same at every
//! nesting depth: comments, string literals, and whitespace. That is all
//! this crate does.
//!
//! - [`SourceText`]: sentinel-terminated buffer built from the input string.
//! - [`Cursor`]: line-tracked, copyable view with cheap lookahead.
//! - [`Scanner`]: classification and consumption of the three token classes,
//!   plus single-character consumption for everything else.
//!
//! Region nesting (stylesheet and host expressions) lives one layer up in
//! `weft_transpile`; the scanner is deliberately nesting-agnostic.

mod cursor;
mod scan_error;
mod scanner;
mod source_text;

pub use cursor::Cursor;
pub use scan_error::{ScanError, ScanErrorKind};
pub use scanner::{CommentKind, Quote, Scanner};
pub use source_text::SourceText;
