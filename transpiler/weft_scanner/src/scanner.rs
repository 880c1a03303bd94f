//! Token classification over the cursor.
//!
//! The scanner recognizes the token classes that behave identically at
//! every nesting depth: comments, string literals, and whitespace.
//! Everything else is surfaced one character at a time; region delimiters
//! (`<<`, `>>`, `[`, `]`) are the caller's concern, checked through the
//! lookahead passthroughs.
//!
//! Classification (`string_open`, `comment_open`, `whitespace_next`) never
//! moves the cursor; the matching `scan_*`/`take_*` call consumes the token
//! and returns its text as a borrowed slice of the source.

use crate::cursor::Cursor;
use crate::scan_error::ScanError;

/// String delimiter kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Quote {
    /// `'...'`
    Single,
    /// `"..."`
    Double,
    /// `` `...` ``, the only kind that may span lines.
    Backtick,
}

impl Quote {
    /// The delimiter byte for this quote kind.
    pub fn byte(self) -> u8 {
        match self {
            Quote::Single => b'\'',
            Quote::Double => b'"',
            Quote::Backtick => b'`',
        }
    }

    /// Whether raw newlines may appear inside a string with this delimiter.
    pub fn allows_newlines(self) -> bool {
        matches!(self, Quote::Backtick)
    }

    fn from_byte(byte: u8) -> Option<Quote> {
        match byte {
            b'\'' => Some(Quote::Single),
            b'"' => Some(Quote::Double),
            b'`' => Some(Quote::Backtick),
            _ => None,
        }
    }
}

/// Comment flavors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommentKind {
    /// `// ...` through end of line (newline excluded).
    Line,
    /// `/* ... */` inclusive; no nesting.
    Block,
}

/// Classifying scanner over a [`Cursor`].
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Scanner<'a> {
    /// Create a scanner from a cursor.
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self { cursor }
    }

    /// Byte at the current position (`0` at EOF).
    #[inline]
    pub fn current(&self) -> u8 {
        self.cursor.current()
    }

    /// Byte one position ahead.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.cursor.peek()
    }

    /// Consume one byte.
    #[inline]
    pub fn advance(&mut self) {
        self.cursor.advance();
    }

    /// Whether every source byte has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.cursor.is_eof()
    }

    /// 1-indexed line of the next unconsumed byte.
    #[inline]
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the quote kind if the next character opens a string literal.
    pub fn string_open(&self) -> Option<Quote> {
        Quote::from_byte(self.cursor.current())
    }

    /// Returns the comment flavor if the next two characters open a comment.
    ///
    /// A `/` followed by anything other than `/` or `*` is not a comment;
    /// callers fall through and treat it as an ordinary character.
    pub fn comment_open(&self) -> Option<CommentKind> {
        if self.cursor.current() != b'/' {
            return None;
        }
        match self.cursor.peek() {
            b'/' => Some(CommentKind::Line),
            b'*' => Some(CommentKind::Block),
            _ => None,
        }
    }

    /// Returns `true` if the next byte is whitespace.
    ///
    /// One byte per token; run collapsing is a region policy, not a scanner
    /// policy.
    pub fn whitespace_next(&self) -> bool {
        self.cursor.current().is_ascii_whitespace()
    }

    /// Consume one whitespace byte and return it.
    ///
    /// # Contract
    ///
    /// The cursor must be on a whitespace byte (`whitespace_next()` true).
    pub fn take_whitespace(&mut self) -> u8 {
        let byte = self.cursor.current();
        self.cursor.advance();
        byte
    }

    /// Consume one full UTF-8 character and return it as a slice.
    pub fn take_char(&mut self) -> &'a str {
        let start = self.cursor.pos();
        self.cursor.advance_char();
        self.cursor.slice_from(start)
    }

    /// Scan a comment token.
    ///
    /// Line comments stop before the trailing newline; block comments
    /// include the closing `*/`. A block comment still open at EOF is
    /// consumed through the end of input.
    ///
    /// # Contract
    ///
    /// The cursor must be on the `/` of a detected comment opener.
    pub fn scan_comment(&mut self, kind: CommentKind) -> &'a str {
        let start = self.cursor.pos();
        self.cursor.advance(); // '/'
        self.cursor.advance(); // '/' or '*'
        match kind {
            CommentKind::Line => {
                self.cursor.skip_to(b'\n');
            }
            CommentKind::Block => self.skip_block_comment(),
        }
        self.cursor.slice_from(start)
    }

    fn skip_block_comment(&mut self) {
        loop {
            match self.cursor.skip_to(b'*') {
                0 => break,
                b'\n' => self.cursor.advance(),
                _ => {
                    self.cursor.advance(); // '*'
                    if self.cursor.current() == b'/' {
                        self.cursor.advance();
                        break;
                    }
                }
            }
        }
    }

    /// Scan a string literal, returning the whole token including both
    /// delimiters.
    ///
    /// A `\` plus exactly one following character is copied through with no
    /// interpretation. A raw newline is fatal unless the delimiter permits
    /// multi-line content; running out of input before the closing
    /// delimiter is always fatal.
    ///
    /// # Contract
    ///
    /// The cursor must be on the opening quote.
    pub fn scan_string(&mut self, quote: Quote) -> Result<&'a str, ScanError> {
        let start = self.cursor.pos();
        let delim = quote.byte();
        self.cursor.advance(); // opening quote
        loop {
            match self.cursor.skip_to2(delim, b'\\') {
                0 => return Err(ScanError::unexpected_eof(self.cursor.line())),
                b'\\' => {
                    self.cursor.advance();
                    if !self.cursor.is_eof() {
                        self.cursor.advance_char();
                    }
                }
                b'\n' => {
                    if quote.allows_newlines() {
                        self.cursor.advance();
                    } else {
                        return Err(ScanError::multi_line_string(self.cursor.line()));
                    }
                }
                _ => {
                    // the closing delimiter
                    self.cursor.advance();
                    return Ok(self.cursor.slice_from(start));
                }
            }
        }
    }
}
