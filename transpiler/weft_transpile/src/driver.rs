//! The transpile driver: scanner dispatch interleaved with region stack
//! transitions.
//!
//! Each step classifies the next character in strict priority order:
//! string open, comment open, whitespace, child-region open,
//! current-region close, literal character. The checks are a straight-line
//! sequence of guards so the priority order stays auditable. The first
//! match wins and the result is routed to the current region, which may
//! push or pop the stack.

use weft_scanner::{Scanner, SourceText};

use crate::error::TranspileError;
use crate::region::{Region, RegionKind, Token};

/// Transpile Weft source into host JavaScript.
///
/// `file` only labels errors; no I/O happens here. Each call builds its
/// own scanner and region stack, so concurrent calls on different inputs
/// are independent.
///
/// # Errors
///
/// Rejects the input on an unterminated string literal, a raw newline in a
/// single-line string, or a region still open at end of input.
pub fn transpile(file: &str, source: &str) -> Result<String, TranspileError> {
    let text = SourceText::new(source);
    Driver::new(file, Scanner::new(text.cursor())).run()
}

struct Driver<'a> {
    file: &'a str,
    scanner: Scanner<'a>,
    /// Region stack: Root sits in slot 0 and is never popped; the last
    /// element is the current region. Parents own children only by
    /// adjacency, so closing a region is a pop.
    stack: Vec<Region>,
}

impl<'a> Driver<'a> {
    fn new(file: &'a str, scanner: Scanner<'a>) -> Self {
        Self {
            file,
            scanner,
            stack: vec![Region::root()],
        }
    }

    fn run(mut self) -> Result<String, TranspileError> {
        while !self.scanner.is_eof() {
            self.step()?;
        }

        if self.stack.len() > 1 {
            // The deepest live region is the one the user left open.
            let open = &self.stack[self.stack.len() - 1];
            return Err(TranspileError::unterminated_region(
                self.file,
                self.scanner.line(),
                open.kind.identity(),
                open.kind.close_delimiter(),
                open.opened_on,
            ));
        }

        Ok(self
            .stack
            .pop()
            .map_or_else(String::new, |root| root.content))
    }

    fn step(&mut self) -> Result<(), TranspileError> {
        // 1. String literal?
        if let Some(quote) = self.scanner.string_open() {
            let text = match self.scanner.scan_string(quote) {
                Ok(text) => text,
                Err(err) => return Err(TranspileError::from_scan(self.file, err)),
            };
            self.current_mut().push_token(Token::Str { quote, text });
            return Ok(());
        }

        // 2. Comment? A lone `/` matches neither opener and falls through
        // to the literal default.
        if let Some(kind) = self.scanner.comment_open() {
            let text = self.scanner.scan_comment(kind);
            self.current_mut().push_token(Token::Comment(text));
            return Ok(());
        }

        // 3. Whitespace?
        if self.scanner.whitespace_next() {
            let byte = self.scanner.take_whitespace();
            self.current_mut().push_token(Token::Whitespace(byte));
            return Ok(());
        }

        // 4. Child region open?
        let kind = self.current_kind();
        match kind {
            RegionKind::Root | RegionKind::Host if self.at_sheet_open() => {
                let line = self.scanner.line();
                self.scanner.advance();
                self.scanner.advance();
                tracing::debug!(line, "open stylesheet expression");
                self.stack.push(Region::sheet(line));
                return Ok(());
            }
            RegionKind::Sheet if self.scanner.current() == b'[' => {
                let line = self.scanner.line();
                self.scanner.advance();
                tracing::debug!(line, "open host expression");
                self.stack.push(Region::host(line));
                return Ok(());
            }
            _ => {}
        }

        // 5. Current region close? Root has no close delimiter and only
        // ends at EOF.
        match kind {
            RegionKind::Sheet if self.at_sheet_close() => {
                self.scanner.advance();
                self.scanner.advance();
                self.close_current();
                return Ok(());
            }
            RegionKind::Host if self.scanner.current() == b']' => {
                self.scanner.advance();
                if self.current_mut().bracket_depth > 0 {
                    // A bracket belonging to the embedded expression, not
                    // the region delimiter.
                    let current = self.current_mut();
                    current.bracket_depth -= 1;
                    current.content.push(']');
                } else {
                    self.close_current();
                }
                return Ok(());
            }
            _ => {}
        }

        // 6. Literal character.
        let ch = self.scanner.take_char();
        self.current_mut().push_token(Token::Literal(ch));
        Ok(())
    }

    fn at_sheet_open(&self) -> bool {
        self.scanner.current() == b'<' && self.scanner.peek() == b'<'
    }

    fn at_sheet_close(&self) -> bool {
        self.scanner.current() == b'>' && self.scanner.peek() == b'>'
    }

    fn current_kind(&self) -> RegionKind {
        self.stack.last().map_or(RegionKind::Root, |region| region.kind)
    }

    fn current_mut(&mut self) -> &mut Region {
        // Root in slot 0 is never popped, so the stack is never empty.
        let index = self.stack.len() - 1;
        &mut self.stack[index]
    }

    /// Pop the current region, serialize it, and let its parent fold the
    /// result into its own content.
    fn close_current(&mut self) {
        debug_assert!(
            self.stack.len() > 1,
            "close_current requires an open child region"
        );
        let Some(child) = self.stack.pop() else { return };
        tracing::debug!(
            line = self.scanner.line(),
            region = child.kind.identity(),
            "close region"
        );
        let parent = self.current_mut();
        match child.kind {
            RegionKind::Sheet => parent.fold_sheet(&child),
            RegionKind::Host => parent.fold_host(&child),
            RegionKind::Root => unreachable!("root region is never closed"),
        }
    }
}
