//! Sentinel-terminated source text for the scanner.
//!
//! The buffer guarantees a `0x00` sentinel byte after the source content,
//! letting the cursor detect end-of-input without bounds checks in the
//! common path. Total size is rounded up to the next 64-byte boundary,
//! which also provides safe zero padding for `peek()` and `peek2()` near
//! the end of the buffer.

use crate::Cursor;

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// Sentinel-terminated source text.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00, padding_zeros...]
///  ^                ^     ^
///  0                |     rounded up to 64-byte boundary
///              source_len (sentinel)
/// ```
#[derive(Clone, Debug)]
pub struct SourceText {
    /// Owned buffer: `[source_bytes..., 0x00 sentinel, 0x00 padding...]`.
    buf: Vec<u8>,
    /// Length of the actual source content (excludes sentinel and padding).
    source_len: u32,
}

impl SourceText {
    /// Copy `source` into a sentinel-terminated, zero-padded buffer.
    ///
    /// Sources larger than `u32::MAX` bytes (~4 GiB) saturate `source_len`;
    /// callers are expected to reject such inputs upstream.
    pub fn new(source: &str) -> Self {
        let bytes = source.as_bytes();

        // Round up to the next 64-byte boundary (minimum: source + sentinel).
        let padded_len = (bytes.len() + 1 + CACHE_LINE - 1) & !(CACHE_LINE - 1);

        // Zero-filled allocation: the sentinel and padding are already 0x00.
        let mut buf = vec![0u8; padded_len];
        buf[..bytes.len()].copy_from_slice(bytes);

        let source_len = u32::try_from(bytes.len()).unwrap_or(u32::MAX);

        Self { buf, source_len }
    }

    /// A cursor at position 0, line 1.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len, 1)
    }

    /// A cursor at position 0 with a caller-supplied starting line, for
    /// inputs that are fragments of a larger document.
    pub fn cursor_at_line(&self, start_line: u32) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len, start_line)
    }

    /// The source content as a string slice (no sentinel, no padding).
    pub fn as_str(&self) -> &str {
        self.cursor().slice(0, self.source_len)
    }

    /// Byte length of the source content.
    pub fn len(&self) -> u32 {
        self.source_len
    }

    /// Whether the source is empty.
    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }
}
