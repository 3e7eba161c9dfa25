//! Character cursor over a sentinel-terminated buffer.
//!
//! The cursor advances through the buffer one character at a time and keeps
//! the line and column of the current character up to date. EOF is detected
//! when the position reaches the source length; from then on [`Cursor::peek`]
//! returns [`SENTINEL`] on every call and [`Cursor::advance`] does not move.
//!
//! # Interior Null Bytes
//!
//! Source text may itself contain `'\0'`. The cursor distinguishes an
//! interior null (`offset < source_len`) from the sentinel
//! (`offset >= source_len`) through [`Cursor::is_eof`].

use hk_ir::{Location, PathId};

/// Character returned by the cursor at logical end of input.
pub const SENTINEL: char = '\0';

/// Stateful single-owner cursor over a [`SourceBuffer`](crate::SourceBuffer).
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor).
///
/// # Invariant
///
/// `buf` is sentinel-terminated: `buf[source_len..]` is all `'\0'` and at
/// least four bytes long. `pos` never exceeds `source_len` and always sits
/// on a character boundary.
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// Sentinel-terminated buffer (source + sentinel + padding).
    buf: &'a str,
    /// Byte offset of the current character.
    pos: u32,
    /// Length of actual source content (excludes sentinel and padding).
    source_len: u32,
    path: PathId,
    /// 1-based line of the current character.
    line: u32,
    /// 1-based column (in characters) of the current character.
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the first character of a sentinel-terminated buffer.
    ///
    /// # Contract
    ///
    /// `buf[source_len..]` must be all `'\0'`. This is guaranteed by
    /// `SourceBuffer` construction.
    pub(crate) fn new(buf: &'a str, source_len: u32, path: PathId) -> Self {
        debug_assert!(
            (source_len as usize) < buf.len(),
            "sentinel must be within buffer bounds"
        );
        debug_assert!(
            buf.as_bytes()[source_len as usize] == 0,
            "sentinel byte must be 0x00"
        );
        Self {
            buf,
            pos: 0,
            source_len,
            path,
            line: 1,
            column: 1,
        }
    }

    /// Decode the character starting at byte `index`.
    ///
    /// ASCII (and the sentinel/padding region) is read straight from the
    /// byte; multi-byte characters are decoded from the text.
    #[inline]
    fn char_at(&self, index: usize) -> char {
        let byte = self.buf.as_bytes()[index];
        if byte.is_ascii() {
            char::from(byte)
        } else {
            self.buf[index..].chars().next().unwrap_or(SENTINEL)
        }
    }

    /// Returns the current character, or [`SENTINEL`] at end of input.
    ///
    /// Idempotent: repeated calls without [`advance`](Self::advance) return
    /// the same character, and at end of input every call returns the
    /// sentinel.
    #[inline]
    pub fn peek(&self) -> char {
        if self.is_eof() {
            SENTINEL
        } else {
            self.char_at(self.pos as usize)
        }
    }

    /// Returns the character after the current one, or [`SENTINEL`] if that
    /// would be past the end of input.
    #[inline]
    pub fn peek_next(&self) -> char {
        if self.is_eof() {
            return SENTINEL;
        }
        let next = self.pos as usize + self.peek().len_utf8();
        if next >= self.source_len as usize {
            SENTINEL
        } else {
            self.char_at(next)
        }
    }

    /// Consume the current character and return the new current one.
    ///
    /// At end of input this does nothing and returns [`SENTINEL`].
    #[allow(
        clippy::cast_possible_truncation,
        reason = "len_utf8() is at most 4"
    )]
    pub fn advance(&mut self) -> char {
        if self.is_eof() {
            return SENTINEL;
        }
        let consumed = self.char_at(self.pos as usize);
        self.pos += consumed.len_utf8() as u32;
        if consumed == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        self.peek()
    }

    /// Returns `true` once every source character has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    /// Location of the current character.
    #[inline]
    pub fn position(&self) -> Location {
        Location::new(self.path, self.line, self.column, self.pos)
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn offset(&self) -> u32 {
        self.pos
    }

    /// Length of the source content (excludes sentinel and padding).
    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// File the cursor is reading.
    #[inline]
    pub fn path(&self) -> PathId {
        self.path
    }

    /// Extract a source substring.
    ///
    /// # Contract
    ///
    /// `start..end` must lie within the source content and on character
    /// boundaries, which holds for offsets taken from [`offset`](Self::offset).
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        debug_assert!(
            end <= self.source_len,
            "slice end {end} exceeds source length {}",
            self.source_len
        );
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        &self.buf[start as usize..end as usize]
    }

    /// Extract a source substring from `start` to the current position.
    pub fn slice_from(&self, start: u32) -> &'a str {
        self.slice(start, self.pos)
    }

    /// The one-character slice holding the sentinel, used as the text of
    /// the end-of-stream token.
    pub fn sentinel_text(&self) -> &'a str {
        let at = self.source_len as usize;
        &self.buf[at..=at]
    }

    /// Advance while `pred` returns `true` for the current character.
    ///
    /// Stops at end of input regardless of what `pred` says about the
    /// sentinel.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        while !self.is_eof() && pred(self.peek()) {
            self.advance();
        }
    }

    /// Advance past whitespace: spaces, tabs, carriage returns and newlines.
    #[inline]
    pub fn eat_whitespace(&mut self) {
        self.eat_while(is_whitespace);
    }
}

/// Whitespace between tokens. Newlines are ordinary whitespace.
#[inline]
fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}
