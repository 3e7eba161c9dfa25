//! Sentinel-terminated source buffer.
//!
//! The buffer guarantees a `'\0'` sentinel after the source content, so the
//! cursor detects EOF without explicit bounds checks. The total buffer size
//! is rounded up to the next 64-byte boundary, with at least
//! [`MIN_PADDING`] zero bytes so that lookahead past the sentinel stays in
//! bounds.
//!
//! # Encoding Detection
//!
//! During construction the buffer records encoding issues:
//! - UTF-8 BOM at the start
//! - Interior null bytes
//!
//! These are informational. The tokenizer rejects both as unexpected
//! characters when it reaches them; the driver reports them up front.

use hk_ir::PathId;

use crate::Cursor;

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// Minimum number of zero bytes after the source: the sentinel itself plus
/// room for the cursor's two-character lookahead.
const MIN_PADDING: usize = 4;

/// Error when building a [`SourceBuffer`] from raw bytes.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SourceError {
    /// The bytes are not valid UTF-8.
    #[error("source is not valid UTF-8 (first invalid byte at offset {offset})")]
    InvalidUtf8 { offset: usize },
    /// The source does not fit in `u32` offsets.
    #[error("source is {len} bytes, larger than the {} byte limit", u32::MAX)]
    TooLarge { len: usize },
}

/// Sentinel-terminated source buffer for one file.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00, padding_zeros...]
///  ^                ^     ^
///  0                |     rounded up to 64-byte boundary
///              source_len (sentinel)
/// ```
///
/// The buffer is immutable once built.
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// `[source..., '\0' sentinel, '\0' padding...]`.
    buf: String,
    /// Length of the actual source content (excludes sentinel and padding).
    source_len: u32,
    /// File this content was loaded from.
    path: PathId,
    /// Encoding issues detected during construction.
    encoding_issues: Vec<EncodingIssue>,
}

/// Encoding issue detected during source buffer construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncodingIssue {
    pub kind: EncodingIssueKind,
    /// Byte position in the source where the issue was found.
    pub pos: u32,
    /// Byte length of the problematic sequence.
    pub len: u32,
}

/// Kind of encoding issue detected in a source buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EncodingIssueKind {
    /// UTF-8 BOM (`0xEF 0xBB 0xBF`) at start.
    Utf8Bom,
    /// Null byte (U+0000) in source content.
    InteriorNull,
}

impl SourceBuffer {
    /// Create a buffer for in-memory text, attributed to [`PathId::MEMORY`].
    ///
    /// # Panics
    /// Panics if `source` is larger than `u32::MAX` bytes.
    pub fn new(source: &str) -> Self {
        Self::with_path(PathId::MEMORY, source)
    }

    /// Create a buffer for `source`, attributed to `path`.
    ///
    /// # Panics
    /// Panics if `source` is larger than `u32::MAX` bytes.
    /// Use [`from_utf8`](Self::from_utf8) for fallible construction.
    pub fn with_path(path: PathId, source: &str) -> Self {
        Self::from_string(path, source.to_owned()).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Create a buffer from bytes read off disk, validating UTF-8.
    ///
    /// Takes ownership of `bytes` so valid input is not copied.
    pub fn from_utf8(path: PathId, bytes: Vec<u8>) -> Result<Self, SourceError> {
        let text = String::from_utf8(bytes).map_err(|e| SourceError::InvalidUtf8 {
            offset: e.utf8_error().valid_up_to(),
        })?;
        Self::from_string(path, text)
    }

    fn from_string(path: PathId, mut buf: String) -> Result<Self, SourceError> {
        let source_len = buf.len();
        let source_len_u32 =
            u32::try_from(source_len).map_err(|_| SourceError::TooLarge { len: source_len })?;

        let mut encoding_issues = Vec::new();
        detect_encoding_issues(buf.as_bytes(), &mut encoding_issues);

        // Round up to the next 64-byte boundary, keeping at least MIN_PADDING zeros.
        let padded_len = (source_len + MIN_PADDING + CACHE_LINE - 1) & !(CACHE_LINE - 1);
        buf.extend(std::iter::repeat('\0').take(padded_len - source_len));

        Ok(Self {
            buf,
            source_len: source_len_u32,
            path,
            encoding_issues,
        })
    }

    /// Returns the source text (without sentinel or padding).
    pub fn as_str(&self) -> &str {
        &self.buf[..self.source_len as usize]
    }

    /// Returns the source bytes (without sentinel or padding).
    pub fn as_bytes(&self) -> &[u8] {
        self.as_str().as_bytes()
    }

    /// Returns the full buffer including sentinel and padding.
    ///
    /// The byte at index [`len()`](Self::len) is the sentinel (`0x00`).
    pub fn as_sentinel_bytes(&self) -> &[u8] {
        self.buf.as_bytes()
    }

    /// Create a [`Cursor`] positioned at the first character.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len, self.path)
    }

    /// File this buffer's content belongs to.
    pub fn path(&self) -> PathId {
        self.path
    }

    /// Length of the source content in bytes (excludes sentinel and padding).
    pub fn len(&self) -> u32 {
        self.source_len
    }

    /// Returns `true` if the source content is empty.
    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }

    /// Encoding issues detected during construction.
    pub fn encoding_issues(&self) -> &[EncodingIssue] {
        &self.encoding_issues
    }
}

/// Detect BOM and interior null byte issues in source bytes.
fn detect_encoding_issues(source: &[u8], issues: &mut Vec<EncodingIssue>) {
    if source.starts_with(&[0xEF, 0xBB, 0xBF]) {
        issues.push(EncodingIssue {
            kind: EncodingIssueKind::Utf8Bom,
            pos: 0,
            len: 3,
        });
    }
    detect_interior_nulls(source, issues);
}

/// Detect null bytes (U+0000) within the source content.
fn detect_interior_nulls(source: &[u8], issues: &mut Vec<EncodingIssue>) {
    let mut offset = 0;
    while let Some(pos) = memchr::memchr(0, &source[offset..]) {
        let absolute = offset + pos;
        if let Ok(p) = u32::try_from(absolute) {
            issues.push(EncodingIssue {
                kind: EncodingIssueKind::InteriorNull,
                pos: p,
                len: 1,
            });
        }
        offset = absolute + 1;
    }
}
