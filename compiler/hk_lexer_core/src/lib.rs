//! Low-level scanning primitives for the Hiko lexer.
//!
//! [`SourceBuffer`] owns one file's content followed by a `'\0'` sentinel and
//! zero padding. [`Cursor`] walks it one character at a time with one (and,
//! for numeric literals, two) characters of lookahead, tracking line and
//! column as it goes. The sentinel lets the cursor report end of input by
//! returning `'\0'` forever instead of needing a separate "at end" branch.

mod cursor;
mod source_buffer;

pub use cursor::{Cursor, SENTINEL};
pub use source_buffer::{EncodingIssue, EncodingIssueKind, SourceBuffer, SourceError};
