//! Source locations.
//!
//! A `Location` names a single point in a source file: the file's
//! [`PathId`], a 1-based line and column, and the 0-based byte offset.
//! Columns count characters, not bytes.

use std::fmt;

use crate::PathId;

/// A point in a source file.
///
/// Layout: 16 bytes total (four `u32` fields).
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Location {
    pub path: PathId,
    /// 1-based line number.
    pub line: u32,
    /// 1-based column, in characters.
    pub column: u32,
    /// 0-based byte offset from the start of the file.
    pub offset: u32,
}

impl Location {
    /// Create a new location.
    #[inline]
    pub const fn new(path: PathId, line: u32, column: u32, offset: u32) -> Self {
        Location {
            path,
            line,
            column,
            offset,
        }
    }

    /// The first character of `path`.
    #[inline]
    pub const fn start_of(path: PathId) -> Self {
        Location::new(path, 1, 1, 0)
    }
}

impl fmt::Debug for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}@{}",
            self.path.index(),
            self.line,
            self.column,
            self.offset
        )
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::Location;
    crate::static_assert_size!(Location, 16);
}
