//! The closed set of places source text can come from.

use std::sync::Arc;

use hk_ir::PathId;

use crate::{FileReader, IoError};

/// Source bytes that already live in memory.
///
/// Follows the [`FileReader::read`] contract so callers treat both kinds
/// alike. There is no handle, so `open` and `close` never fail.
#[derive(Clone, Debug)]
pub struct MemoryFile {
    path: PathId,
    bytes: Arc<[u8]>,
}

impl MemoryFile {
    pub fn new(path: PathId, bytes: impl Into<Arc<[u8]>>) -> Self {
        MemoryFile {
            path,
            bytes: bytes.into(),
        }
    }

    /// In-memory text attributed to [`PathId::MEMORY`].
    pub fn from_text(text: &str) -> Self {
        MemoryFile::new(PathId::MEMORY, text.as_bytes())
    }

    pub fn path_id(&self) -> PathId {
        self.path
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Copy up to `buffer.len()` bytes starting at `position`.
    pub fn read(&self, position: u64, buffer: &mut [u8]) -> usize {
        let Ok(start) = usize::try_from(position) else {
            return 0;
        };
        let Some(rest) = self.bytes.get(start..) else {
            return 0;
        };
        let count = rest.len().min(buffer.len());
        buffer[..count].copy_from_slice(&rest[..count]);
        count
    }
}

/// A source of bytes for the front-end: in memory or on disk.
#[derive(Debug)]
pub enum SourceFile {
    Memory(MemoryFile),
    Disk(FileReader),
}

impl SourceFile {
    pub fn path_id(&self) -> PathId {
        match self {
            SourceFile::Memory(file) => file.path_id(),
            SourceFile::Disk(reader) => reader.path_id(),
        }
    }

    pub fn open(&self) -> Result<(), IoError> {
        match self {
            SourceFile::Memory(_) => Ok(()),
            SourceFile::Disk(reader) => reader.open(),
        }
    }

    pub fn close(&self) {
        if let SourceFile::Disk(reader) = self {
            reader.close();
        }
    }

    /// See [`FileReader::read`].
    pub fn read(&self, position: u64, buffer: &mut [u8]) -> Result<usize, IoError> {
        match self {
            SourceFile::Memory(file) => Ok(file.read(position, buffer)),
            SourceFile::Disk(reader) => reader.read(position, buffer),
        }
    }
}

impl From<MemoryFile> for SourceFile {
    fn from(file: MemoryFile) -> Self {
        SourceFile::Memory(file)
    }
}

impl From<FileReader> for SourceFile {
    fn from(reader: FileReader) -> Self {
        SourceFile::Disk(reader)
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
