//! Materialize a [`SourceBuffer`] from a [`SourceFile`].

use hk_lexer_core::SourceBuffer;
use tracing::debug;

use crate::{LoadError, SourceFile};

/// Tuning for [`load_source`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadOptions {
    chunk_size: usize,
}

impl LoadOptions {
    pub const DEFAULT_CHUNK_SIZE: usize = 64 * 1024;

    /// Bytes requested per read. Zero is raised to one.
    #[must_use]
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }
}

impl Default for LoadOptions {
    fn default() -> Self {
        LoadOptions {
            chunk_size: Self::DEFAULT_CHUNK_SIZE,
        }
    }
}

/// Read `file` from offset zero until a read returns nothing, then validate
/// the bytes as UTF-8 source.
///
/// The file is left open; closing it is up to the caller.
#[tracing::instrument(level = "debug", skip_all, fields(path = ?file.path_id()))]
pub fn load_source(file: &SourceFile, options: &LoadOptions) -> Result<SourceBuffer, LoadError> {
    let mut bytes = Vec::new();
    let mut chunk = vec![0u8; options.chunk_size()];
    let mut position = 0u64;

    loop {
        let count = file.read(position, &mut chunk)?;
        if count == 0 {
            break;
        }
        bytes.extend_from_slice(&chunk[..count]);
        position += count as u64;
    }

    debug!(bytes = bytes.len(), "loaded source");

    SourceBuffer::from_utf8(file.path_id(), bytes).map_err(|source| LoadError::Source {
        path: display_path(file),
        source,
    })
}

fn display_path(file: &SourceFile) -> std::path::PathBuf {
    match file {
        SourceFile::Memory(_) => std::path::PathBuf::from("<memory>"),
        SourceFile::Disk(reader) => reader.path(),
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
