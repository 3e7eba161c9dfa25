//! I/O and loading errors.

use std::io;
use std::path::{Path, PathBuf};

use hk_lexer_core::SourceError;

/// Failure of a file operation.
///
/// Every variant names the file and keeps the OS error as its source. The
/// reader has already closed its handle by the time one of these reaches the
/// caller.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("failed to open file stream: {}", path.display())]
    OpenFailed { path: PathBuf, source: io::Error },
    #[error("failed to seek in file stream: {}", path.display())]
    SeekFailed { path: PathBuf, source: io::Error },
    #[error("failed to read from file stream: {}", path.display())]
    ReadFailed { path: PathBuf, source: io::Error },
}

impl IoError {
    /// The file the operation was on.
    pub fn path(&self) -> &Path {
        match self {
            IoError::OpenFailed { path, .. }
            | IoError::SeekFailed { path, .. }
            | IoError::ReadFailed { path, .. } => path,
        }
    }
}

/// Failure to turn a file into a source buffer.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error(transparent)]
    Io(#[from] IoError),
    #[error("invalid source file {}", path.display())]
    Source {
        path: PathBuf,
        source: SourceError,
    },
}
