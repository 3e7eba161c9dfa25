//! Random-access reader over one file on disk.
//!
//! The reader owns at most one OS handle. Every operation takes the same
//! mutex, so each seek-then-read pair is atomic with respect to other
//! threads sharing the reader. The handle is opened on first use and closed
//! on any seek or read failure. A closed handle stays closed; the reader
//! never retries on its own, and only the caller's next `open` or `read`
//! opens it again.

use std::fs::File;
use std::io::{self, ErrorKind, Read, Seek, SeekFrom};
use std::path::PathBuf;
use std::sync::Arc;

use hk_ir::{PathId, PathTable};
use parking_lot::Mutex;
use tracing::{debug, trace};

use crate::IoError;

/// State of the underlying OS handle.
#[derive(Debug)]
enum Handle {
    Closed,
    Open(File),
}

/// Thread-safe, lazily opened, random-access file reader.
///
/// Dropping the reader closes any open handle.
pub struct FileReader {
    paths: Arc<PathTable>,
    path: PathId,
    handle: Mutex<Handle>,
}

impl FileReader {
    /// Create a reader for `path`. Nothing is opened yet.
    pub fn new(paths: Arc<PathTable>, path: PathId) -> Self {
        FileReader {
            paths,
            path,
            handle: Mutex::new(Handle::Closed),
        }
    }

    pub fn path_id(&self) -> PathId {
        self.path
    }

    /// Filesystem path of the file this reader serves.
    pub fn path(&self) -> PathBuf {
        self.paths.display_path(self.path)
    }

    pub fn is_open(&self) -> bool {
        matches!(*self.handle.lock(), Handle::Open(_))
    }

    /// Open the file if it is not open already.
    ///
    /// On failure the reader stays closed and a later call may retry.
    pub fn open(&self) -> Result<(), IoError> {
        let mut handle = self.handle.lock();
        self.open_locked(&mut handle).map(|_| ())
    }

    /// Release the OS handle. Closing a closed reader does nothing.
    pub fn close(&self) {
        let mut handle = self.handle.lock();
        self.close_locked(&mut handle);
    }

    /// Read up to `buffer.len()` bytes starting at byte `position`.
    ///
    /// Returns the number of bytes read; fewer than requested only at end of
    /// file, and `0` when `position` is at or past the end. An empty buffer
    /// returns `0` without touching the file. A position the OS refuses to
    /// seek to is treated as end of file.
    ///
    /// Any seek or read failure closes the handle before the error is
    /// returned.
    pub fn read(&self, position: u64, buffer: &mut [u8]) -> Result<usize, IoError> {
        if buffer.is_empty() {
            return Ok(0);
        }

        let mut handle = self.handle.lock();
        let file = self.open_locked(&mut handle)?;

        if let Err(source) = seek_to(file, position) {
            self.close_locked(&mut handle);
            return Err(IoError::SeekFailed {
                path: self.path(),
                source,
            });
        }

        match fill(file, buffer) {
            Ok(count) => {
                trace!(path = ?self.path, position, requested = buffer.len(), count, "read");
                Ok(count)
            }
            Err(source) => {
                self.close_locked(&mut handle);
                Err(IoError::ReadFailed {
                    path: self.path(),
                    source,
                })
            }
        }
    }

    fn open_locked<'h>(&self, handle: &'h mut Handle) -> Result<&'h mut File, IoError> {
        match handle {
            Handle::Open(file) => Ok(file),
            Handle::Closed => {
                let path = self.path();
                let file = File::open(&path).map_err(|source| IoError::OpenFailed {
                    path: path.clone(),
                    source,
                })?;
                debug!(path = %path.display(), "opened file");
                *handle = Handle::Open(file);
                // Now open: this takes the first arm.
                self.open_locked(handle)
            }
        }
    }

    fn close_locked(&self, handle: &mut Handle) {
        if let Handle::Open(file) = std::mem::replace(handle, Handle::Closed) {
            drop(file);
            debug!(path = ?self.path, "closed file");
        }
    }
}

impl std::fmt::Debug for FileReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileReader")
            .field("path", &self.path())
            .field("open", &self.is_open())
            .finish()
    }
}

/// Seek to `position`.
///
/// A position the stream cannot represent is not an error: the stream is
/// moved to its end instead, so the following read yields nothing.
fn seek_to(file: &mut File, position: u64) -> io::Result<()> {
    match file.seek(SeekFrom::Start(position)) {
        Ok(_) => Ok(()),
        Err(err) if is_out_of_range(&err) => {
            trace!(position, error = %err, "seek out of range, moving to end of stream");
            file.seek(SeekFrom::End(0)).map(|_| ())
        }
        Err(err) => Err(err),
    }
}

fn is_out_of_range(err: &io::Error) -> bool {
    matches!(err.kind(), ErrorKind::InvalidInput | ErrorKind::UnexpectedEof)
}

/// Read until `buffer` is full or the file ends.
fn fill(file: &mut File, buffer: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buffer.len() {
        match file.read(&mut buffer[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(err) if err.kind() == ErrorKind::Interrupted => {}
            Err(err) => return Err(err),
        }
    }
    Ok(filled)
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
mod tests;
