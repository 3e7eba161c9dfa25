//! File access for the Hiko compiler front-end.
//!
//! - [`FileReader`]: random-access reads of one file on disk. Lazily opened,
//!   serialized by a single mutex, safe to share between threads.
//! - [`MemoryFile`]: the same read contract over bytes already in memory.
//! - [`SourceFile`]: closed union of the two, so callers match on the
//!   source kind instead of dispatching through a trait object.
//! - [`load_source`]: materializes a [`SourceBuffer`](hk_lexer_core::SourceBuffer)
//!   from any `SourceFile`.
//!
//! # Tracing
//!
//! - `RUST_LOG=hk_io=debug`: open, close and load events.
//! - `RUST_LOG=hk_io=trace`: every read.

mod error;
mod file_reader;
mod load;
mod source_file;

pub use error::{IoError, LoadError};
pub use file_reader::FileReader;
pub use load::{load_source, LoadOptions};
pub use source_file::{MemoryFile, SourceFile};
