//! Path table: maps heavy filesystem paths to compact `PathId` handles.
//!
//! Readers, buffers and locations carry a `PathId(u32)` instead of a
//! `PathBuf`, and resolve it through the table only when they need to touch
//! the filesystem or render a diagnostic.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

/// Compact identifier for a path registered in a [`PathTable`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct PathId(u32);

impl PathId {
    /// Pre-registered id for source text that does not come from disk.
    pub const MEMORY: PathId = PathId(0);

    /// Raw index into the table.
    #[inline]
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for PathId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PathId({})", self.0)
    }
}

/// Display name of [`PathId::MEMORY`].
const MEMORY_PATH: &str = "<memory>";

/// Error when registering a path fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathTableError {
    /// More paths than fit in a `u32` index.
    Overflow { count: usize },
}

impl fmt::Display for PathTableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathTableError::Overflow { count } => write!(
                f,
                "path table exceeded capacity: {count} paths, max is {}",
                u32::MAX
            ),
        }
    }
}

impl std::error::Error for PathTableError {}

struct PathTableInner {
    map: FxHashMap<Arc<Path>, PathId>,
    paths: Vec<Arc<Path>>,
}

/// Thread-safe table of interned paths.
///
/// Interning the same path twice yields the same id. Ids are never reused or
/// invalidated, so a `PathId` stays valid for the lifetime of its table.
///
/// # Thread Safety
/// Uses a single `RwLock`; lookups take the read side. Wrap the table in an
/// `Arc` to share it between readers.
pub struct PathTable {
    inner: RwLock<PathTableInner>,
}

impl PathTable {
    /// Create a table with [`PathId::MEMORY`] pre-registered.
    pub fn new() -> Self {
        let memory: Arc<Path> = Arc::from(Path::new(MEMORY_PATH));
        let mut map = FxHashMap::default();
        map.insert(Arc::clone(&memory), PathId::MEMORY);
        Self {
            inner: RwLock::new(PathTableInner {
                map,
                paths: vec![memory],
            }),
        }
    }

    /// Register `path`, returning its id or an error on overflow.
    pub fn try_intern(&self, path: impl AsRef<Path>) -> Result<PathId, PathTableError> {
        let path = path.as_ref();

        // Fast path: already registered
        if let Some(&id) = self.inner.read().map.get(path) {
            return Ok(id);
        }

        let mut guard = self.inner.write();

        // Double-check after acquiring write lock
        if let Some(&id) = guard.map.get(path) {
            return Ok(id);
        }

        let count = guard.paths.len();
        let index = u32::try_from(count).map_err(|_| PathTableError::Overflow { count })?;
        let id = PathId(index);
        let stored: Arc<Path> = Arc::from(path);
        guard.paths.push(Arc::clone(&stored));
        guard.map.insert(stored, id);
        Ok(id)
    }

    /// Register `path`, returning its id.
    ///
    /// # Panics
    /// Panics if the table already holds `u32::MAX` paths.
    /// Use `try_intern` for fallible registration.
    pub fn intern(&self, path: impl AsRef<Path>) -> PathId {
        self.try_intern(path).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Look up the path behind `id`.
    ///
    /// Returns `None` for ids that were not produced by this table.
    pub fn resolve(&self, id: PathId) -> Option<Arc<Path>> {
        self.inner.read().paths.get(id.0 as usize).cloned()
    }

    /// Look up the path behind `id` as an owned `PathBuf`, falling back to
    /// the memory placeholder for foreign ids.
    pub fn display_path(&self, id: PathId) -> PathBuf {
        self.resolve(id)
            .map_or_else(|| PathBuf::from(MEMORY_PATH), |p| p.to_path_buf())
    }

    /// Number of registered paths, including the memory placeholder.
    pub fn len(&self) -> usize {
        self.inner.read().paths.len()
    }

    /// Always `false`: the memory placeholder is registered on construction.
    pub fn is_empty(&self) -> bool {
        self.inner.read().paths.is_empty()
    }
}

impl Default for PathTable {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PathTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathTable")
            .field("len", &self.len())
            .finish()
    }
}

crate::static_assert_size!(PathId, 4);
