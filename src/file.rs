//! Disk-backed filesystem with a content cache.
//!
//! When a toolchain archive has already been unpacked to disk, [`LocalFs`]
//! exposes that directory through the [`FileSystem`] trait so it can be
//! wrapped by overlays like any in-memory tree. A type-checking pass reads
//! the same runtime sources over and over; content is cached on first read
//! and served from memory afterwards.
//!
//! # Caching Strategy
//!
//! ```text
//! LocalFs
//! ├── root: PathBuf                  (unpacked archive directory)
//! └── cache: RwLock<FxHashMap<String, Arc<[u8]>>>
//!     └── rooted path → content, filled on first read
//! ```
//!
//! The tree is treated as immutable for the lifetime of the `LocalFs` (the
//! unpacked archive is never edited in place), so cached content is never
//! invalidated.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use tracing::trace;

use crate::error::{FsError, FsResult};
use crate::vfs::{is_rooted, DirEntry, FileKind, FileStat, FileSystem};

/// A read-only view of a directory tree on disk.
///
/// # Example
///
/// ```no_run
/// use go_overlay::{FileSystem, LocalFs};
///
/// let fs = LocalFs::new("/tmp/unpacked-go1.11");
/// let version = fs.read("/VERSION")?;
/// # Ok::<(), go_overlay::FsError>(())
/// ```
pub struct LocalFs {
    root: PathBuf,
    cache: RwLock<FxHashMap<String, Arc<[u8]>>>,
}

impl LocalFs {
    /// Expose the directory at `root` as a rooted filesystem.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            cache: RwLock::new(FxHashMap::default()),
        }
    }

    /// The disk directory this filesystem is rooted at.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Number of file contents currently cached.
    pub fn cached_files(&self) -> usize {
        self.cache.read().len()
    }

    /// Resolve a rooted virtual path to a disk path, rejecting unrooted
    /// paths and `..` escapes.
    fn resolve(&self, path: &str) -> FsResult<PathBuf> {
        if !is_rooted(path) {
            return Err(FsError::AccessDenied(path.to_string()));
        }
        let mut resolved = self.root.clone();
        for component in path.split('/').filter(|c| !c.is_empty()) {
            if component == ".." || component == "." {
                return Err(FsError::AccessDenied(path.to_string()));
            }
            resolved.push(component);
        }
        Ok(resolved)
    }
}

impl FileSystem for LocalFs {
    fn read(&self, path: &str) -> FsResult<Vec<u8>> {
        if let Some(content) = self.cache.read().get(path) {
            return Ok(content.to_vec());
        }

        let disk_path = self.resolve(path)?;
        let map_err = |e| FsError::from_io(e, path);
        let metadata = fs::metadata(&disk_path).map_err(map_err)?;
        if metadata.is_dir() {
            return Err(FsError::IsDirectory(path.to_string()));
        }
        let content: Arc<[u8]> = fs::read(&disk_path).map_err(map_err)?.into();
        trace!(path, size = content.len(), "cached file content");
        self.cache
            .write()
            .insert(path.to_string(), content.clone());
        Ok(content.to_vec())
    }

    fn read_dir(&self, path: &str) -> FsResult<Vec<DirEntry>> {
        let disk_path = self.resolve(path)?;
        let map_err = |e| FsError::from_io(e, path);
        if fs::metadata(&disk_path).map_err(map_err)?.is_file() {
            return Err(FsError::NotADirectory(path.to_string()));
        }

        let mut entries = Vec::new();
        for entry in fs::read_dir(&disk_path).map_err(map_err)? {
            let entry = entry.map_err(map_err)?;
            let kind = if entry.file_type().map_err(map_err)?.is_dir() {
                FileKind::Dir
            } else {
                FileKind::File
            };
            entries.push(DirEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                kind,
            });
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn stat(&self, path: &str) -> FsResult<FileStat> {
        let disk_path = self.resolve(path)?;
        let metadata = fs::metadata(&disk_path).map_err(|e| FsError::from_io(e, path))?;
        Ok(if metadata.is_dir() {
            FileStat {
                kind: FileKind::Dir,
                size: 0,
            }
        } else {
            FileStat {
                kind: FileKind::File,
                size: metadata.len(),
            }
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
