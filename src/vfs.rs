//! Read-only virtual filesystem abstraction.
//!
//! Everything downstream of workspace construction — overlays, the
//! type-check pipeline, symbol queries — reads source through this trait
//! rather than the OS filesystem, so a tree extracted from a VCS archive zip
//! and a tree synthesized in memory look identical to consumers.
//!
//! # Paths
//!
//! All paths are rooted, `/`-separated strings (`/src/runtime/proc.go`).
//! No normalization is performed: lookups are exact string matches, the same
//! contract the standard-library classifier uses for import paths.
//!
//! # Thread Safety
//!
//! Implementations must be `Send + Sync`; workspace builds read from many
//! threads concurrently and all provided implementations are immutable (or
//! internally locked) after construction.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::error::{FsError, FsResult};

// =============================================================================
// Path helpers
// =============================================================================

/// Whether `path` is a well-formed rooted path for this crate.
pub fn is_rooted(path: &str) -> bool {
    path.starts_with('/')
}

/// The parent directory of a rooted path (`/src/runtime/proc.go` →
/// `/src/runtime`; top-level entries map to `/`).
pub fn parent(path: &str) -> &str {
    match path.rfind('/') {
        Some(0) | None => "/",
        Some(idx) => &path[..idx],
    }
}

/// The final component of a rooted path.
pub fn base_name(path: &str) -> &str {
    match path.rfind('/') {
        Some(idx) => &path[idx + 1..],
        None => path,
    }
}

/// Whether `dir` is an ancestor directory of `path` (or `path` itself lives
/// directly in it). `/` is an ancestor of every rooted path.
pub fn is_ancestor(dir: &str, path: &str) -> bool {
    if dir == "/" {
        return is_rooted(path) && path.len() > 1;
    }
    path.len() > dir.len() && path.starts_with(dir) && path.as_bytes()[dir.len()] == b'/'
}

// =============================================================================
// Entry types
// =============================================================================

/// The kind of a filesystem entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    /// A regular file with byte content.
    File,
    /// A directory.
    Dir,
}

/// A single entry in a directory listing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DirEntry {
    /// The entry's name within its directory (no slashes).
    pub name: String,
    /// Whether the entry is a file or directory.
    pub kind: FileKind,
}

impl DirEntry {
    /// Create a file entry.
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: FileKind::File,
        }
    }

    /// Create a directory entry.
    pub fn dir(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: FileKind::Dir,
        }
    }
}

/// Result of a `stat` probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileStat {
    /// Whether the path is a file or directory.
    pub kind: FileKind,
    /// Content length in bytes; zero for directories.
    pub size: u64,
}

// =============================================================================
// FileSystem Trait
// =============================================================================

/// A read-only hierarchical filesystem.
///
/// This is the seam the whole crate is built around: archive-extracted trees
/// implement it, [`OverlayFs`](crate::OverlayFs) decorates any implementation
/// of it, and the build pipeline consumes it without knowing which it got.
///
/// Implementations must keep non-existence ([`FsError::NotFound`]) distinct
/// from other failures; overlays and import resolution branch on that
/// difference.
pub trait FileSystem: Send + Sync {
    /// Read the full content of the file at `path`.
    fn read(&self, path: &str) -> FsResult<Vec<u8>>;

    /// List the entries of the directory at `path`.
    ///
    /// Entries are returned in lexicographic name order.
    fn read_dir(&self, path: &str) -> FsResult<Vec<DirEntry>>;

    /// Probe `path` for existence and kind.
    fn stat(&self, path: &str) -> FsResult<FileStat>;

    /// Whether `path` exists at all.
    ///
    /// Errors other than non-existence are treated as "exists" — the path
    /// is there, it just could not be inspected.
    fn exists(&self, path: &str) -> bool {
        match self.stat(path) {
            Ok(_) => true,
            Err(err) => !err.is_not_found(),
        }
    }
}

impl<T: FileSystem + ?Sized> FileSystem for Arc<T> {
    fn read(&self, path: &str) -> FsResult<Vec<u8>> {
        (**self).read(path)
    }

    fn read_dir(&self, path: &str) -> FsResult<Vec<DirEntry>> {
        (**self).read_dir(path)
    }

    fn stat(&self, path: &str) -> FsResult<FileStat> {
        (**self).stat(path)
    }
}

// =============================================================================
// MemoryFs - Map-based Implementation
// =============================================================================

/// A map-backed in-memory filesystem.
///
/// This is how archive-extracted source trees are held: each extracted file
/// is inserted under its rooted path, and directories are derived from the
/// inserted paths rather than stored explicitly.
///
/// # Example
///
/// ```
/// use go_overlay::{FileSystem, MemoryFs};
///
/// let mut fs = MemoryFs::new();
/// fs.insert("/src/fmt/print.go", "package fmt\n");
/// fs.insert("/src/fmt/scan.go", "package fmt\n");
///
/// assert!(fs.read("/src/fmt/print.go").is_ok());
/// assert_eq!(fs.read_dir("/src/fmt").unwrap().len(), 2);
/// ```
#[derive(Default, Clone)]
pub struct MemoryFs {
    files: FxHashMap<String, Arc<[u8]>>,
}

impl MemoryFs {
    /// Create a new empty filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a file with string content under a rooted path.
    pub fn insert(&mut self, path: impl Into<String>, content: impl AsRef<str>) {
        self.insert_bytes(path, content.as_ref().as_bytes().to_vec());
    }

    /// Insert a file with binary content under a rooted path.
    pub fn insert_bytes(&mut self, path: impl Into<String>, content: impl Into<Vec<u8>>) {
        let path = path.into();
        debug_assert!(is_rooted(&path), "MemoryFs paths must be rooted: {path}");
        self.files.insert(path, content.into().into());
    }

    /// Whether a file exists at exactly `path`.
    pub fn contains(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    /// Remove a file, returning its content if present.
    pub fn remove(&mut self, path: &str) -> Option<Arc<[u8]>> {
        self.files.remove(path)
    }

    /// The number of files held.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether no files are held.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Iterate over all rooted file paths.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    /// Whether `path` is a (derived) directory: an ancestor of at least one
    /// file, or the root itself.
    fn is_dir(&self, path: &str) -> bool {
        path == "/" || self.files.keys().any(|p| is_ancestor(path, p))
    }
}

impl FileSystem for MemoryFs {
    fn read(&self, path: &str) -> FsResult<Vec<u8>> {
        match self.files.get(path) {
            Some(content) => Ok(content.to_vec()),
            None if self.is_dir(path) => Err(FsError::IsDirectory(path.to_string())),
            None => Err(FsError::NotFound(path.to_string())),
        }
    }

    fn read_dir(&self, path: &str) -> FsResult<Vec<DirEntry>> {
        if self.files.contains_key(path) {
            return Err(FsError::NotADirectory(path.to_string()));
        }
        if !self.is_dir(path) {
            return Err(FsError::NotFound(path.to_string()));
        }

        // Derive immediate children from the flat path map.
        let mut entries: Vec<DirEntry> = Vec::new();
        let mut seen_dirs: Vec<&str> = Vec::new();
        for p in self.files.keys() {
            if !is_ancestor(path, p) {
                continue;
            }
            let rest = if path == "/" { &p[1..] } else { &p[path.len() + 1..] };
            match rest.find('/') {
                None => entries.push(DirEntry::file(rest)),
                Some(idx) => {
                    let child = &rest[..idx];
                    if !seen_dirs.contains(&child) {
                        seen_dirs.push(child);
                        entries.push(DirEntry::dir(child));
                    }
                }
            }
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn stat(&self, path: &str) -> FsResult<FileStat> {
        if let Some(content) = self.files.get(path) {
            return Ok(FileStat {
                kind: FileKind::File,
                size: content.len() as u64,
            });
        }
        if self.is_dir(path) {
            return Ok(FileStat {
                kind: FileKind::Dir,
                size: 0,
            });
        }
        Err(FsError::NotFound(path.to_string()))
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_fs() -> MemoryFs {
        let mut fs = MemoryFs::new();
        fs.insert("/src/fmt/print.go", "package fmt\n");
        fs.insert("/src/fmt/scan.go", "package fmt\n");
        fs.insert("/src/errors/errors.go", "package errors\n");
        fs.insert("/VERSION", "go1.11");
        fs
    }

    #[test]
    fn test_parent() {
        assert_eq!(parent("/src/fmt/print.go"), "/src/fmt");
        assert_eq!(parent("/VERSION"), "/");
        assert_eq!(parent("/"), "/");
    }

    #[test]
    fn test_base_name() {
        assert_eq!(base_name("/src/fmt/print.go"), "print.go");
        assert_eq!(base_name("/VERSION"), "VERSION");
    }

    #[test]
    fn test_is_ancestor() {
        assert!(is_ancestor("/src", "/src/fmt/print.go"));
        assert!(is_ancestor("/", "/VERSION"));
        assert!(!is_ancestor("/src/fmt", "/src/fmtx/print.go"));
        assert!(!is_ancestor("/src/fmt/print.go", "/src/fmt/print.go"));
    }

    #[test]
    fn test_read_exact_path_only() {
        let fs = sample_fs();
        assert_eq!(fs.read("/VERSION").unwrap(), b"go1.11");
        assert!(fs.read("/version").unwrap_err().is_not_found());
    }

    #[test]
    fn test_read_directory_fails() {
        let fs = sample_fs();
        assert!(matches!(
            fs.read("/src/fmt"),
            Err(FsError::IsDirectory(_))
        ));
    }

    #[test]
    fn test_read_dir_derived() {
        let fs = sample_fs();
        let entries = fs.read_dir("/src").unwrap();
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["errors", "fmt"]);
        assert!(entries.iter().all(|e| e.kind == FileKind::Dir));
    }

    #[test]
    fn test_read_dir_root() {
        let fs = sample_fs();
        let entries = fs.read_dir("/").unwrap();
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["VERSION", "src"]);
    }

    #[test]
    fn test_read_dir_on_file() {
        let fs = sample_fs();
        assert!(matches!(
            fs.read_dir("/VERSION"),
            Err(FsError::NotADirectory(_))
        ));
    }

    #[test]
    fn test_stat() {
        let fs = sample_fs();
        let stat = fs.stat("/VERSION").unwrap();
        assert_eq!(stat.kind, FileKind::File);
        assert_eq!(stat.size, 6);
        assert_eq!(fs.stat("/src/fmt").unwrap().kind, FileKind::Dir);
        assert!(fs.stat("/src/nope").unwrap_err().is_not_found());
    }

    #[test]
    fn test_exists() {
        let fs = sample_fs();
        assert!(fs.exists("/src/fmt/print.go"));
        assert!(fs.exists("/src/fmt"));
        assert!(!fs.exists("/src/fmt/"));
    }
}
