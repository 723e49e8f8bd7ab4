//! Synthetic overlay filesystem.
//!
//! Archive snapshots of a toolchain's source tree lack the files that only
//! the release build process writes. [`OverlayFs`] patches such files in by
//! wrapping the archive-backed filesystem and overriding resolution for
//! specific rooted paths, while forwarding everything else — content,
//! listings, stats, and errors alike — unchanged to the wrapped tree.
//!
//! Consumers cannot tell a synthesized file from a fetched one: same path,
//! same read semantics, byte-identical content on every read.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use go_overlay::{FileSystem, MemoryFs, OverlayFs};
//!
//! let mut base = MemoryFs::new();
//! base.insert("/src/fmt/print.go", "package fmt\n");
//!
//! let fs = OverlayFs::new(Arc::new(base))
//!     .with_file("/src/generated.go", "package gen\n");
//!
//! assert_eq!(fs.read("/src/generated.go").unwrap(), b"package gen\n");
//! assert_eq!(fs.read("/src/fmt/print.go").unwrap(), b"package fmt\n");
//! ```

use std::sync::Arc;

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::error::{FsError, FsResult};
use crate::vfs::{base_name, is_ancestor, parent, DirEntry, FileKind, FileStat, FileSystem};

/// A filesystem view that overrides specific paths with owned content.
///
/// Wraps exactly one underlying [`FileSystem`] (by reference, never copied)
/// and owns the override bytes outright. Overrides are fixed at construction
/// time; the view is immutable afterwards and safe for unsynchronized
/// concurrent reads. Overlays over the same underlying filesystem share no
/// mutable state with each other.
///
/// An overridden path does not need to exist underneath — nor do its parent
/// directories; they are synthesized in listings and stats as needed.
pub struct OverlayFs {
    inner: Arc<dyn FileSystem>,
    overrides: FxHashMap<String, Arc<[u8]>>,
}

impl OverlayFs {
    /// Wrap `inner` with no overrides yet.
    pub fn new(inner: Arc<dyn FileSystem>) -> Self {
        Self {
            inner,
            overrides: FxHashMap::default(),
        }
    }

    /// Wrap `inner` overriding a single path — the common case.
    pub fn single_file(
        inner: Arc<dyn FileSystem>,
        path: impl Into<String>,
        content: impl Into<Vec<u8>>,
    ) -> Self {
        Self::new(inner).with_file_bytes(path, content)
    }

    /// Add an override with string content under a rooted path.
    pub fn with_file(self, path: impl Into<String>, content: impl AsRef<str>) -> Self {
        self.with_file_bytes(path, content.as_ref().as_bytes().to_vec())
    }

    /// Add an override with binary content under a rooted path.
    pub fn with_file_bytes(mut self, path: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        let path = path.into();
        let content: Vec<u8> = content.into();
        debug!(path, size = content.len(), "registered synthetic file");
        self.overrides.insert(path, content.into());
        self
    }

    /// Iterate over the rooted paths this overlay overrides.
    pub fn overridden_paths(&self) -> impl Iterator<Item = &str> {
        self.overrides.keys().map(String::as_str)
    }

    /// Entries that overrides contribute to a listing of `dir`: overridden
    /// files directly inside it plus synthesized intermediate directories.
    fn synthetic_entries(&self, dir: &str) -> Vec<DirEntry> {
        let mut entries: Vec<DirEntry> = Vec::new();
        for path in self.overrides.keys() {
            if parent(path) == dir {
                entries.push(DirEntry::file(base_name(path)));
            } else if is_ancestor(dir, path) {
                let rest = if dir == "/" { &path[1..] } else { &path[dir.len() + 1..] };
                let child = &rest[..rest.find('/').unwrap_or(rest.len())];
                if !entries.iter().any(|e| e.name == child) {
                    entries.push(DirEntry::dir(child));
                }
            }
        }
        entries
    }
}

impl FileSystem for OverlayFs {
    fn read(&self, path: &str) -> FsResult<Vec<u8>> {
        match self.overrides.get(path) {
            Some(content) => Ok(content.to_vec()),
            None => self.inner.read(path),
        }
    }

    fn read_dir(&self, path: &str) -> FsResult<Vec<DirEntry>> {
        // An overridden path is a regular file, whatever lies underneath.
        if self.overrides.contains_key(path) {
            return Err(FsError::NotADirectory(path.to_string()));
        }

        let synthetic = self.synthetic_entries(path);
        match self.inner.read_dir(path) {
            Ok(mut entries) => {
                for entry in synthetic {
                    if !entries.iter().any(|e| e.name == entry.name) {
                        entries.push(entry);
                    }
                }
                entries.sort_by(|a, b| a.name.cmp(&b.name));
                Ok(entries)
            }
            // A directory that exists only because an override lives in it.
            Err(err) if err.is_not_found() && !synthetic.is_empty() => {
                let mut entries = synthetic;
                entries.sort_by(|a, b| a.name.cmp(&b.name));
                Ok(entries)
            }
            Err(err) => Err(err),
        }
    }

    fn stat(&self, path: &str) -> FsResult<FileStat> {
        if let Some(content) = self.overrides.get(path) {
            return Ok(FileStat {
                kind: FileKind::File,
                size: content.len() as u64,
            });
        }
        match self.inner.stat(path) {
            Err(err)
                if err.is_not_found()
                    && self.overrides.keys().any(|p| is_ancestor(path, p)) =>
            {
                Ok(FileStat {
                    kind: FileKind::Dir,
                    size: 0,
                })
            }
            other => other,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vfs::MemoryFs;

    fn base_fs() -> Arc<MemoryFs> {
        let mut fs = MemoryFs::new();
        fs.insert("/src/fmt/print.go", "package fmt\n");
        fs.insert("/src/errors/errors.go", "package errors\n");
        Arc::new(fs)
    }

    #[test]
    fn test_override_shadows_underlying() {
        let mut fs = MemoryFs::new();
        fs.insert("/src/a.go", "original");
        let overlay = OverlayFs::single_file(Arc::new(fs), "/src/a.go", "patched");
        assert_eq!(overlay.read("/src/a.go").unwrap(), b"patched");
    }

    #[test]
    fn test_override_without_underlying_path() {
        let overlay = OverlayFs::single_file(base_fs(), "/src/gen/zz.go", "package gen\n");
        assert_eq!(overlay.read("/src/gen/zz.go").unwrap(), b"package gen\n");
    }

    #[test]
    fn test_reads_forward_unchanged() {
        let base = base_fs();
        let overlay = OverlayFs::single_file(base.clone(), "/src/gen/zz.go", "x");
        assert_eq!(
            overlay.read("/src/fmt/print.go").unwrap(),
            base.read("/src/fmt/print.go").unwrap()
        );
    }

    #[test]
    fn test_errors_forward_unchanged() {
        let base = base_fs();
        let overlay = OverlayFs::single_file(base.clone(), "/src/gen/zz.go", "x");
        let direct = base.read("/src/missing.go").unwrap_err();
        let through = overlay.read("/src/missing.go").unwrap_err();
        assert_eq!(direct.to_string(), through.to_string());
        assert!(through.is_not_found());
    }

    #[test]
    fn test_repeated_reads_byte_identical() {
        let overlay = OverlayFs::single_file(base_fs(), "/src/gen/zz.go", "package gen\n");
        let first = overlay.read("/src/gen/zz.go").unwrap();
        let second = overlay.read("/src/gen/zz.go").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_listing_merges_override() {
        let overlay = OverlayFs::single_file(base_fs(), "/src/fmt/zz.go", "x");
        let names: Vec<String> = overlay
            .read_dir("/src/fmt")
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, ["print.go", "zz.go"]);
    }

    #[test]
    fn test_listing_synthesizes_missing_directories() {
        let overlay = OverlayFs::single_file(base_fs(), "/src/gen/deep/zz.go", "x");
        let entries = overlay.read_dir("/src/gen").unwrap();
        assert_eq!(entries, vec![DirEntry::dir("deep")]);
        let entries = overlay.read_dir("/src/gen/deep").unwrap();
        assert_eq!(entries, vec![DirEntry::file("zz.go")]);
    }

    #[test]
    fn test_listing_includes_synthetic_dir_in_existing_parent() {
        let overlay = OverlayFs::single_file(base_fs(), "/src/gen/zz.go", "x");
        let names: Vec<String> = overlay
            .read_dir("/src")
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, ["errors", "fmt", "gen"]);
    }

    #[test]
    fn test_read_dir_on_overridden_path() {
        // Same answer a real file gives, even when nothing exists
        // underneath: the synthesized entry must not be distinguishable.
        let overlay = OverlayFs::single_file(base_fs(), "/src/gen/zz.go", "x");
        assert!(matches!(
            overlay.read_dir("/src/gen/zz.go"),
            Err(FsError::NotADirectory(_))
        ));

        let base = base_fs();
        let direct = base.read_dir("/src/fmt/print.go").unwrap_err();
        let shadowing = OverlayFs::single_file(base, "/src/fmt/print.go", "x");
        let through = shadowing.read_dir("/src/fmt/print.go").unwrap_err();
        assert_eq!(direct.to_string(), through.to_string());
    }

    #[test]
    fn test_stat_override_and_ancestors() {
        let overlay = OverlayFs::single_file(base_fs(), "/src/gen/zz.go", "abc");
        let stat = overlay.stat("/src/gen/zz.go").unwrap();
        assert_eq!(stat.kind, FileKind::File);
        assert_eq!(stat.size, 3);
        assert_eq!(overlay.stat("/src/gen").unwrap().kind, FileKind::Dir);
        assert!(overlay.stat("/src/other").unwrap_err().is_not_found());
    }

    #[test]
    fn test_overlays_are_independent() {
        let base = base_fs();
        let a = OverlayFs::single_file(base.clone(), "/src/gen/zz.go", "from a");
        let b = OverlayFs::single_file(base.clone(), "/src/gen/zz.go", "from b");
        assert_eq!(a.read("/src/gen/zz.go").unwrap(), b"from a");
        assert_eq!(b.read("/src/gen/zz.go").unwrap(), b"from b");
    }

    #[test]
    fn test_multiple_overrides() {
        let overlay = OverlayFs::new(base_fs())
            .with_file("/src/gen/a.go", "package gen // a\n")
            .with_file("/src/gen/b.go", "package gen // b\n");
        assert_eq!(overlay.overridden_paths().count(), 2);
        let names: Vec<String> = overlay
            .read_dir("/src/gen")
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, ["a.go", "b.go"]);
    }
}
