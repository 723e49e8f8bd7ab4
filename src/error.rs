//! Error types.
//!
//! The failure surface of this crate is deliberately narrow: classification
//! lookups cannot fail (absence from the standard library is a normal
//! answer), and synthetic content generation is total over a validated
//! [`ToolchainContext`](crate::ToolchainContext). What remains is filesystem
//! errors from the wrapped tree — which overlays must propagate unchanged —
//! and two configuration errors: a context missing required fields, and a
//! request for a toolchain version this build carries no manifest for.

use std::io;

use thiserror::Error;

/// Result alias for filesystem operations.
pub type FsResult<T> = Result<T, FsError>;

/// Error type for virtual filesystem operations.
///
/// Non-existence is its own variant so that callers (and overlays, which
/// forward errors verbatim) can distinguish "not there" from "there but
/// unreadable".
#[derive(Debug, Error)]
pub enum FsError {
    /// The path does not exist in this filesystem.
    #[error("file not found: {0}")]
    NotFound(String),

    /// A file operation was attempted on a directory.
    #[error("is a directory: {0}")]
    IsDirectory(String),

    /// A directory operation was attempted on a regular file.
    #[error("not a directory: {0}")]
    NotADirectory(String),

    /// The path is malformed or escapes the filesystem root.
    #[error("access denied: {0}")]
    AccessDenied(String),

    /// An underlying I/O error other than non-existence.
    #[error("i/o error reading {path}: {source}")]
    Io {
        /// The rooted path being accessed.
        path: String,
        /// The underlying error.
        source: io::Error,
    },
}

impl FsError {
    /// Map an `io::Error` onto the matching variant for `path`.
    pub fn from_io(err: io::Error, path: &str) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Self::NotFound(path.to_string()),
            io::ErrorKind::PermissionDenied => Self::AccessDenied(path.to_string()),
            io::ErrorKind::IsADirectory => Self::IsDirectory(path.to_string()),
            io::ErrorKind::NotADirectory => Self::NotADirectory(path.to_string()),
            _ => Self::Io {
                path: path.to_string(),
                source: err,
            },
        }
    }

    /// Whether this error means the path simply does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// The rooted path this error refers to.
    pub fn path(&self) -> &str {
        match self {
            Self::NotFound(p)
            | Self::IsDirectory(p)
            | Self::NotADirectory(p)
            | Self::AccessDenied(p) => p,
            Self::Io { path, .. } => path,
        }
    }
}

/// Error type for [`ToolchainContextBuilder`](crate::ToolchainContextBuilder)
/// validation failures.
///
/// These are configuration errors on the part of the workspace-construction
/// caller; content generation itself never fails once a context exists.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContextError {
    /// No GOROOT mount point was supplied.
    #[error("toolchain context is missing a goroot")]
    MissingGoroot,

    /// No toolchain version identifier was supplied.
    #[error("toolchain context is missing a version")]
    MissingVersion,
}

/// Error returned when no standard-library manifest exists for a requested
/// toolchain version.
///
/// This is a hard configuration error: silently answering "not standard" for
/// every path would misclassify the whole standard library as external and
/// break dependency resolution downstream.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported toolchain version {version:?} (supported: {supported:?})")]
pub struct UnsupportedVersionError {
    /// The version that was requested.
    pub version: String,
    /// The versions this build carries manifests for.
    pub supported: &'static [&'static str],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_io_not_found() {
        let err = io::Error::new(io::ErrorKind::NotFound, "gone");
        let fs_err = FsError::from_io(err, "/src/missing.go");
        assert!(fs_err.is_not_found());
        assert_eq!(fs_err.path(), "/src/missing.go");
    }

    #[test]
    fn test_from_io_other() {
        let err = io::Error::new(io::ErrorKind::TimedOut, "slow disk");
        let fs_err = FsError::from_io(err, "/src/a.go");
        assert!(!fs_err.is_not_found());
        assert!(matches!(fs_err, FsError::Io { .. }));
    }

    #[test]
    fn test_display_includes_path() {
        let err = FsError::NotFound("/src/runtime/proc.go".into());
        assert!(err.to_string().contains("/src/runtime/proc.go"));
    }
}
