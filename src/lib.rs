//! # go-overlay
//!
//! Building blocks for assembling an in-memory, buildable Go source tree
//! for a specific toolchain version, so code fetched from VCS archives can
//! be type-checked without a local toolchain installation:
//!
//! - **Synthetic overlays**: archive zips lack files that only the release
//!   build process writes (notably `src/runtime/internal/sys/zversion.go`);
//!   [`OverlayFs`] patches them in transparently.
//! - **Standard-library classification**: an exact, version-keyed
//!   enumeration of the import paths in each supported release's standard
//!   distribution, for deciding whether an import resolves inside the
//!   bundled tree or must be fetched externally.
//!
//! Both are read-mostly and lock-free after construction; workspace builds
//! share them across threads freely.
//!
//! ## Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use go_overlay::prelude::*;
//!
//! // An archive-extracted GOROOT tree (zversion.go is missing).
//! let mut goroot = MemoryFs::new();
//! goroot.insert("/src/runtime/internal/sys/arch.go", "package sys\n");
//!
//! // Patch in the release-generated file for this workspace's toolchain.
//! let ctx = ToolchainContext::builder().version("go1.11").build()?;
//! let fs = with_zversion(Arc::new(goroot), &ctx);
//! assert!(fs.read(ZVERSION_PATH).is_ok());
//!
//! // Classify imports while resolving dependencies.
//! assert!(is_stdlib_path("net/http", "go1.11")?);
//! assert!(!is_stdlib_path("github.com/example/pkg", "go1.11")?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Modules
//!
//! - [`vfs`]: the read-only [`FileSystem`] trait and [`MemoryFs`]
//! - [`overlay`]: path-override decorator over any [`FileSystem`]
//! - [`zversion`]: synthesis of the release-generated file
//! - [`stdlib`]: version-keyed standard-library manifests
//! - [`mod@file`]: disk-backed [`LocalFs`] with content caching
//! - [`context`]: per-workspace toolchain parameters

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod context;
pub mod error;
pub mod file;
pub mod overlay;
pub mod stdlib;
pub mod vfs;
pub mod zversion;

// =============================================================================
// Prelude - import commonly used items with a single `use`
// =============================================================================

/// Prelude module for convenient imports.
///
/// Import everything commonly needed with:
///
/// ```
/// use go_overlay::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        is_stdlib_path, with_zversion, DirEntry, FileKind, FileSystem, FsError, LocalFs,
        MemoryFs, OverlayFs, StdlibSet, ToolchainContext, ZVERSION_PATH,
    };
}

// =============================================================================
// Re-exports
// =============================================================================

pub use context::{ToolchainContext, ToolchainContextBuilder, DEFAULT_GOROOT};
pub use error::{ContextError, FsError, FsResult, UnsupportedVersionError};
pub use file::LocalFs;
pub use overlay::OverlayFs;
pub use stdlib::{is_stdlib_path, supported_versions, StdlibSet};
pub use vfs::{DirEntry, FileKind, FileStat, FileSystem, MemoryFs};
pub use zversion::{with_zversion, zversion_source, ZVERSION_PATH};
