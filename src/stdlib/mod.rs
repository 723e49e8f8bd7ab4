//! Version-keyed standard-library classification.
//!
//! Import resolution has to decide, for every import path it meets, whether
//! the path lives inside the bundled toolchain tree or must be fetched as an
//! external dependency. The only correct policy is exact enumeration against
//! a manifest frozen per toolchain release: heuristics like "no dot in the
//! first segment" misclassify self-hosted internal packages one way and
//! promoted vendored packages the other, and the contents of the standard
//! distribution genuinely change between releases (paths added, removed, or
//! relocated as internal).
//!
//! Manifests live in per-version generated modules ([`go1_11`]) and are
//! compiled in as constant data; picking up a new toolchain release is a
//! data refresh (run `go list std` against that release and add the
//! generated module plus one lookup row), not a logic change. Only
//! manifests generated from a real installation ship — a hand-derived
//! approximation would misclassify genuine standard packages as external.
//!
//! # Matching
//!
//! Membership is exact string identity — case-sensitive, no prefix
//! semantics, no trailing-slash forgiveness. `encoding/json` is standard;
//! `encoding/json/v2`, `Encoding/json`, and `encoding/json/` are not unless
//! separately enumerated.
//!
//! # Example
//!
//! ```
//! use go_overlay::stdlib::{is_stdlib_path, StdlibSet};
//!
//! assert!(is_stdlib_path("fmt", "go1.11").unwrap());
//! assert!(!is_stdlib_path("github.com/example/pkg", "go1.11").unwrap());
//!
//! // Unknown versions are a hard error, never "everything is external".
//! assert!(StdlibSet::for_version("go9.99").is_err());
//! ```

use std::fmt;
use std::sync::LazyLock;

use rustc_hash::FxHashSet;
use tracing::debug;

use crate::error::UnsupportedVersionError;

pub mod go1_11;

/// Toolchain versions this build carries manifests for.
const SUPPORTED_VERSIONS: &[&str] = &["go1.11"];

/// The immutable set of standard-distribution import paths for one
/// toolchain version.
///
/// Built once on first use and shared process-wide; reads need no
/// synchronization.
pub struct StdlibSet {
    version: &'static str,
    paths: FxHashSet<&'static str>,
}

impl StdlibSet {
    fn build(version: &'static str, manifest: &'static [&'static str]) -> Self {
        debug!(version, packages = manifest.len(), "building stdlib set");
        Self {
            version,
            paths: manifest.iter().copied().collect(),
        }
    }

    /// Look up the set for a toolchain version.
    ///
    /// A version without a manifest is a configuration error: answering
    /// "not standard" for every path instead would push the entire standard
    /// library through external dependency fetching.
    pub fn for_version(version: &str) -> Result<&'static StdlibSet, UnsupportedVersionError> {
        static GO1_11: LazyLock<StdlibSet> =
            LazyLock::new(|| StdlibSet::build("go1.11", go1_11::PACKAGE_PATHS));

        match version {
            "go1.11" => Ok(&GO1_11),
            _ => Err(UnsupportedVersionError {
                version: version.to_string(),
                supported: SUPPORTED_VERSIONS,
            }),
        }
    }

    /// Whether `import_path` is part of this version's standard
    /// distribution. Exact match; absence is a normal answer.
    pub fn contains(&self, import_path: &str) -> bool {
        self.paths.contains(import_path)
    }

    /// The toolchain version this set describes.
    pub fn version(&self) -> &'static str {
        self.version
    }

    /// Number of enumerated packages.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Whether the set is empty (never true for a shipped manifest).
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Iterate over the enumerated import paths.
    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.paths.iter().copied()
    }
}

impl fmt::Debug for StdlibSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StdlibSet")
            .field("version", &self.version)
            .field("packages", &self.paths.len())
            .finish()
    }
}

/// Classify one import path against one toolchain version.
///
/// The query used by import resolution to branch between "resolve within
/// the bundled tree" and "fetch as an external dependency".
pub fn is_stdlib_path(
    import_path: &str,
    version: &str,
) -> Result<bool, UnsupportedVersionError> {
    Ok(StdlibSet::for_version(version)?.contains(import_path))
}

/// The toolchain versions this build can classify for.
pub fn supported_versions() -> &'static [&'static str] {
    SUPPORTED_VERSIONS
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_paths_classify_standard() {
        for version in supported_versions() {
            let set = StdlibSet::for_version(version).unwrap();
            for path in set.iter() {
                assert!(
                    is_stdlib_path(path, version).unwrap(),
                    "{path} should be standard at {version}"
                );
            }
        }
    }

    #[test]
    fn test_known_paths() {
        assert!(is_stdlib_path("fmt", "go1.11").unwrap());
        assert!(is_stdlib_path("net/http", "go1.11").unwrap());
        assert!(is_stdlib_path("runtime/internal/sys", "go1.11").unwrap());
        assert!(!is_stdlib_path("github.com/example/pkg", "go1.11").unwrap());
    }

    #[test]
    fn test_exact_match_only() {
        assert!(is_stdlib_path("encoding/json", "go1.11").unwrap());
        assert!(!is_stdlib_path("encoding/json/v2", "go1.11").unwrap());
        assert!(!is_stdlib_path("encoding/json/", "go1.11").unwrap());
        assert!(!is_stdlib_path("Net/Http", "go1.11").unwrap());
        assert!(!is_stdlib_path("", "go1.11").unwrap());
    }

    #[test]
    fn test_vendored_paths_enumerated_verbatim() {
        // go1.11 vendors under golang_org; the golang.org spelling belongs
        // to later releases and must not match by similarity.
        assert!(is_stdlib_path("vendor/golang_org/x/crypto/chacha20poly1305", "go1.11").unwrap());
        assert!(!is_stdlib_path("vendor/golang.org/x/crypto/chacha20poly1305", "go1.11").unwrap());
    }

    #[test]
    fn test_unknown_version_is_hard_error() {
        let err = StdlibSet::for_version("go9.99").unwrap_err();
        assert_eq!(err.version, "go9.99");
        assert!(err.supported.contains(&"go1.11"));
        assert!(is_stdlib_path("fmt", "go9.99").is_err());
    }

    #[test]
    fn test_set_is_shared() {
        let a = StdlibSet::for_version("go1.11").unwrap();
        let b = StdlibSet::for_version("go1.11").unwrap();
        assert!(std::ptr::eq(a, b), "set should be shared");
    }

    #[test]
    fn test_manifest_size() {
        let set = StdlibSet::for_version("go1.11").unwrap();
        assert_eq!(set.len(), 189);
        assert!(!set.is_empty());
    }

    #[test]
    fn test_debug_is_summary() {
        let set = StdlibSet::for_version("go1.11").unwrap();
        let rendered = format!("{set:?}");
        assert!(rendered.contains("go1.11"));
        assert!(rendered.contains("189"));
    }
}
