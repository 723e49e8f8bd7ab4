//! Toolchain version context.
//!
//! The pair of values that parameterizes synthetic content: where the
//! toolchain tree is mounted inside the virtual workspace, and which release
//! of the toolchain it is. Workspace construction supplies one context per
//! build; different concurrent workspaces may carry different contexts, so
//! the context is a per-build value rather than process-global state.

use crate::error::ContextError;

/// Rooted mount point used for the toolchain tree when the caller does not
/// override it.
pub const DEFAULT_GOROOT: &str = "/goroot";

/// The toolchain parameters for one workspace build.
///
/// Read-only once built; validation happens in the builder so content
/// generation downstream is total.
///
/// # Example
///
/// ```
/// use go_overlay::ToolchainContext;
///
/// let ctx = ToolchainContext::builder()
///     .version("go1.11")
///     .build()
///     .unwrap();
/// assert_eq!(ctx.goroot(), "/goroot");
/// assert_eq!(ctx.version(), "go1.11");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ToolchainContext {
    goroot: String,
    version: String,
}

impl ToolchainContext {
    /// Create a context directly from both values.
    ///
    /// Prefer [`ToolchainContext::builder`] when either value may be absent;
    /// this constructor asserts both are non-empty in debug builds only.
    pub fn new(goroot: impl Into<String>, version: impl Into<String>) -> Self {
        let goroot = goroot.into();
        let version = version.into();
        debug_assert!(!goroot.is_empty() && !version.is_empty());
        Self { goroot, version }
    }

    /// Start building a context with [`DEFAULT_GOROOT`] preset.
    pub fn builder() -> ToolchainContextBuilder {
        ToolchainContextBuilder::new()
    }

    /// The rooted mount point of the toolchain tree.
    pub fn goroot(&self) -> &str {
        &self.goroot
    }

    /// The toolchain version identifier (e.g. `"go1.11"`).
    pub fn version(&self) -> &str {
        &self.version
    }
}

/// Builder for [`ToolchainContext`].
///
/// A context with either field missing or empty is a configuration error on
/// the part of the workspace-construction caller and is rejected here, at
/// build time, rather than surfacing later as malformed generated content.
#[derive(Debug, Clone, Default)]
pub struct ToolchainContextBuilder {
    goroot: Option<String>,
    version: Option<String>,
}

impl ToolchainContextBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the rooted mount point of the toolchain tree.
    ///
    /// Default: [`DEFAULT_GOROOT`].
    pub fn goroot(mut self, goroot: impl Into<String>) -> Self {
        self.goroot = Some(goroot.into());
        self
    }

    /// Set the toolchain version identifier.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Validate and build the context.
    pub fn build(self) -> Result<ToolchainContext, ContextError> {
        let goroot = match self.goroot {
            Some(g) if !g.is_empty() => g,
            Some(_) => return Err(ContextError::MissingGoroot),
            None => DEFAULT_GOROOT.to_string(),
        };
        let version = match self.version {
            Some(v) if !v.is_empty() => v,
            _ => return Err(ContextError::MissingVersion),
        };
        Ok(ToolchainContext { goroot, version })
    }
}
