//! Synthesis of the release-generated `zversion.go` file.
//!
//! Go's release process generates `src/runtime/internal/sys/zversion.go`
//! from the exact build parameters of that release; VCS archive zips are cut
//! from version control and therefore never contain it. Without the file,
//! type-checking anything that transitively imports the runtime fails with
//! errors like "StackGuardMultiplier not declared by package sys". This
//! module reproduces the file from a [`ToolchainContext`] and injects it
//! through an [`OverlayFs`].
//!
//! The experiment string and stack-guard multiplier are fixed safe defaults,
//! not measured release values; they are kept exactly as a real default
//! release build would emit them and are deliberately not configurable.

use std::sync::Arc;

use tracing::debug;

use crate::context::ToolchainContext;
use crate::overlay::OverlayFs;
use crate::vfs::FileSystem;

/// Rooted path of the generated file inside a GOROOT tree.
pub const ZVERSION_PATH: &str = "/src/runtime/internal/sys/zversion.go";

/// Quote a string as a Go double-quoted literal (the `%q` verb).
///
/// Escapes quotes, backslashes, and control characters below 0x20; other
/// non-printables (DEL and above) pass through unchanged. Inputs here are
/// goroot mount points and version identifiers, which stay within that
/// range.
fn quote_go(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            c if (c as u32) < 0x20 => {
                out.push_str(&format!("\\x{:02x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Render the content of `zversion.go` for `ctx`.
///
/// The output is byte-for-byte what a default release build writes for this
/// goroot/version pair, including the leading blank line and the unspaced
/// `Goexperiment`/`StackGuardMultiplier` declarations. Identical contexts
/// always produce identical bytes.
pub fn zversion_source(ctx: &ToolchainContext) -> String {
    format!(
        "\npackage sys\n\nconst DefaultGoroot = {}\nconst TheVersion = {}\nconst Goexperiment=\"\"\nconst StackGuardMultiplier=1",
        quote_go(ctx.goroot()),
        quote_go(ctx.version()),
    )
}

/// Wrap a GOROOT-rooted filesystem so that [`ZVERSION_PATH`] resolves to
/// generated content.
///
/// Content is rendered once, here, and served byte-identically on every
/// subsequent read; the underlying filesystem is never touched. Each call
/// produces an independent overlay, so concurrent workspaces targeting
/// different toolchain versions coexist over shared archive trees.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use go_overlay::{with_zversion, FileSystem, MemoryFs, ToolchainContext};
///
/// let goroot = MemoryFs::new(); // archive tree, zversion.go absent
/// let ctx = ToolchainContext::new("/goroot", "go1.11");
/// let fs = with_zversion(Arc::new(goroot), &ctx);
///
/// let content = fs.read(go_overlay::ZVERSION_PATH).unwrap();
/// assert!(String::from_utf8(content).unwrap().contains("go1.11"));
/// ```
pub fn with_zversion(fs: Arc<dyn FileSystem>, ctx: &ToolchainContext) -> OverlayFs {
    debug!(
        goroot = ctx.goroot(),
        version = ctx.version(),
        "injecting zversion.go"
    );
    OverlayFs::single_file(fs, ZVERSION_PATH, zversion_source(ctx))
}

// =============================================================================
// Tests
// =============================================================================
