//! Path derivation for example snippets, sidecar explanations, and output
//! pages.
//!
//! All functions here are pure: they only build paths, they never touch the
//! filesystem. The generator and the check sweep share them so both agree on
//! where a record's companion files live.

use std::path::{Path, PathBuf};

/// Filename suffix of a rule's example snippet.
pub const EXAMPLE_SUFFIX: &str = "PositiveCase.java";

/// Maps a dotted qualified name to its example snippet path under `base`.
///
/// Every dot becomes a path separator and the final segment gets
/// [`EXAMPLE_SUFFIX`] appended:
/// `com.acme.lint.DeadStore` → `<base>/com/acme/lint/DeadStorePositiveCase.java`.
pub fn example_path(base: &Path, qualified_name: &str) -> PathBuf {
    let mut rel = PathBuf::new();
    let mut segments = qualified_name.split('.').peekable();
    while let Some(segment) = segments.next() {
        if segments.peek().is_some() {
            rel.push(segment);
        } else {
            rel.push(format!("{segment}{EXAMPLE_SUFFIX}"));
        }
    }
    base.join(rel)
}

/// File name of a rule's example snippet, as shown on the rendered page.
pub fn example_file_name(qualified_name: &str) -> String {
    let class = qualified_name.rsplit('.').next().unwrap_or(qualified_name);
    format!("{class}{EXAMPLE_SUFFIX}")
}

/// Path of the sidecar explanation file for `short_name` under `base`.
pub fn sidecar_path(base: &Path, short_name: &str) -> PathBuf {
    base.join(format!("{short_name}.md"))
}

/// Path of the rendered wiki page for `short_name` under `dir`.
pub fn output_path(dir: &Path, short_name: &str) -> PathBuf {
    dir.join(format!("{short_name}.md"))
}
