//! Path resolution utilities for CLI commands

use std::env;
use std::path::{Path, PathBuf};

/// Current working directory, or "." if it cannot be determined
pub fn current_dir() -> PathBuf {
    env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

/// Resolve the directory vault discovery starts from.
///
/// An explicit path is taken relative to `cwd` when it is not absolute.
/// The result is canonicalized when possible so vault-relative paths can
/// be computed by prefix stripping.
pub fn resolve_root_path(explicit: Option<&Path>, cwd: &Path) -> PathBuf {
    let root = match explicit {
        Some(path) if path.is_absolute() => path.to_path_buf(),
        Some(path) => cwd.join(path),
        None => cwd.to_path_buf(),
    };
    root.canonicalize().unwrap_or(root)
}
