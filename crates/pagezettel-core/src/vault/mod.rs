//! Vault access
//!
//! Note assembly never touches the filesystem directly. Everything it
//! needs from the outside world goes through [`Vault`], which is
//! implemented for a directory on disk ([`FsVault`]) and for an in-process
//! map ([`MemoryVault`]).
//!
//! Paths handed to a vault are vault-relative and `/`-separated.

mod fs;
mod memory;

pub use fs::FsVault;
pub use memory::MemoryVault;

use tracing::debug;

use crate::error::Result;

/// Capabilities note assembly needs from the host
pub trait Vault {
    /// Whether a file or folder exists at `path`
    fn exists(&self, path: &str) -> bool;

    /// Whether `path` names a file rather than a folder
    fn is_file(&self, path: &str) -> bool;

    /// Create a single folder. Fails with `AlreadyExists` if it is present.
    fn create_folder(&self, path: &str) -> Result<()>;

    /// Read a file's text; `None` when there is no file at `path`
    fn read_file(&self, path: &str) -> Result<Option<String>>;

    /// Create a new file. Fails with `AlreadyExists` instead of overwriting.
    fn create_file(&self, path: &str, content: &str) -> Result<NoteFile>;

    /// Replace the content of an existing file
    fn write_file(&self, path: &str, content: &str) -> Result<()>;
}

/// A file inside the vault
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteFile {
    path: String,
}

impl NoteFile {
    pub fn new(path: impl Into<String>) -> Self {
        NoteFile {
            path: normalize_path(&path.into()),
        }
    }

    /// Vault-relative path, e.g. `Inbox/My Note.md`
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Last path segment, e.g. `My Note.md`
    pub fn name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }

    /// File name without its extension, e.g. `My Note`
    pub fn basename(&self) -> &str {
        let name = self.name();
        match name.rfind('.') {
            Some(0) | None => name,
            Some(dot) => &name[..dot],
        }
    }
}

/// Normalize a vault-relative path: `\` becomes `/`, empty and `.`
/// segments are dropped, and surrounding whitespace is trimmed.
pub fn normalize_path(path: &str) -> String {
    path.trim()
        .replace('\\', "/")
        .split('/')
        .filter(|segment| !segment.is_empty() && *segment != ".")
        .collect::<Vec<_>>()
        .join("/")
}

/// Join a folder and a file name; an empty folder means the vault root
pub fn join_path(folder: &str, name: &str) -> String {
    let folder = normalize_path(folder);
    if folder.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", folder, name)
    }
}

/// Make sure `path` and all its parents exist.
///
/// Idempotent. A folder that appears between the existence check and the
/// create call (another creation racing this one) counts as success.
pub fn ensure_folder_exists<V: Vault + ?Sized>(vault: &V, path: &str) -> Result<()> {
    let path = normalize_path(path);
    if path.is_empty() || vault.exists(&path) {
        return Ok(());
    }

    if let Some((parent, _)) = path.rsplit_once('/') {
        ensure_folder_exists(vault, parent)?;
    }

    if vault.exists(&path) {
        return Ok(());
    }

    match vault.create_folder(&path) {
        Ok(()) => {
            debug!(path = %path, "folder_created");
            Ok(())
        }
        Err(e) if e.is_already_exists() => {
            debug!(path = %path, "folder_already_exists");
            Ok(())
        }
        Err(e) => Err(e),
    }
}
