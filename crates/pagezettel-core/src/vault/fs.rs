use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use super::{normalize_path, NoteFile, Vault};
use crate::error::{Result, ZettelError};

/// A vault backed by a directory on disk
#[derive(Debug, Clone)]
pub struct FsVault {
    root: PathBuf,
}

impl FsVault {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        FsVault { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute location of a vault-relative path. Paths that would leave
    /// the vault are rejected.
    pub fn resolve(&self, path: &str) -> Result<PathBuf> {
        let normalized = normalize_path(path);
        if normalized.split('/').any(|segment| segment == "..") {
            return Err(ZettelError::invalid_value("vault path", path));
        }
        Ok(self.root.join(normalized))
    }
}

impl Vault for FsVault {
    fn exists(&self, path: &str) -> bool {
        self.resolve(path).map(|p| p.exists()).unwrap_or(false)
    }

    fn is_file(&self, path: &str) -> bool {
        self.resolve(path).map(|p| p.is_file()).unwrap_or(false)
    }

    fn create_folder(&self, path: &str) -> Result<()> {
        let target = self.resolve(path)?;
        fs::create_dir(&target).map_err(|e| match e.kind() {
            ErrorKind::AlreadyExists => ZettelError::already_exists("folder", path),
            _ => ZettelError::io_operation("create folder", path, e),
        })
    }

    fn read_file(&self, path: &str) -> Result<Option<String>> {
        let target = self.resolve(path)?;
        if !target.is_file() {
            return Ok(None);
        }
        match fs::read_to_string(&target) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ZettelError::io_operation("read", path, e)),
        }
    }

    fn create_file(&self, path: &str, content: &str) -> Result<NoteFile> {
        let target = self.resolve(path)?;
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&target)
            .map_err(|e| match e.kind() {
                ErrorKind::AlreadyExists => ZettelError::already_exists("file", path),
                _ => ZettelError::io_operation("create file", path, e),
            })?;
        file.write_all(content.as_bytes())
            .map_err(|e| ZettelError::io_operation("write", path, e))?;
        Ok(NoteFile::new(path))
    }

    fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let target = self.resolve(path)?;
        fs::write(&target, content).map_err(|e| ZettelError::io_operation("write", path, e))
    }
}
