use std::cell::RefCell;
use std::collections::BTreeMap;

use super::{normalize_path, NoteFile, Vault};
use crate::error::{Result, ZettelError};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Entry {
    Folder,
    File(String),
}

/// An in-process vault. Folders must exist before anything is created
/// inside them, as on disk.
#[derive(Debug, Default)]
pub struct MemoryVault {
    entries: RefCell<BTreeMap<String, Entry>>,
}

impl MemoryVault {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file, creating its parent folders
    pub fn with_file(self, path: &str, content: &str) -> Self {
        let path = normalize_path(path);
        {
            let mut entries = self.entries.borrow_mut();
            let mut prefix = String::new();
            let segments: Vec<&str> = path.split('/').collect();
            for segment in &segments[..segments.len().saturating_sub(1)] {
                if !prefix.is_empty() {
                    prefix.push('/');
                }
                prefix.push_str(segment);
                entries.entry(prefix.clone()).or_insert(Entry::Folder);
            }
            entries.insert(path, Entry::File(content.to_string()));
        }
        self
    }

    /// Content of the file at `path`, if any
    pub fn file(&self, path: &str) -> Option<String> {
        match self.entries.borrow().get(&normalize_path(path)) {
            Some(Entry::File(content)) => Some(content.clone()),
            _ => None,
        }
    }

    /// Paths of every file, sorted
    pub fn files(&self) -> Vec<String> {
        self.entries
            .borrow()
            .iter()
            .filter(|(_, entry)| matches!(entry, Entry::File(_)))
            .map(|(path, _)| path.clone())
            .collect()
    }

    /// Paths of every folder, sorted
    pub fn folders(&self) -> Vec<String> {
        self.entries
            .borrow()
            .iter()
            .filter(|(_, entry)| **entry == Entry::Folder)
            .map(|(path, _)| path.clone())
            .collect()
    }

    fn parent_exists(&self, path: &str) -> bool {
        match path.rsplit_once('/') {
            None => true,
            Some((parent, _)) => self.entries.borrow().get(parent) == Some(&Entry::Folder),
        }
    }
}

impl Vault for MemoryVault {
    fn exists(&self, path: &str) -> bool {
        let path = normalize_path(path);
        path.is_empty() || self.entries.borrow().contains_key(&path)
    }

    fn is_file(&self, path: &str) -> bool {
        self.file(path).is_some()
    }

    fn create_folder(&self, path: &str) -> Result<()> {
        let path = normalize_path(path);
        if self.exists(&path) {
            return Err(ZettelError::already_exists("folder", path));
        }
        if !self.parent_exists(&path) {
            return Err(ZettelError::io_operation(
                "create folder",
                &path,
                "parent folder does not exist",
            ));
        }
        self.entries.borrow_mut().insert(path, Entry::Folder);
        Ok(())
    }

    fn read_file(&self, path: &str) -> Result<Option<String>> {
        Ok(self.file(path))
    }

    fn create_file(&self, path: &str, content: &str) -> Result<NoteFile> {
        let path = normalize_path(path);
        if self.exists(&path) {
            return Err(ZettelError::already_exists("file", path));
        }
        if !self.parent_exists(&path) {
            return Err(ZettelError::io_operation(
                "create file",
                &path,
                "parent folder does not exist",
            ));
        }
        self.entries
            .borrow_mut()
            .insert(path.clone(), Entry::File(content.to_string()));
        Ok(NoteFile::new(path))
    }

    fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let path = normalize_path(path);
        let mut entries = self.entries.borrow_mut();
        match entries.get_mut(&path) {
            Some(Entry::File(existing)) => {
                *existing = content.to_string();
                Ok(())
            }
            _ => Err(ZettelError::not_found("file", path)),
        }
    }
}
