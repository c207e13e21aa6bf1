//! Vault discovery and settings persistence
//!
//! A vault is any directory holding a `.pagezettel/` directory. Notes live
//! directly in the vault; `.pagezettel/settings.json` holds the settings.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{Result, ZettelError};
use crate::settings::Settings;
use crate::vault::{ensure_folder_exists, normalize_path, FsVault, Vault};

/// Directory marking the root of a vault
pub const STORE_DIR: &str = ".pagezettel";

/// Settings file inside [`STORE_DIR`]
pub const SETTINGS_FILE: &str = "settings.json";

/// Walk up from `start` to the first directory containing [`STORE_DIR`]
pub fn discover_root(start: &Path) -> Result<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        if current.join(STORE_DIR).is_dir() {
            return Ok(current);
        }

        match current.parent() {
            Some(parent) if parent != current => {
                current = parent.to_path_buf();
            }
            _ => {
                return Err(ZettelError::VaultNotFound {
                    search_root: start.to_path_buf(),
                });
            }
        }
    }
}

/// An opened vault with its settings
#[derive(Debug)]
pub struct Store {
    root: PathBuf,
    settings: Settings,
    vault: FsVault,
}

impl Store {
    /// Find the vault containing `start` and open it
    pub fn discover(start: &Path) -> Result<Self> {
        let root = discover_root(start)?;
        Self::open(&root)
    }

    /// Open the vault rooted at `root`
    #[tracing::instrument(skip(root), fields(root = %root.display()))]
    pub fn open(root: &Path) -> Result<Self> {
        if !root.join(STORE_DIR).is_dir() {
            return Err(ZettelError::VaultNotFound {
                search_root: root.to_path_buf(),
            });
        }

        let settings = Settings::load(&root.join(STORE_DIR).join(SETTINGS_FILE))?;
        Ok(Store {
            root: root.to_path_buf(),
            settings,
            vault: FsVault::new(root),
        })
    }

    /// Create a vault at `root` with default settings. Fails if one is
    /// already initialized there.
    pub fn init(root: &Path) -> Result<Self> {
        let store_dir = root.join(STORE_DIR);
        let settings_path = store_dir.join(SETTINGS_FILE);
        if settings_path.exists() {
            return Err(ZettelError::already_exists("vault", root.display()));
        }

        fs::create_dir_all(&store_dir)
            .map_err(|e| ZettelError::io_operation("create", store_dir.display(), e))?;

        let store = Store {
            root: root.to_path_buf(),
            settings: Settings::default(),
            vault: FsVault::new(root),
        };
        store.save_settings()?;
        info!(root = %root.display(), "vault_initialized");
        Ok(store)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn settings_path(&self) -> PathBuf {
        self.root.join(STORE_DIR).join(SETTINGS_FILE)
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    pub fn save_settings(&self) -> Result<()> {
        self.settings.save(&self.settings_path())
    }

    pub fn vault(&self) -> &FsVault {
        &self.vault
    }

    /// Vault-relative form of a path given on the command line, which may
    /// be absolute or relative to the current directory.
    pub fn relative_path(&self, path: &Path, cwd: &Path) -> Result<String> {
        let absolute = if path.is_absolute() {
            path.to_path_buf()
        } else {
            cwd.join(path)
        };
        let relative = absolute
            .strip_prefix(&self.root)
            .map_err(|_| ZettelError::invalid_value("path outside the vault", path.display()))?;
        Ok(normalize_path(&relative.to_string_lossy()))
    }

    /// Make sure every template's destination folder exists.
    /// Returns the folders that had to be created.
    pub fn initialize_all_folders(&self) -> Result<Vec<String>> {
        let mut created = Vec::new();
        for template in self.settings.templates.sorted() {
            let folder = normalize_path(&template.folder);
            if folder.is_empty() || self.vault.exists(&folder) {
                continue;
            }
            ensure_folder_exists(&self.vault, &folder)?;
            debug!(folder = %folder, template = %template.name, "template_folder_created");
            created.push(folder);
        }
        Ok(created)
    }
}
