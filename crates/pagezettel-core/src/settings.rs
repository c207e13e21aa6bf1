//! Vault settings
//!
//! Settings live in `.pagezettel/settings.json`. Missing fields take their
//! defaults on load and the whole file is rewritten on every change.

pub mod types;

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Result, ZettelError};

pub use types::{default_templates, BehaviorSettings, Settings, UiSettings};

impl Settings {
    /// Load settings from a file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "settings_missing_using_defaults");
            return Ok(Settings::default());
        }

        let content = fs::read_to_string(path)?;
        let settings: Settings =
            serde_json::from_str(&content).map_err(|e| ZettelError::InvalidSettings {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        settings
            .templates
            .check_unique_ids()
            .map_err(|e| ZettelError::InvalidSettings {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        debug!(path = %path.display(), templates = settings.templates.len(), "settings_loaded");
        Ok(settings)
    }

    /// Save settings to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let mut content = serde_json::to_string_pretty(self)?;
        content.push('\n');
        fs::write(path, content).map_err(|e| ZettelError::io_operation("write", path.display(), e))?;
        debug!(path = %path.display(), "settings_saved");
        Ok(())
    }

    /// Locale from the settings, else `fallback`
    pub fn locale_or<'a>(&'a self, fallback: Option<&'a str>) -> Option<&'a str> {
        self.locale.as_deref().or(fallback)
    }
}
