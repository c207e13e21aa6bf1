//! Extraction templates
//!
//! A template describes where an extracted note goes and how it is named:
//! destination folder, file-name pattern, extension, optional body template
//! file, and whether the user is asked for an alias first.

mod set;

pub use set::TemplateSet;

use serde::{Deserialize, Serialize};

use crate::bail_template;
use crate::error::Result;

/// Pattern used when a template leaves the file-name format empty
pub const DEFAULT_FILE_NAME_FORMAT: &str = "{{zettel-id}}";

/// Extension used when a template leaves it empty
pub const DEFAULT_FILE_EXTENSION: &str = ".md";

/// Icon shown in notices when a template has none
pub const DEFAULT_ICON: &str = "📝";

fn default_file_extension() -> String {
    DEFAULT_FILE_EXTENSION.to_string()
}

fn default_true() -> bool {
    true
}

/// A user-defined extraction template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionTemplate {
    /// Stable identifier
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
    /// Destination folder, relative to the vault root; empty means the root
    #[serde(default)]
    pub folder: String,
    #[serde(default)]
    pub file_name_format: String,
    #[serde(default = "default_file_extension")]
    pub file_extension: String,
    /// Vault-relative path of the body template; empty means raw content
    #[serde(default)]
    pub template_path: String,
    #[serde(default = "default_true")]
    pub show_alias_input: bool,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(default)]
    pub order: u32,
}

impl ExtractionTemplate {
    pub fn file_name_format(&self) -> &str {
        if self.file_name_format.is_empty() {
            DEFAULT_FILE_NAME_FORMAT
        } else {
            &self.file_name_format
        }
    }

    pub fn file_extension(&self) -> &str {
        if self.file_extension.is_empty() {
            DEFAULT_FILE_EXTENSION
        } else {
            &self.file_extension
        }
    }

    pub fn icon(&self) -> &str {
        if self.icon.is_empty() {
            DEFAULT_ICON
        } else {
            &self.icon
        }
    }

    /// Tag added to every note created from this template
    pub fn tag(&self) -> String {
        self.name.to_lowercase()
    }

    /// Display label, optionally prefixed with the icon
    pub fn label(&self, with_icon: bool) -> String {
        if with_icon {
            format!("{} {}", self.icon(), self.name)
        } else {
            self.name.clone()
        }
    }

    /// Check the fields an editor must fill in
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            bail_template!("name must not be empty");
        }
        if self.file_name_format.trim().is_empty() {
            bail_template!("file name format must not be empty");
        }
        Ok(())
    }
}

/// Field values supplied when adding or editing a template.
/// `None` leaves the field as it is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateDraft {
    pub name: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub folder: Option<String>,
    pub file_name_format: Option<String>,
    pub file_extension: Option<String>,
    pub template_path: Option<String>,
    pub show_alias_input: Option<bool>,
    pub is_favorite: Option<bool>,
}

impl TemplateDraft {
    fn apply_to(self, template: &mut ExtractionTemplate) {
        if let Some(name) = self.name {
            template.name = name.trim().to_string();
        }
        if let Some(description) = self.description {
            template.description = description;
        }
        if let Some(icon) = self.icon {
            template.icon = icon;
        }
        if let Some(folder) = self.folder {
            template.folder = folder.trim().to_string();
        }
        if let Some(format) = self.file_name_format {
            template.file_name_format = format;
        }
        if let Some(extension) = self.file_extension {
            template.file_extension = extension;
        }
        if let Some(path) = self.template_path {
            template.template_path = path.trim().to_string();
        }
        if let Some(show) = self.show_alias_input {
            template.show_alias_input = show;
        }
        if let Some(favorite) = self.is_favorite {
            template.is_favorite = favorite;
        }
    }
}
