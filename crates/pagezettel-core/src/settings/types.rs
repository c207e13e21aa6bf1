//! Settings type definitions

use serde::{Deserialize, Serialize};

use crate::frontmatter::MergePolicy;
use crate::template::{ExtractionTemplate, TemplateSet};

fn default_true() -> bool {
    true
}

/// Per-vault settings, stored as `.pagezettel/settings.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Extraction templates
    #[serde(default)]
    pub templates: TemplateSet,

    /// What happens around an extraction
    #[serde(default)]
    pub behavior: BehaviorSettings,

    /// Presentation
    #[serde(default)]
    pub ui: UiSettings,

    /// Message language (`en`, `ja`); falls back to the global config
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            templates: default_templates(),
            behavior: BehaviorSettings::default(),
            ui: UiSettings::default(),
            locale: None,
        }
    }
}

/// Behavior settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BehaviorSettings {
    /// Replace the selection in the source note with a link to the new note
    #[serde(default)]
    pub insert_link_after_extract: bool,

    /// Open the new note in the editor
    #[serde(default)]
    pub open_after_extract: bool,

    /// Strip the selection's shared indentation
    #[serde(default)]
    pub remove_default_indent: bool,

    #[serde(default)]
    pub merge_policy: MergePolicy,
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiSettings {
    /// Prefix template labels with their icon
    #[serde(default = "default_true")]
    pub show_emoji_in_commands: bool,

    /// Not read by the CLI; carried so settings files shared with the
    /// editor plugin keep this value when saved
    #[serde(default = "default_true")]
    pub show_context_menu_items: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        UiSettings {
            show_emoji_in_commands: true,
            show_context_menu_items: true,
        }
    }
}

fn builtin(id: &str, name: &str, icon: &str, folder: &str, format: &str, order: u32) -> ExtractionTemplate {
    ExtractionTemplate {
        id: id.to_string(),
        name: name.to_string(),
        description: String::new(),
        icon: icon.to_string(),
        folder: folder.to_string(),
        file_name_format: format.to_string(),
        file_extension: ".md".to_string(),
        template_path: String::new(),
        show_alias_input: true,
        is_favorite: false,
        order,
    }
}

/// Templates a freshly initialized vault starts with
pub fn default_templates() -> TemplateSet {
    let mut fleeting = builtin("fleeting", "Fleeting", "💭", "10-Fleeting", "{{zettel-id}}", 0);
    fleeting.description = "Quick thought or idea to process later".to_string();
    fleeting.show_alias_input = false;
    fleeting.is_favorite = true;

    let mut literature = builtin(
        "literature",
        "Literature",
        "📚",
        "20-Literature",
        "{{date}}-{{title}}",
        1,
    );
    literature.description = "Notes from books and articles".to_string();

    let mut permanent = builtin(
        "permanent",
        "Permanent",
        "💎",
        "30-Permanent",
        "{{zettel-id}}-{{title}}",
        2,
    );
    permanent.description = "Atomic, interconnected knowledge unit".to_string();

    TemplateSet::new(vec![fleeting, literature, permanent])
}
