//! Template subcommands for managing extraction templates

use clap::{Args, Subcommand};
use pagezettel_core::template::TemplateDraft;

/// Template subcommands
#[derive(Subcommand, Debug)]
pub enum TemplateCommands {
    /// List templates in display order
    List {
        /// Only favorites
        #[arg(long)]
        favorites: bool,
    },

    /// Show one template
    Show {
        /// Template id or name
        template: String,
    },

    /// Add a template
    Add {
        /// Display name
        name: String,

        #[command(flatten)]
        fields: TemplateFields,
    },

    /// Edit a template
    Edit {
        /// Template id or name
        template: String,

        /// New display name
        #[arg(long)]
        name: Option<String>,

        #[command(flatten)]
        fields: TemplateFields,
    },

    /// Remove a template
    Remove {
        /// Template id or name
        template: String,
    },

    /// Move a template to a position in the list (0 = first)
    Move {
        /// Template id or name
        template: String,

        /// Target position
        position: usize,
    },

    /// Toggle a template's favorite flag
    Favorite {
        /// Template id or name
        template: String,
    },
}

/// Editable template fields
#[derive(Args, Debug, Clone, Default)]
pub struct TemplateFields {
    /// Description shown in listings
    #[arg(long)]
    pub description: Option<String>,

    /// Icon (emoji)
    #[arg(long)]
    pub icon: Option<String>,

    /// Destination folder, relative to the vault root
    #[arg(long)]
    pub folder: Option<String>,

    /// File name pattern, e.g. "{{date}}-{{title}}"
    #[arg(long)]
    pub file_name_format: Option<String>,

    /// File extension, including the dot
    #[arg(long)]
    pub extension: Option<String>,

    /// Vault-relative path of a body template file
    #[arg(long)]
    pub template_path: Option<String>,

    /// Ask for an alias before extracting
    #[arg(long)]
    pub alias_input: Option<bool>,

    /// Mark as favorite
    #[arg(long)]
    pub favorite: Option<bool>,
}

impl TemplateFields {
    pub fn into_draft(self, name: Option<String>) -> TemplateDraft {
        TemplateDraft {
            name,
            description: self.description,
            icon: self.icon,
            folder: self.folder,
            file_name_format: self.file_name_format,
            file_extension: self.extension,
            template_path: self.template_path,
            show_alias_input: self.alias_input,
            is_favorite: self.favorite,
        }
    }
}
