//! Interactive prompts
//!
//! Template selection and the alias prompt, built on dialoguer. Callers
//! check that the terminal is interactive first.

use dialoguer::{Input, Select};
use pagezettel_core::error::{Result, ZettelError};
use pagezettel_core::template::{ExtractionTemplate, TemplateSet};

use crate::commands::notice::Messages;

/// An item that can be displayed in the picker
pub struct PickerItem {
    pub id: String,
    pub display: String,
}

impl PickerItem {
    pub fn from_template(template: &ExtractionTemplate, with_icon: bool) -> Self {
        let star = if template.is_favorite { " ★" } else { "" };
        let display = if template.description.is_empty() {
            format!("{}{}", template.label(with_icon), star)
        } else {
            format!(
                "{}{} - {}",
                template.label(with_icon),
                star,
                template.description
            )
        };
        Self {
            id: template.id.clone(),
            display,
        }
    }
}

/// Picker items for every template, favorites first
pub fn template_items(templates: &TemplateSet, with_icon: bool) -> Vec<PickerItem> {
    let (favorites, others): (Vec<_>, Vec<_>) =
        templates.sorted().into_iter().partition(|t| t.is_favorite);
    favorites
        .into_iter()
        .chain(others)
        .map(|t| PickerItem::from_template(t, with_icon))
        .collect()
}

/// Present a picker for a single item
///
/// Returns the selected id, or None if the user cancelled.
pub fn pick_single(items: &[PickerItem], prompt: &str) -> Result<Option<String>> {
    if items.is_empty() {
        return Ok(None);
    }

    let options: Vec<&str> = items.iter().map(|item| item.display.as_str()).collect();

    let selection = Select::new()
        .with_prompt(prompt)
        .items(&options)
        .default(0)
        .max_length(20)
        .interact_opt()
        .map_err(|e| ZettelError::io_operation("interactive picker", "stderr", e))?;

    Ok(selection.map(|index| items[index].id.clone()))
}

/// Ask for an alias; an empty answer means none
pub fn prompt_alias(messages: &Messages) -> Result<Option<String>> {
    eprintln!("{}", messages.get("modals.aliasInput.title"));
    eprintln!("  {}", messages.get("modals.aliasInput.inputDesc"));

    let alias: String = Input::new()
        .with_prompt(format!(
            "{} ({})",
            messages.get("modals.aliasInput.inputName"),
            messages.get("modals.aliasInput.inputPlaceholder")
        ))
        .allow_empty(true)
        .interact_text()
        .map_err(|e| ZettelError::io_operation("alias prompt", "stderr", e))?;

    let alias = alias.trim();
    Ok((!alias.is_empty()).then(|| alias.to_string()))
}
