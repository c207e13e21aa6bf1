use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;
use ulid::Ulid;

use super::{ExtractionTemplate, TemplateDraft, DEFAULT_FILE_EXTENSION};
use crate::error::{Result, ZettelError};

/// The ordered collection of templates stored in the vault settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateSet(Vec<ExtractionTemplate>);

impl TemplateSet {
    pub fn new(templates: Vec<ExtractionTemplate>) -> Self {
        TemplateSet(templates)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Templates in display order (by `order`, ties broken by name)
    pub fn sorted(&self) -> Vec<&ExtractionTemplate> {
        let mut templates: Vec<_> = self.0.iter().collect();
        templates.sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.name.cmp(&b.name)));
        templates
    }

    pub fn favorites(&self) -> Vec<&ExtractionTemplate> {
        self.sorted().into_iter().filter(|t| t.is_favorite).collect()
    }

    pub fn get(&self, id: &str) -> Option<&ExtractionTemplate> {
        self.0.iter().find(|t| t.id == id)
    }

    /// Look a template up by id, or by case-insensitive name
    pub fn find(&self, query: &str) -> Result<&ExtractionTemplate> {
        if let Some(template) = self.get(query) {
            return Ok(template);
        }

        let lowered = query.to_lowercase();
        self.sorted()
            .into_iter()
            .find(|t| t.name.to_lowercase() == lowered)
            .ok_or_else(|| ZettelError::TemplateNotFound {
                query: query.to_string(),
            })
    }

    /// Every id must be unique
    pub fn check_unique_ids(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for template in &self.0 {
            if !seen.insert(template.id.as_str()) {
                return Err(ZettelError::already_exists("template id", &template.id));
            }
        }
        Ok(())
    }

    /// Create a template from `draft`, placing it last
    pub fn add(&mut self, draft: TemplateDraft) -> Result<&ExtractionTemplate> {
        let order = self.0.iter().map(|t| t.order.saturating_add(1)).max().unwrap_or(0);
        let mut template = ExtractionTemplate {
            id: Ulid::new().to_string(),
            name: String::new(),
            description: String::new(),
            icon: String::new(),
            folder: String::new(),
            file_name_format: String::new(),
            file_extension: DEFAULT_FILE_EXTENSION.to_string(),
            template_path: String::new(),
            show_alias_input: true,
            is_favorite: false,
            order,
        };
        draft.apply_to(&mut template);
        template.validate()?;

        debug!(id = %template.id, name = %template.name, order, "template_add");
        self.0.push(template);
        let last = self.0.len() - 1;
        Ok(&self.0[last])
    }

    /// Apply `draft` to the template with `id`. Nothing changes if the
    /// result would be invalid.
    pub fn update(&mut self, id: &str, draft: TemplateDraft) -> Result<&ExtractionTemplate> {
        let index = self.index_of(id)?;
        let mut edited = self.0[index].clone();
        draft.apply_to(&mut edited);
        edited.validate()?;

        debug!(id, "template_update");
        self.0[index] = edited;
        Ok(&self.0[index])
    }

    /// Delete a template; the remaining ones keep a contiguous order
    pub fn remove(&mut self, id: &str) -> Result<ExtractionTemplate> {
        let index = self.index_of(id)?;
        let removed = self.0.remove(index);
        self.renumber();
        debug!(id, "template_remove");
        Ok(removed)
    }

    /// Move a template to `position` in display order (clamped to the end)
    pub fn move_to(&mut self, id: &str, position: usize) -> Result<()> {
        self.index_of(id)?;
        let mut ordered: Vec<ExtractionTemplate> =
            self.sorted().into_iter().cloned().collect();
        let current = ordered.iter().position(|t| t.id == id).unwrap_or(0);
        let template = ordered.remove(current);
        let position = position.min(ordered.len());
        ordered.insert(position, template);

        for (i, template) in ordered.iter_mut().enumerate() {
            template.order = i as u32;
        }
        self.0 = ordered;
        debug!(id, position, "template_move");
        Ok(())
    }

    /// Flip the favorite flag, returning the new value
    pub fn toggle_favorite(&mut self, id: &str) -> Result<bool> {
        let index = self.index_of(id)?;
        let template = &mut self.0[index];
        template.is_favorite = !template.is_favorite;
        Ok(template.is_favorite)
    }

    fn index_of(&self, id: &str) -> Result<usize> {
        self.0
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| ZettelError::TemplateNotFound {
                query: id.to_string(),
            })
    }

    /// Rewrite `order` as 0..n following the current display order
    fn renumber(&mut self) {
        self.0
            .sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.name.cmp(&b.name)));
        for (i, template) in self.0.iter_mut().enumerate() {
            template.order = i as u32;
        }
    }
}

impl<'a> IntoIterator for &'a TemplateSet {
    type Item = &'a ExtractionTemplate;
    type IntoIter = std::slice::Iter<'a, ExtractionTemplate>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
