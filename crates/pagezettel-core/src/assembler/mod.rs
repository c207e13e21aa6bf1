//! Note assembly
//!
//! Turns a template, a text selection and an optional alias/source note
//! into a finished note: expanded file name, merged front-matter and body.
//! All side effects go through the injected [`Vault`], [`Clock`] and
//! [`Notifier`].

mod notify;

pub use notify::{LogNotifier, Notifier};

use std::time::Instant;

use tracing::{debug, info};

use crate::clock::{Clock, SystemClock, Timestamp};
use crate::error::Result;
use crate::frontmatter::{merge_frontmatter, parse_frontmatter, render_with_frontmatter, MergePolicy};
use crate::metadata::NoteMetadata;
use crate::resolve::{expand_body, expand_file_name, zettel_id, TemplateVariables};
use crate::template::ExtractionTemplate;
use crate::trace_time;
use crate::vault::{ensure_folder_exists, join_path, normalize_path, NoteFile, Vault};

/// Input for one extraction
#[derive(Debug, Clone, Copy)]
pub struct ExtractRequest<'a> {
    pub template: &'a ExtractionTemplate,
    pub content: &'a str,
    pub alias: Option<&'a str>,
    pub source: Option<&'a NoteFile>,
}

impl<'a> ExtractRequest<'a> {
    pub fn new(template: &'a ExtractionTemplate, content: &'a str) -> Self {
        ExtractRequest {
            template,
            content,
            alias: None,
            source: None,
        }
    }

    pub fn alias(mut self, alias: Option<&'a str>) -> Self {
        self.alias = alias.filter(|a| !a.is_empty());
        self
    }

    pub fn source(mut self, source: Option<&'a NoteFile>) -> Self {
        self.source = source;
        self
    }
}

/// A fully rendered note that has not been written yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedNote {
    /// Alias, or the zettel id when no alias was given
    pub title: String,
    /// Destination folder, normalized; empty for the vault root
    pub folder: String,
    /// Vault-relative path of the new file
    pub path: String,
    pub content: String,
}

/// Builds and writes extracted notes
pub struct NoteAssembler<'a> {
    vault: &'a dyn Vault,
    clock: Box<dyn Clock + 'a>,
    notifier: Box<dyn Notifier + 'a>,
    policy: MergePolicy,
}

impl<'a> NoteAssembler<'a> {
    /// Assembler using the system clock and logging notifications
    pub fn new(vault: &'a dyn Vault) -> Self {
        NoteAssembler {
            vault,
            clock: Box::new(SystemClock),
            notifier: Box::new(LogNotifier),
            policy: MergePolicy::default(),
        }
    }

    pub fn with_clock(mut self, clock: impl Clock + 'a) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn with_notifier(mut self, notifier: impl Notifier + 'a) -> Self {
        self.notifier = Box::new(notifier);
        self
    }

    pub fn with_merge_policy(mut self, policy: MergePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Create a note from `template` and return the new file.
    ///
    /// The destination folder is created first and stays even if a later
    /// step fails. A file already at the target path is never overwritten;
    /// the collision is returned as an `AlreadyExists` error.
    pub fn create_note(
        &self,
        template: &ExtractionTemplate,
        content: &str,
        alias: Option<&str>,
        source: Option<&NoteFile>,
    ) -> Result<NoteFile> {
        let request = ExtractRequest::new(template, content)
            .alias(alias)
            .source(source);
        self.create(&request)
    }

    /// Create a note from a prepared request
    pub fn create(&self, request: &ExtractRequest<'_>) -> Result<NoteFile> {
        let start = Instant::now();
        let now = self.clock.now();

        let folder = normalize_path(&request.template.folder);
        ensure_folder_exists(self.vault, &folder)?;

        let note = self.render(request, &now)?;
        let file = self.vault.create_file(&note.path, &note.content)?;

        info!(path = file.path(), template = %request.template.name, "note_created");
        self.notifier.notify(&format!(
            "{} Created: {}",
            request.template.icon(),
            note.title
        ));

        trace_time!(start, "create_note", path = file.path());
        Ok(file)
    }

    /// Render the note a request would produce without touching the vault
    /// beyond reading the body template.
    pub fn preview(&self, request: &ExtractRequest<'_>) -> Result<PreparedNote> {
        let now = self.clock.now();
        self.render(request, &now)
    }

    fn render(&self, request: &ExtractRequest<'_>, now: &Timestamp) -> Result<PreparedNote> {
        let template = request.template;
        let title = match request.alias {
            Some(alias) => alias.to_string(),
            None => zettel_id(now),
        };

        let folder = normalize_path(&template.folder);
        let file_name = format!(
            "{}{}",
            expand_file_name(template.file_name_format(), now, &title, request.alias),
            template.file_extension()
        );
        let path = join_path(&folder, &file_name);

        let (frontmatter, body) = match load_template(self.vault, &template.template_path) {
            Some(raw) => {
                let parsed = parse_frontmatter(&raw);
                let variables = TemplateVariables {
                    title: title.clone(),
                    content: Some(request.content.to_string()),
                    date: now.to_rfc3339(),
                    alias: request.alias.map(str::to_string),
                };
                (parsed.frontmatter, expand_body(&parsed.body, &variables, now))
            }
            None => (None, request.content.to_string()),
        };
        let body = if body.is_empty() {
            request.content.to_string()
        } else {
            body
        };

        let mut metadata = NoteMetadata::new(now)
            .with_tag(template.tag())
            .with_alias(request.alias.unwrap_or(""));
        if let Some(source) = request.source {
            metadata = metadata.with_source_note(source.basename());
        }

        let merged = merge_frontmatter(metadata.to_mapping()?, frontmatter.as_ref(), &self.policy);
        let content = render_with_frontmatter(&merged, &body)?;

        debug!(path = %path, title = %title, has_frontmatter = frontmatter.is_some(), "note_rendered");
        Ok(PreparedNote {
            title,
            folder,
            path,
            content,
        })
    }
}

/// Read a body template from the vault.
///
/// An empty path, a missing file, a folder, or a read error all mean
/// "no template".
pub fn load_template(vault: &dyn Vault, path: &str) -> Option<String> {
    let path = normalize_path(path);
    if path.is_empty() {
        return None;
    }
    if !vault.is_file(&path) {
        debug!(path = %path, "template_file_missing");
        return None;
    }
    match vault.read_file(&path) {
        Ok(content) => content,
        Err(e) => {
            debug!(path = %path, error = %e, "template_file_unreadable");
            None
        }
    }
}
