//! `pagezettel extract` command - turn a selection into a new note
//!
//! - Selection from `--text`, `--file` or stdin
//! - Template from `--template`, or picked interactively
//! - Alias from `--alias`, or prompted for when the template asks for one
//! - `--source` records a backlink and enables link insertion
//! - `--dry-run` prints the note without writing anything

use std::fs;
use std::io::{IsTerminal, Read};
use std::path::Path;
use std::process::Command;
use std::time::Instant;

use tracing::{debug, warn};

use crate::cli::{ExtractArgs, OutputFormat};
use crate::commands::dispatch::command::CommandContext;
use crate::commands::format::print_json_status;
use crate::commands::notice::{CliNotifier, Messages};
use crate::commands::picker;
use pagezettel_core::assembler::{ExtractRequest, NoteAssembler};
use pagezettel_core::bail_usage;
use pagezettel_core::error::{Result, ZettelError};
use pagezettel_core::store::Store;
use pagezettel_core::template::ExtractionTemplate;
use pagezettel_core::text::{insert_link, remove_default_indent, wiki_link};
use pagezettel_core::vault::{NoteFile, Vault};

/// Execute the extract command
pub fn execute(ctx: &CommandContext, store: &Store, args: &ExtractArgs) -> Result<()> {
    let start = Instant::now();
    let messages = ctx.messages(Some(store));
    let settings = store.settings();

    let selection = read_selection(ctx, args)?;
    if selection.trim().is_empty() {
        bail_usage!(messages.get("notices.selectText"));
    }

    let template = choose_template(ctx, store, args, &messages)?;
    debug!(template = %template.id, elapsed = ?start.elapsed(), "template_selected");

    let source = match &args.source {
        Some(path) => Some(resolve_source(store, path, &ctx.cwd)?),
        None => None,
    };

    let content = if args.remove_indent || settings.behavior.remove_default_indent {
        remove_default_indent(&selection)
    } else {
        selection.clone()
    };

    let alias = match &args.alias {
        Some(alias) => Some(alias.clone()),
        None if template.show_alias_input && !args.dry_run && ctx.is_interactive() => {
            picker::prompt_alias(&messages)?
        }
        None => None,
    };

    let notifier = CliNotifier::new(!ctx.cli.quiet && ctx.cli.format == OutputFormat::Human);
    let assembler = NoteAssembler::new(store.vault())
        .with_notifier(notifier)
        .with_merge_policy(settings.behavior.merge_policy.clone());
    let request = ExtractRequest::new(template, &content)
        .alias(alias.as_deref())
        .source(source.as_ref());

    if args.dry_run {
        let note = assembler.preview(&request)?;
        return match ctx.cli.format {
            OutputFormat::Json => print_json_status(
                "dry_run",
                None,
                &[
                    ("path", serde_json::json!(note.path)),
                    ("title", serde_json::json!(note.title)),
                    ("template", serde_json::json!(template.id)),
                    ("content", serde_json::json!(note.content)),
                ],
            ),
            OutputFormat::Human => {
                if !ctx.cli.quiet {
                    eprintln!("{}", messages.format("notices.dryRun", &[("path", &note.path)]));
                }
                println!("{}", note.content);
                Ok(())
            }
        };
    }

    store.initialize_all_folders()?;
    let file = assembler.create(&request)?;
    debug!(path = file.path(), elapsed = ?start.elapsed(), "note_written");

    let linked = match &source {
        Some(source) if args.link || settings.behavior.insert_link_after_extract => {
            link_source(ctx, store, source, &selection, &file, &messages)?
        }
        _ => false,
    };

    if args.open || settings.behavior.open_after_extract {
        let editor = ctx.config.editor.as_deref();
        if let Err(e) = open_in_editor(&store.root().join(file.path()), editor) {
            warn!(error = %e, path = file.path(), "open_in_editor_failed");
        }
    }

    match ctx.cli.format {
        OutputFormat::Json => print_json_status(
            "ok",
            None,
            &[
                ("path", serde_json::json!(file.path())),
                ("template", serde_json::json!(template.id)),
                ("linked", serde_json::json!(linked)),
            ],
        ),
        OutputFormat::Human => {
            println!("{}", file.path());
            Ok(())
        }
    }
}

/// The selection from `--text`, `--file`, or piped stdin
fn read_selection(ctx: &CommandContext, args: &ExtractArgs) -> Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }

    if let Some(path) = &args.file {
        let path = ctx.cwd.join(path);
        return fs::read_to_string(&path)
            .map_err(|e| ZettelError::io_operation("read", path.display(), e));
    }

    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Ok(String::new());
    }
    let mut text = String::new();
    stdin
        .read_to_string(&mut text)
        .map_err(|e| ZettelError::io_operation("read", "stdin", e))?;
    Ok(text)
}

fn choose_template<'s>(
    ctx: &CommandContext,
    store: &'s Store,
    args: &ExtractArgs,
    messages: &Messages,
) -> Result<&'s ExtractionTemplate> {
    let templates = &store.settings().templates;

    if let Some(query) = &args.template {
        return templates.find(query);
    }

    if templates.is_empty() {
        bail_usage!(messages.get("notices.noTemplates"));
    }

    if templates.len() == 1 {
        if let Some(only) = templates.sorted().first().copied() {
            return Ok(only);
        }
    }

    if !ctx.is_interactive() {
        bail_usage!("--template is required when not running interactively");
    }

    let items = picker::template_items(templates, store.settings().ui.show_emoji_in_commands);
    match picker::pick_single(&items, &messages.get("modals.templateSelect.placeholder"))? {
        Some(id) => templates.find(&id),
        None => Err(ZettelError::UsageError("no template selected".to_string())),
    }
}

/// A `--source` path as a note inside the vault
fn resolve_source(store: &Store, path: &Path, cwd: &Path) -> Result<NoteFile> {
    let relative = store.relative_path(path, cwd)?;
    if !store.vault().is_file(&relative) {
        return Err(ZettelError::not_found("source note", path.display()));
    }
    Ok(NoteFile::new(relative))
}

/// Replace the selection in the source note with a link to `note`.
/// Returns whether the source was changed.
fn link_source(
    ctx: &CommandContext,
    store: &Store,
    source: &NoteFile,
    selection: &str,
    note: &NoteFile,
    messages: &Messages,
) -> Result<bool> {
    let vault = store.vault();
    let Some(original) = vault.read_file(source.path())? else {
        return Ok(false);
    };

    let show = !ctx.cli.quiet && ctx.cli.format == OutputFormat::Human;
    match insert_link(&original, selection, note.basename()) {
        Some(updated) => {
            vault.write_file(source.path(), &updated)?;
            debug!(source = source.path(), note = note.path(), "link_inserted");
            if show {
                eprintln!(
                    "{}",
                    messages.format(
                        "notices.linkInserted",
                        &[("link", &wiki_link(note.basename())), ("source", source.path())]
                    )
                );
            }
            Ok(true)
        }
        None => {
            warn!(source = source.path(), "selection_not_found_in_source");
            if show {
                eprintln!(
                    "{}",
                    messages.format("notices.linkNotFound", &[("source", source.path())])
                );
            }
            Ok(false)
        }
    }
}

/// Open a file in the user's editor
fn open_in_editor(path: &Path, editor_override: Option<&str>) -> Result<()> {
    let editor = editor_override
        .map(String::from)
        .or_else(|| std::env::var("EDITOR").ok())
        .or_else(|| std::env::var("VISUAL").ok())
        .unwrap_or_else(|| "vi".to_string());

    Command::new(&editor).arg(path).status()?;
    Ok(())
}
