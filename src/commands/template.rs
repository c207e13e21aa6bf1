//! `pagezettel template` commands - manage extraction templates
//!
//! Every change is validated, then written back to the settings file.

use serde_json::json;

use crate::cli::template::TemplateCommands;
use crate::cli::OutputFormat;
use crate::commands::dispatch::command::CommandContext;
use crate::commands::format::print_json_status;
use pagezettel_core::error::Result;
use pagezettel_core::store::Store;
use pagezettel_core::template::{ExtractionTemplate, DEFAULT_FILE_NAME_FORMAT};

/// Execute a template subcommand
pub fn execute(ctx: &CommandContext, store: &mut Store, command: &TemplateCommands) -> Result<()> {
    let messages = ctx.messages(Some(&*store));

    match command {
        TemplateCommands::List { favorites } => list(ctx, store, *favorites),
        TemplateCommands::Show { template } => {
            let template = store.settings().templates.find(template)?;
            show(ctx, template)
        }
        TemplateCommands::Add { name, fields } => {
            let mut draft = fields.clone().into_draft(Some(name.clone()));
            draft
                .file_name_format
                .get_or_insert_with(|| DEFAULT_FILE_NAME_FORMAT.to_string());

            let added = store.settings_mut().templates.add(draft)?.clone();
            store.save_settings()?;
            let message = messages.format(
                "templates.added",
                &[("name", &added.name), ("id", &added.id)],
            );
            report(ctx, &message, &added)
        }
        TemplateCommands::Edit {
            template,
            name,
            fields,
        } => {
            let id = store.settings().templates.find(template)?.id.clone();
            let draft = fields.clone().into_draft(name.clone());
            let updated = store.settings_mut().templates.update(&id, draft)?.clone();
            store.save_settings()?;
            let message = messages.format("templates.updated", &[("name", &updated.name)]);
            report(ctx, &message, &updated)
        }
        TemplateCommands::Remove { template } => {
            let id = store.settings().templates.find(template)?.id.clone();
            let removed = store.settings_mut().templates.remove(&id)?;
            store.save_settings()?;
            let message = messages.format("templates.removed", &[("name", &removed.name)]);
            report(ctx, &message, &removed)
        }
        TemplateCommands::Move { template, position } => {
            let id = store.settings().templates.find(template)?.id.clone();
            store.settings_mut().templates.move_to(&id, *position)?;
            store.save_settings()?;
            let moved = store.settings().templates.find(&id)?;
            let message = messages.format(
                "templates.moved",
                &[("name", &moved.name), ("position", &moved.order.to_string())],
            );
            report(ctx, &message, moved)
        }
        TemplateCommands::Favorite { template } => {
            let id = store.settings().templates.find(template)?.id.clone();
            let favorite = store.settings_mut().templates.toggle_favorite(&id)?;
            store.save_settings()?;
            let toggled = store.settings().templates.find(&id)?;
            let key = if favorite {
                "templates.favorited"
            } else {
                "templates.unfavorited"
            };
            let message = messages.format(key, &[("name", &toggled.name)]);
            report(ctx, &message, toggled)
        }
    }
}

fn list(ctx: &CommandContext, store: &Store, favorites_only: bool) -> Result<()> {
    let settings = store.settings();
    let templates = if favorites_only {
        settings.templates.favorites()
    } else {
        settings.templates.sorted()
    };

    match ctx.cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&templates)?);
        }
        OutputFormat::Human => {
            if templates.is_empty() {
                if !ctx.cli.quiet {
                    println!("{}", ctx.messages(Some(store)).get("notices.noTemplates"));
                }
                return Ok(());
            }
            for template in templates {
                println!(
                    "{:>2}. {}{}  [{}]  {}",
                    template.order,
                    template.label(settings.ui.show_emoji_in_commands),
                    if template.is_favorite { " ★" } else { "" },
                    template.id,
                    destination(template),
                );
            }
        }
    }
    Ok(())
}

fn show(ctx: &CommandContext, template: &ExtractionTemplate) -> Result<()> {
    match ctx.cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(template)?);
        }
        OutputFormat::Human => {
            println!("{} {}", template.icon(), template.name);
            if !template.description.is_empty() {
                println!("  {}", template.description);
            }
            println!("  id:            {}", template.id);
            println!("  destination:   {}", destination(template));
            println!(
                "  template file: {}",
                if template.template_path.is_empty() {
                    "(none)"
                } else {
                    template.template_path.as_str()
                }
            );
            println!("  ask alias:     {}", template.show_alias_input);
            println!("  favorite:      {}", template.is_favorite);
            println!("  order:         {}", template.order);
        }
    }
    Ok(())
}

/// `folder/format.ext`, with the vault root shown as `/`
fn destination(template: &ExtractionTemplate) -> String {
    let folder = if template.folder.is_empty() {
        "/".to_string()
    } else {
        format!("{}/", template.folder.trim_end_matches('/'))
    };
    format!(
        "{}{}{}",
        folder,
        template.file_name_format(),
        template.file_extension()
    )
}

fn report(ctx: &CommandContext, message: &str, template: &ExtractionTemplate) -> Result<()> {
    match ctx.cli.format {
        OutputFormat::Json => print_json_status(
            "ok",
            Some(message),
            &[("template", json!(template))],
        ),
        OutputFormat::Human => {
            if !ctx.cli.quiet {
                println!("{}", message);
            }
            Ok(())
        }
    }
}
