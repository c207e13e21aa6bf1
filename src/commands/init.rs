//! `pagezettel init` command - create a new vault
//!
//! - Writes `.pagezettel/settings.json` with the default templates
//! - Creates each template's destination folder unless `--no-folders`
//! - Fails when the directory already holds a vault

use crate::cli::InitArgs;
use crate::commands::dispatch::command::CommandContext;
use crate::commands::format::{output_by_format_result, print_json_status};
use pagezettel_core::error::Result;
use pagezettel_core::store::Store;

/// Execute the init command
pub fn execute(ctx: &CommandContext, args: &InitArgs) -> Result<()> {
    let root = ctx.root();
    let store = Store::init(&root)?;

    let created = if args.no_folders {
        Vec::new()
    } else {
        store.initialize_all_folders()?
    };

    let messages = ctx.messages(Some(&store));
    let root_display = store.root().display().to_string();
    let message = messages.format("notices.vaultInitialized", &[("path", &root_display)]);

    output_by_format_result!(ctx.cli.format,
        json => print_json_status(
            "ok",
            Some(&message),
            &[
                ("vault", serde_json::json!(root_display)),
                ("settings", serde_json::json!(store.settings_path().display().to_string())),
                ("folders_created", serde_json::json!(created)),
            ],
        ),
        human => {
            println!("{}", message);
            if !ctx.cli.quiet {
                for folder in &created {
                    println!("  {}", messages.format("notices.folderCreated", &[("folder", folder)]));
                }
            }
        }
    )
}
