//! `pagezettel folders` command - create missing template folders

use crate::commands::dispatch::command::CommandContext;
use crate::commands::format::{output_by_format_result, print_json_status};
use pagezettel_core::error::Result;
use pagezettel_core::store::Store;

/// Execute the folders command
pub fn execute(ctx: &CommandContext, store: &Store) -> Result<()> {
    let created = store.initialize_all_folders()?;
    let messages = ctx.messages(Some(store));

    output_by_format_result!(ctx.cli.format,
        json => print_json_status(
            "ok",
            None,
            &[("folders_created", serde_json::json!(created))],
        ),
        human => {
            if created.is_empty() {
                if !ctx.cli.quiet {
                    println!("{}", messages.get("notices.foldersReady"));
                }
            } else {
                for folder in &created {
                    println!("{}", messages.format("notices.folderCreated", &[("folder", folder)]));
                }
            }
        }
    )
}
