//! Command implementations for all pagezettel commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use pagezettel_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        dispatch_command::execute(self, ctx)
    }
}

pub(super) mod dispatch_command {
    use super::*;

    use crate::cli::{ExtractArgs, InitArgs, TemplateCommands};
    use crate::commands::{extract, folders, init, template};

    pub(super) fn execute(cmd: &Commands, ctx: &CommandContext) -> Result<()> {
        match cmd {
            Commands::Init(args) => execute_init(ctx, args),
            Commands::Extract(args) => execute_extract(ctx, args),
            Commands::Template { command } => execute_template(ctx, command),
            Commands::Folders => execute_folders(ctx),
        }
    }

    fn execute_init(ctx: &CommandContext, args: &InitArgs) -> Result<()> {
        init::execute(ctx, args)
    }

    fn execute_extract(ctx: &CommandContext, args: &ExtractArgs) -> Result<()> {
        let store = ctx.open_store()?;
        crate::commands::dispatch::trace_command!(ctx.cli, ctx.start, "open_store");
        extract::execute(ctx, &store, args)
    }

    fn execute_template(ctx: &CommandContext, command: &TemplateCommands) -> Result<()> {
        let mut store = ctx.open_store()?;
        crate::commands::dispatch::trace_command!(ctx.cli, ctx.start, "open_store");
        template::execute(ctx, &mut store, command)
    }

    fn execute_folders(ctx: &CommandContext) -> Result<()> {
        let store = ctx.open_store()?;
        crate::commands::dispatch::trace_command!(ctx.cli, ctx.start, "open_store");
        folders::execute(ctx, &store)
    }
}
