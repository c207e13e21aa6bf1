//! Command dispatch logic for pagezettel

use std::time::Instant;

use crate::cli::paths::current_dir;
use crate::cli::Cli;
use pagezettel_core::error::Result;
use tracing::debug;

pub(crate) mod command;
mod commands;
mod macros;

use command::{Command, CommandContext, NoCommand};
pub(crate) use macros::trace_command;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let cwd = current_dir();

    debug!(elapsed = ?start.elapsed(), cwd = %cwd.display(), "resolve_cwd");

    let ctx = CommandContext::new(cli, cwd, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
