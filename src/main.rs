//! Pagezettel - extract text selections into Zettelkasten notes
//!
//! Pick an extraction template, hand over the selected text, and get a new
//! note with an expanded file name and merged front-matter.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use cli::{Cli, OutputFormat};
use pagezettel_core::error::{ExitCode as ZettelExitCode, ZettelError};
use pagezettel_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return reject_arguments(err),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => exit(ZettelExitCode::Success),
        Err(e) => {
            report(&cli, &e);
            exit(e.exit_code())
        }
    }
}

/// Bad arguments. Scripts asking for `--format json` get the JSON error
/// envelope on stderr; everyone else gets clap's own message.
fn reject_arguments(err: clap::Error) -> ExitCode {
    if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion)
        || !wants_json(env::args().skip(1))
    {
        err.exit();
    }

    let error = match err.kind() {
        ErrorKind::ValueValidation
        | ErrorKind::InvalidValue
        | ErrorKind::InvalidSubcommand
        | ErrorKind::UnknownArgument
        | ErrorKind::ArgumentConflict
        | ErrorKind::MissingRequiredArgument => ZettelError::UsageError(err.to_string()),
        _ => ZettelError::Other(err.to_string()),
    };
    eprintln!("{}", error.to_json());
    exit(error.exit_code())
}

/// Print a failed command's error in the requested format
fn report(cli: &Cli, error: &ZettelError) {
    match cli.format {
        OutputFormat::Json => eprintln!("{}", error.to_json()),
        OutputFormat::Human if !cli.quiet => eprintln!("error: {}", error),
        OutputFormat::Human => {}
    }
}

fn exit(code: ZettelExitCode) -> ExitCode {
    ExitCode::from(code as u8)
}

/// Whether the raw arguments ask for JSON output, read before clap has
/// accepted them
fn wants_json(mut args: impl Iterator<Item = String>) -> bool {
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--format=json" => return true,
            "--format" if args.next().as_deref() == Some("json") => return true,
            _ => {}
        }
    }
    false
}
